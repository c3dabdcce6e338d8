//! Error taxonomy shared by all domain services.

/// A rule broken by client input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Amount must be positive")]
    NonPositiveAmount,
    #[error("Category is required")]
    EmptyCategory,
    #[error("Income cannot be negative")]
    NegativeIncome,
    #[error("Username and password required")]
    MissingCredentials,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
