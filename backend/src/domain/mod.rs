//! # Domain Module
//!
//! Business rules of the budget tracker: accounts and sessions, monthly
//! budgets and the expense transactions recorded against them.
//!
//! ## Module Organization
//!
//! - **user_service**: Signup and login with hashed passwords
//! - **session_service**: Opaque session tokens for authenticated requests
//! - **budget_service**: Monthly overview, income and multi-month trends
//! - **transaction_service**: Listing, weekly totals, creation and deletion
//! - **reporting**: Pure aggregations that shape the report responses
//! - **calendar**: Month keys, week ranges and display formatting
//! - **categories**: The built-in category palette
//!
//! ## Business Rules
//!
//! - A user has at most one budget per month, created on first write
//! - Transaction amounts are strictly positive, income is never negative
//! - A transaction belongs to the budget of the month of its date
//! - Users only ever see or modify their own budgets and transactions
//!
//! Services are generic over [`crate::storage::Connection`] so they never
//! depend on the SQLite implementation directly.

pub mod budget_service;
pub mod calendar;
pub mod categories;
pub mod error;
pub mod models;
pub mod reporting;
pub mod session_service;
pub mod transaction_service;
pub mod user_service;

pub use budget_service::BudgetService;
pub use error::{DomainError, DomainResult, ValidationError};
pub use session_service::SessionService;
pub use transaction_service::TransactionService;
pub use user_service::UserService;
