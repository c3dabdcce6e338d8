// Repository modules
pub mod budget_repository;
pub mod transaction_repository;
pub mod user_repository;

// Re-export repository types
pub use budget_repository::BudgetRepository;
pub use transaction_repository::TransactionRepository;
pub use user_repository::UserRepository;
