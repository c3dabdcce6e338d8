//! # SQLite Storage Module
//!
//! SQLite implementations of the storage traits.
//!
//! - **connection.rs** - pool setup and schema creation
//! - **repositories/** - one repository per table

pub mod connection;
pub mod repositories;

pub use connection::DbConnection;
pub use repositories::{BudgetRepository, TransactionRepository, UserRepository};
