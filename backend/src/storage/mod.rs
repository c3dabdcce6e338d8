//! # Storage Module
//!
//! Persistence for users, budgets and transactions.
//!
//! The domain layer depends only on the traits in [`traits`]; the SQLite
//! implementation in [`sqlite`] provides them through [`DbConnection`].
//! Uniqueness of `(user_id, month)` and cascading deletes are enforced by the
//! schema, and every multi-step mutation runs inside one database transaction.

pub mod sqlite;
pub mod traits;

pub use sqlite::DbConnection;
pub use traits::{BudgetStorage, Connection, TransactionStorage, UserStorage};
