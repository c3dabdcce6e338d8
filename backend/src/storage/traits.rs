//! # Storage Traits
//!
//! Storage abstractions used by the domain services. The SQLite
//! implementation lives in [`crate::storage::sqlite`]; services only see
//! these traits.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::models::{
    Budget, CategoryTotal, DailyTotal, NewTransaction, Transaction, User, UserId,
};

/// Account storage operations
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Insert a new user.
    /// Returns `None` when the username is already taken.
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Option<User>>;

    /// Look up a user by exact username
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;
}

/// Budget storage operations
#[async_trait]
pub trait BudgetStorage: Send + Sync {
    /// Budget for (user, month), if one exists
    async fn find_budget(&self, user_id: UserId, month: &str) -> Result<Option<Budget>>;

    /// All budgets of a user with `first_month <= month <= last_month`
    async fn find_budgets_between(
        &self,
        user_id: UserId,
        first_month: &str,
        last_month: &str,
    ) -> Result<Vec<Budget>>;

    /// Create the budget for (user, month) or overwrite its income.
    /// Either way `last_updated` is set to `now`.
    async fn upsert_income(
        &self,
        user_id: UserId,
        month: &str,
        income: f64,
        now: DateTime<Utc>,
    ) -> Result<Budget>;

    /// Per-category sums and counts of a budget's transactions
    async fn category_totals(&self, budget_id: i64) -> Result<Vec<CategoryTotal>>;

    /// Sum of all transaction amounts of a budget (0 when it has none)
    async fn total_spent(&self, budget_id: i64) -> Result<f64>;
}

/// Transaction storage operations
#[async_trait]
pub trait TransactionStorage: Send + Sync {
    /// All transactions of a budget, newest date first, then newest created first
    async fn list_transactions(&self, budget_id: i64) -> Result<Vec<Transaction>>;

    /// Per-day sums of a budget's transactions within `start..=end`
    async fn daily_totals(
        &self,
        budget_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyTotal>>;

    /// Store a transaction under the user's budget for its month.
    ///
    /// Creates the budget when missing and refreshes its `last_updated`,
    /// atomically with the insert.
    async fn insert_transaction(
        &self,
        user_id: UserId,
        transaction: &NewTransaction,
        now: DateTime<Utc>,
    ) -> Result<Transaction>;

    /// Delete a transaction if it belongs to one of the user's budgets.
    ///
    /// Refreshes the owning budget's `last_updated` atomically with the delete.
    /// Returns false when the transaction does not exist or is not owned by
    /// the user.
    async fn delete_owned_transaction(
        &self,
        user_id: UserId,
        transaction_id: i64,
        now: DateTime<Utc>,
    ) -> Result<bool>;
}

/// A storage connection that hands out repositories.
///
/// Services are generic over this so they never name a concrete backend.
pub trait Connection: Send + Sync + Clone {
    type UserRepository: UserStorage + Clone;
    type BudgetRepository: BudgetStorage + Clone;
    type TransactionRepository: TransactionStorage + Clone;

    fn create_user_repository(&self) -> Self::UserRepository;

    fn create_budget_repository(&self) -> Self::BudgetRepository;

    fn create_transaction_repository(&self) -> Self::TransactionRepository;
}
