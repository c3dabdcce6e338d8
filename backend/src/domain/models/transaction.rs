//! Domain model for an expense transaction.
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub budget_id: i64,
    /// Always strictly positive
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A validated transaction that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    /// Month key (YYYY-MM) of the budget this transaction belongs to
    pub fn month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Spend summed over a single calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: f64,
}
