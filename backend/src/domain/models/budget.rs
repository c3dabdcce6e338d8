//! Domain model for a monthly budget.
use chrono::{DateTime, Utc};

use super::user::UserId;

/// One budget per user per calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub id: i64,
    pub user_id: UserId,
    /// YYYY-MM
    pub month: String,
    pub income: f64,
    pub last_updated: DateTime<Utc>,
}

/// Sum and count of a budget's transactions sharing a category name
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub count: u32,
}
