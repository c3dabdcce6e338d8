use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static category entry with its display metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Emoji glyph shown next to the category
    pub icon: String,
    /// CSS hex color used for charts
    pub color: String,
}

/// Spending aggregated for one category within a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub total: f64,
    /// Number of transactions in this category
    pub count: u32,
    /// Share of the month's total spend, rounded to one decimal place
    pub percentage: f64,
}

/// Response for GET /api/budget/:month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetOverview {
    pub income: f64,
    pub spent: f64,
    pub remaining: f64,
    /// Spend as a percentage of income (0 when income is 0)
    pub percentage: f64,
    /// Human readable, e.g. "Oct 16, 2026 at 02:05 PM"
    pub last_updated: Option<String>,
    /// At most three categories, largest total first
    pub top_categories: Vec<CategorySummary>,
    pub all_categories: Vec<CategorySummary>,
}

impl BudgetOverview {
    /// Overview reported for a month that has no budget yet
    pub fn empty() -> Self {
        Self {
            income: 0.0,
            spent: 0.0,
            remaining: 0.0,
            percentage: 0.0,
            last_updated: None,
            top_categories: Vec::new(),
            all_categories: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateIncomeRequest {
    #[serde(default)]
    pub income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateIncomeResponse {
    pub success: bool,
    pub income: f64,
}

/// A transaction as rendered in listings, with resolved category styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionView {
    pub id: i64,
    pub amount: f64,
    pub category: String,
    pub icon: String,
    pub color: String,
    pub description: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    /// Creation time of day, e.g. "02:05 PM"
    pub time: String,
}

/// Response for GET /api/transactions/:month
///
/// Both maps are keyed by ISO date. Transactions within a day are ordered
/// newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: BTreeMap<String, Vec<TransactionView>>,
    pub daily_totals: BTreeMap<String, f64>,
}

/// One day of the current Monday-Sunday week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekDayTotal {
    pub date: String,
    /// Short weekday name ("Mon")
    pub day: String,
    pub day_num: u32,
    pub total: f64,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTotalsResponse {
    pub week: Vec<WeekDayTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    /// YYYY-MM-DD or ISO date-time; defaults to today
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionResponse {
    pub success: bool,
    pub transaction: TransactionView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTransactionResponse {
    pub success: bool,
}

/// Income, spend and savings for one month of the trend window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTrend {
    /// YYYY-MM
    pub month: String,
    /// Display label, e.g. "Oct 2026"
    pub label: String,
    pub income: f64,
    pub spent: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendsResponse {
    pub trends: Vec<MonthTrend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by signup and login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub username: String,
    /// Session token, also set as the `session` cookie
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Body of every failed API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
