use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{Budget, CategoryTotal, UserId};
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::BudgetStorage;

/// Repository for monthly budgets
#[derive(Clone)]
pub struct BudgetRepository {
    db: DbConnection,
}

impl BudgetRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub(crate) fn row_to_budget(row: &SqliteRow) -> Result<Budget> {
        Ok(Budget {
            id: row.try_get("id")?,
            user_id: UserId(row.try_get("user_id")?),
            month: row.try_get("month")?,
            income: row.try_get("income")?,
            last_updated: row.try_get("last_updated")?,
        })
    }
}

#[async_trait]
impl BudgetStorage for BudgetRepository {
    async fn find_budget(&self, user_id: UserId, month: &str) -> Result<Option<Budget>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, month, income, last_updated
            FROM budgets
            WHERE user_id = ? AND month = ?
            "#,
        )
        .bind(user_id.0)
        .bind(month)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_budget).transpose()
    }

    async fn find_budgets_between(
        &self,
        user_id: UserId,
        first_month: &str,
        last_month: &str,
    ) -> Result<Vec<Budget>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, month, income, last_updated
            FROM budgets
            WHERE user_id = ? AND month >= ? AND month <= ?
            ORDER BY month
            "#,
        )
        .bind(user_id.0)
        .bind(first_month)
        .bind(last_month)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_budget).collect()
    }

    async fn upsert_income(
        &self,
        user_id: UserId,
        month: &str,
        income: f64,
        now: DateTime<Utc>,
    ) -> Result<Budget> {
        let row = sqlx::query(
            r#"
            INSERT INTO budgets (user_id, month, income, last_updated)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (user_id, month) DO UPDATE SET
                income = excluded.income,
                last_updated = excluded.last_updated
            RETURNING id, user_id, month, income, last_updated
            "#,
        )
        .bind(user_id.0)
        .bind(month)
        .bind(income)
        .bind(now)
        .fetch_one(self.db.pool())
        .await?;

        Self::row_to_budget(&row)
    }

    async fn category_totals(&self, budget_id: i64) -> Result<Vec<CategoryTotal>> {
        let rows = sqlx::query(
            r#"
            SELECT category, SUM(amount) AS total, COUNT(id) AS count
            FROM transactions
            WHERE budget_id = ?
            GROUP BY category
            "#,
        )
        .bind(budget_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| {
                Ok(CategoryTotal {
                    category: row.try_get("category")?,
                    total: row.try_get("total")?,
                    count: row.try_get::<i64, _>("count")? as u32,
                })
            })
            .collect()
    }

    async fn total_spent(&self, budget_id: i64) -> Result<f64> {
        let total: f64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount), 0.0) FROM transactions WHERE budget_id = ?",
        )
        .bind(budget_id)
        .fetch_one(self.db.pool())
        .await?;
        Ok(total)
    }
}
