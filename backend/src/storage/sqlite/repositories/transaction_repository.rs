use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use tracing::debug;

use crate::domain::models::{DailyTotal, NewTransaction, Transaction, UserId};
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::TransactionStorage;

/// Repository for transaction operations
#[derive(Clone)]
pub struct TransactionRepository {
    db: DbConnection,
}

impl TransactionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_transaction(row: &SqliteRow) -> Result<Transaction> {
        Ok(Transaction {
            id: row.try_get("id")?,
            budget_id: row.try_get("budget_id")?,
            amount: row.try_get("amount")?,
            category: row.try_get("category")?,
            description: row.try_get("description")?,
            date: row.try_get("date")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl TransactionStorage for TransactionRepository {
    async fn list_transactions(&self, budget_id: i64) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, budget_id, amount, category, description, date, created_at
            FROM transactions
            WHERE budget_id = ?
            ORDER BY date DESC, created_at DESC, id DESC
            "#,
        )
        .bind(budget_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_transaction).collect()
    }

    async fn daily_totals(
        &self,
        budget_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyTotal>> {
        let rows = sqlx::query(
            r#"
            SELECT date, SUM(amount) AS total
            FROM transactions
            WHERE budget_id = ? AND date >= ? AND date <= ?
            GROUP BY date
            "#,
        )
        .bind(budget_id)
        .bind(start)
        .bind(end)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| {
                Ok(DailyTotal {
                    date: row.try_get("date")?,
                    total: row.try_get("total")?,
                })
            })
            .collect()
    }

    async fn insert_transaction(
        &self,
        user_id: UserId,
        transaction: &NewTransaction,
        now: DateTime<Utc>,
    ) -> Result<Transaction> {
        let month = transaction.month();
        let mut tx = self.db.pool().begin().await?;

        // Get or create the month's budget, touching last_updated either way
        let budget_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO budgets (user_id, month, income, last_updated)
            VALUES (?, ?, 0, ?)
            ON CONFLICT (user_id, month) DO UPDATE SET
                last_updated = excluded.last_updated
            RETURNING id
            "#,
        )
        .bind(user_id.0)
        .bind(&month)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO transactions (budget_id, amount, category, description, date, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(budget_id)
        .bind(transaction.amount)
        .bind(&transaction.category)
        .bind(&transaction.description)
        .bind(transaction.date)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!("Stored transaction {} in budget {} ({})", id, budget_id, month);

        Ok(Transaction {
            id,
            budget_id,
            amount: transaction.amount,
            category: transaction.category.clone(),
            description: transaction.description.clone(),
            date: transaction.date,
            created_at: now,
        })
    }

    async fn delete_owned_transaction(
        &self,
        user_id: UserId,
        transaction_id: i64,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let mut tx = self.db.pool().begin().await?;

        let budget_id: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT t.budget_id
            FROM transactions t
            JOIN budgets b ON b.id = t.budget_id
            WHERE t.id = ? AND b.user_id = ?
            "#,
        )
        .bind(transaction_id)
        .bind(user_id.0)
        .fetch_optional(&mut *tx)
        .await?;

        // Dropping the open transaction rolls it back
        let Some(budget_id) = budget_id else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(transaction_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE budgets SET last_updated = ? WHERE id = ?")
            .bind(now)
            .bind(budget_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!("Deleted transaction {} from budget {}", transaction_id, budget_id);
        Ok(true)
    }
}
