//! Transaction listing, weekly totals, creation and deletion.
use chrono::{NaiveDate, Utc};
use shared::{
    CreateTransactionRequest, TransactionListResponse, TransactionView, WeeklyTotalsResponse,
};
use tracing::{info, warn};

use crate::domain::calendar::{parse_transaction_date, week_dates};
use crate::domain::error::{DomainError, DomainResult, ValidationError};
use crate::domain::models::{NewTransaction, UserId};
use crate::domain::reporting::{group_by_day, weekly_totals};
use crate::io::rest::mappers::TransactionMapper;
use crate::storage::{BudgetStorage, Connection, TransactionStorage};

#[derive(Clone)]
pub struct TransactionService<C: Connection> {
    budget_repository: C::BudgetRepository,
    transaction_repository: C::TransactionRepository,
}

impl<C: Connection> TransactionService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            budget_repository: connection.create_budget_repository(),
            transaction_repository: connection.create_transaction_repository(),
        }
    }

    /// A month's transactions grouped by day, newest first within each day
    pub async fn list_transactions(
        &self,
        user_id: UserId,
        month: &str,
    ) -> DomainResult<TransactionListResponse> {
        let Some(budget) = self.budget_repository.find_budget(user_id, month).await? else {
            return Ok(TransactionListResponse::default());
        };

        let transactions = self.transaction_repository.list_transactions(budget.id).await?;
        Ok(group_by_day(&transactions))
    }

    /// Daily totals of the month's budget for the current Monday-Sunday week.
    ///
    /// The week always contains `today`, whatever month is requested. A month
    /// without a budget still reports all seven days, at zero.
    pub async fn weekly_totals(
        &self,
        user_id: UserId,
        month: &str,
        today: NaiveDate,
    ) -> DomainResult<WeeklyTotalsResponse> {
        let week = week_dates(today);

        let totals = match self.budget_repository.find_budget(user_id, month).await? {
            Some(budget) => {
                self.transaction_repository
                    .daily_totals(budget.id, week[0], week[6])
                    .await?
            }
            None => Vec::new(),
        };

        Ok(WeeklyTotalsResponse {
            week: weekly_totals(today, &totals),
        })
    }

    /// Record an expense under the budget for its date's month
    pub async fn create_transaction(
        &self,
        user_id: UserId,
        request: CreateTransactionRequest,
        today: NaiveDate,
    ) -> DomainResult<TransactionView> {
        let transaction = validate_new_transaction(&request, today)?;

        let stored = self
            .transaction_repository
            .insert_transaction(user_id, &transaction, Utc::now())
            .await?;

        info!(
            "Created transaction {} for user {}: {:.2} in {}",
            stored.id, user_id, stored.amount, stored.category
        );
        Ok(TransactionMapper::to_view(&stored))
    }

    /// Delete one of the user's transactions
    pub async fn delete_transaction(&self, user_id: UserId, transaction_id: i64) -> DomainResult<()> {
        let deleted = self
            .transaction_repository
            .delete_owned_transaction(user_id, transaction_id, Utc::now())
            .await?;

        if !deleted {
            warn!("User {} tried to delete missing transaction {}", user_id, transaction_id);
            return Err(DomainError::NotFound("Transaction not found".to_string()));
        }

        info!("Deleted transaction {} for user {}", transaction_id, user_id);
        Ok(())
    }
}

fn validate_new_transaction(
    request: &CreateTransactionRequest,
    today: NaiveDate,
) -> Result<NewTransaction, ValidationError> {
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }

    let category = request.category.trim();
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }

    let date = parse_transaction_date(request.date.as_deref(), today)?;

    Ok(NewTransaction {
        amount: request.amount,
        category: category.to_string(),
        description: request
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        date,
    })
}
