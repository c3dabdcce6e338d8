//! Monthly budget operations: overview, income and trends.
use chrono::{NaiveDate, Utc};
use shared::{BudgetOverview, TrendsResponse, UpdateIncomeRequest, UpdateIncomeResponse};
use std::collections::HashMap;
use tracing::info;

use crate::domain::calendar::{parse_month, trend_months};
use crate::domain::error::{DomainResult, ValidationError};
use crate::domain::models::UserId;
use crate::domain::reporting::{month_trend, monthly_overview};
use crate::storage::{BudgetStorage, Connection};

#[derive(Clone)]
pub struct BudgetService<C: Connection> {
    budget_repository: C::BudgetRepository,
}

impl<C: Connection> BudgetService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            budget_repository: connection.create_budget_repository(),
        }
    }

    /// Overview of a month. Months without a budget report all zeroes,
    /// including keys that no budget could ever have.
    pub async fn get_overview(&self, user_id: UserId, month: &str) -> DomainResult<BudgetOverview> {
        let Some(budget) = self.budget_repository.find_budget(user_id, month).await? else {
            return Ok(BudgetOverview::empty());
        };

        let totals = self.budget_repository.category_totals(budget.id).await?;
        Ok(monthly_overview(&budget, &totals))
    }

    /// Set a month's income, creating its budget when needed.
    ///
    /// Only well-formed `YYYY-MM` keys may create a budget.
    pub async fn set_income(
        &self,
        user_id: UserId,
        month: &str,
        request: UpdateIncomeRequest,
    ) -> DomainResult<UpdateIncomeResponse> {
        let month = parse_month(month)?;
        if !request.income.is_finite() || request.income < 0.0 {
            return Err(ValidationError::NegativeIncome.into());
        }

        let budget = self
            .budget_repository
            .upsert_income(user_id, &month, request.income, Utc::now())
            .await?;

        info!("Set income for user {} month {} to {:.2}", user_id, month, budget.income);
        Ok(UpdateIncomeResponse {
            success: true,
            income: budget.income,
        })
    }

    /// Income, spend and savings for the last `months` months, oldest first
    pub async fn get_trends(
        &self,
        user_id: UserId,
        months: u32,
        today: NaiveDate,
    ) -> DomainResult<TrendsResponse> {
        let keys = trend_months(today, months);
        let (Some(first), Some(last)) = (keys.iter().min(), keys.iter().max()) else {
            return Ok(TrendsResponse { trends: Vec::new() });
        };

        let budgets = self
            .budget_repository
            .find_budgets_between(user_id, first, last)
            .await?;
        let mut by_month = HashMap::with_capacity(budgets.len());
        for budget in budgets {
            let spent = self.budget_repository.total_spent(budget.id).await?;
            by_month.insert(budget.month.clone(), (budget.income, spent));
        }

        let trends = keys
            .iter()
            .map(|key| month_trend(key, by_month.get(key).copied()))
            .collect();
        Ok(TrendsResponse { trends })
    }
}
