//! Aggregations behind the overview, listing, weekly and trend reports.
//!
//! These functions are pure: services load rows from storage and hand them
//! here to be shaped into the `shared` response types.

use chrono::{Datelike, NaiveDate};
use shared::{
    BudgetOverview, CategorySummary, MonthTrend, TransactionListResponse, WeekDayTotal,
};
use std::cmp::Ordering;
use std::collections::HashMap;

use super::calendar::{format_last_updated, month_label, week_dates};
use super::categories::category_style;
use super::models::{Budget, CategoryTotal, DailyTotal, Transaction};
use crate::io::rest::mappers::TransactionMapper;

/// Number of categories reported as the month's top spenders
pub const TOP_CATEGORY_COUNT: usize = 3;

/// Round to one decimal place for display percentages
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part` as a percentage of `whole`, or 0 when `whole` is not positive
fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        round1(part / whole * 100.0)
    } else {
        0.0
    }
}

/// Build the category breakdown, largest total first.
///
/// Ties are broken by name so the order is stable across queries.
pub fn summarize_categories(totals: &[CategoryTotal]) -> Vec<CategorySummary> {
    let total_spent: f64 = totals.iter().map(|t| t.total).sum();

    let mut summaries: Vec<CategorySummary> = totals
        .iter()
        .map(|t| {
            let (icon, color) = category_style(&t.category);
            CategorySummary {
                name: t.category.clone(),
                icon: icon.to_string(),
                color: color.to_string(),
                total: t.total,
                count: t.count,
                percentage: percentage_of(t.total, total_spent),
            }
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    summaries
}

/// Monthly overview for an existing budget
pub fn monthly_overview(budget: &Budget, totals: &[CategoryTotal]) -> BudgetOverview {
    let spent: f64 = totals.iter().map(|t| t.total).sum();
    let all_categories = summarize_categories(totals);
    let top_categories = all_categories
        .iter()
        .take(TOP_CATEGORY_COUNT)
        .cloned()
        .collect();

    BudgetOverview {
        income: budget.income,
        spent,
        remaining: budget.income - spent,
        percentage: percentage_of(spent, budget.income),
        last_updated: Some(format_last_updated(budget.last_updated)),
        top_categories,
        all_categories,
    }
}

/// Group transactions by ISO date with a running total per day.
///
/// Input order is kept within each day, so callers pass transactions
/// already sorted newest first.
pub fn group_by_day(transactions: &[Transaction]) -> TransactionListResponse {
    let mut response = TransactionListResponse::default();

    for transaction in transactions {
        let view = TransactionMapper::to_view(transaction);
        *response.daily_totals.entry(view.date.clone()).or_insert(0.0) += transaction.amount;
        response
            .transactions
            .entry(view.date.clone())
            .or_default()
            .push(view);
    }

    response
}

/// Seven per-day totals for the week containing `today`, Monday first
pub fn weekly_totals(today: NaiveDate, totals: &[DailyTotal]) -> Vec<WeekDayTotal> {
    let by_date: HashMap<NaiveDate, f64> = totals.iter().map(|t| (t.date, t.total)).collect();

    week_dates(today)
        .iter()
        .map(|day| WeekDayTotal {
            date: day.format("%Y-%m-%d").to_string(),
            day: day.format("%a").to_string(),
            day_num: day.day(),
            total: by_date.get(day).copied().unwrap_or(0.0),
            is_today: *day == today,
        })
        .collect()
}

/// Trend entry for one month; `data` is the budget's (income, spent) if any
pub fn month_trend(month: &str, data: Option<(f64, f64)>) -> MonthTrend {
    let (income, spent) = data.unwrap_or((0.0, 0.0));
    MonthTrend {
        month: month.to_string(),
        label: month_label(month),
        income,
        spent,
        savings: income - spent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::UserId;
    use chrono::{TimeZone, Utc};

    fn budget(income: f64) -> Budget {
        Budget {
            id: 1,
            user_id: UserId(1),
            month: "2026-10".to_string(),
            income,
            last_updated: Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap(),
        }
    }

    fn total(category: &str, total: f64, count: u32) -> CategoryTotal {
        CategoryTotal { category: category.to_string(), total, count }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_monthly_overview_breakdown() {
        let totals = vec![total("Transport", 20.0, 1), total("Groceries", 80.0, 2)];
        let overview = monthly_overview(&budget(1000.0), &totals);

        assert_eq!(overview.income, 1000.0);
        assert_eq!(overview.spent, 100.0);
        assert_eq!(overview.remaining, 900.0);
        assert_eq!(overview.percentage, 10.0);
        assert_eq!(overview.last_updated.as_deref(), Some("Oct 16, 2026 at 09:00 AM"));

        let names: Vec<&str> = overview.top_categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Groceries", "Transport"]);
        assert_eq!(overview.all_categories[0].total, 80.0);
        assert_eq!(overview.all_categories[0].percentage, 80.0);
        assert_eq!(overview.all_categories[0].count, 2);
        assert_eq!(overview.all_categories[0].icon, "🍔");
        assert_eq!(overview.all_categories[1].percentage, 20.0);
    }

    #[test]
    fn test_top_categories_capped_at_three() {
        let totals = vec![
            total("Bills", 40.0, 1),
            total("Travel", 10.0, 1),
            total("Housing", 30.0, 1),
            total("Shopping", 20.0, 1),
        ];
        let overview = monthly_overview(&budget(0.0), &totals);

        assert_eq!(overview.top_categories.len(), 3);
        assert_eq!(overview.all_categories.len(), 4);
        assert_eq!(overview.top_categories[2].name, "Shopping");
        // Zero income never divides
        assert_eq!(overview.percentage, 0.0);
        assert_eq!(overview.remaining, -100.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let totals = vec![
            total("A", 1.0, 1),
            total("B", 1.0, 1),
            total("C", 1.0, 1),
            total("D", 7.13, 1),
        ];
        let sum: f64 = summarize_categories(&totals).iter().map(|c| c.percentage).sum();
        assert!((sum - 100.0).abs() < 0.5, "sum was {}", sum);
    }

    #[test]
    fn test_percentages_zero_without_spend() {
        assert!(summarize_categories(&[]).is_empty());
        let overview = monthly_overview(&budget(500.0), &[]);
        assert_eq!(overview.spent, 0.0);
        assert_eq!(overview.remaining, 500.0);
        assert_eq!(overview.percentage, 0.0);
        assert!(overview.top_categories.is_empty());
    }

    #[test]
    fn test_ties_ordered_by_name() {
        let totals = vec![total("Travel", 10.0, 1), total("Bills", 10.0, 1)];
        let summaries = summarize_categories(&totals);
        assert_eq!(summaries[0].name, "Bills");
        assert_eq!(summaries[1].name, "Travel");
    }

    #[test]
    fn test_group_by_day_with_daily_totals() {
        let created = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let make = |id: i64, amount: f64, day: &str| Transaction {
            id,
            budget_id: 1,
            amount,
            category: "Unlisted".to_string(),
            description: String::new(),
            date: date(day),
            created_at: created,
        };
        let transactions = vec![
            make(3, 4.5, "2026-10-15"),
            make(2, 10.0, "2026-10-14"),
            make(1, 5.5, "2026-10-14"),
        ];

        let grouped = group_by_day(&transactions);
        assert_eq!(grouped.transactions.len(), 2);
        let day = &grouped.transactions["2026-10-14"];
        assert_eq!(day.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(day[0].icon, "📝");
        assert_eq!(grouped.daily_totals["2026-10-14"], 15.5);
        assert_eq!(grouped.daily_totals["2026-10-15"], 4.5);

        assert_eq!(group_by_day(&[]), TransactionListResponse::default());
    }

    #[test]
    fn test_weekly_totals_only_wednesday() {
        let today = date("2026-10-16");
        let totals = vec![DailyTotal { date: date("2026-10-14"), total: 45.0 }];

        let week = weekly_totals(today, &totals);
        assert_eq!(week.len(), 7);
        assert_eq!(week.iter().filter(|d| d.total == 0.0).count(), 6);
        assert_eq!(week[2].day, "Wed");
        assert_eq!(week[2].total, 45.0);
        assert_eq!(week[2].day_num, 14);

        let flagged: Vec<&WeekDayTotal> = week.iter().filter(|d| d.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, "2026-10-16");
        assert_eq!(week[0].day, "Mon");
        assert_eq!(week[6].day, "Sun");
    }

    #[test]
    fn test_weekly_totals_without_data() {
        let today = date("2026-10-12");
        let week = weekly_totals(today, &[]);
        assert!(week.iter().all(|d| d.total == 0.0));
        assert!(week[0].is_today);
        assert_eq!(week[0].day_num, today.day());
    }

    #[test]
    fn test_month_trend() {
        let with_budget = month_trend("2026-09", Some((1000.0, 250.0)));
        assert_eq!(with_budget.label, "Sep 2026");
        assert_eq!(with_budget.savings, 750.0);

        let empty = month_trend("2026-08", None);
        assert_eq!((empty.income, empty.spent, empty.savings), (0.0, 0.0, 0.0));
    }
}
