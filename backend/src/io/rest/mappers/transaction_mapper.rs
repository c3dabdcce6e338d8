use crate::domain::calendar::format_time_of_day;
use crate::domain::categories::category_style;
use crate::domain::models::Transaction as DomainTransaction;
use shared::TransactionView;

pub struct TransactionMapper;

impl TransactionMapper {
    /// Render a stored transaction with its category icon and color
    pub fn to_view(domain: &DomainTransaction) -> TransactionView {
        let (icon, color) = category_style(&domain.category);
        TransactionView {
            id: domain.id,
            amount: domain.amount,
            category: domain.category.clone(),
            icon: icon.to_string(),
            color: color.to_string(),
            description: domain.description.clone(),
            date: domain.date.format("%Y-%m-%d").to_string(),
            time: format_time_of_day(domain.created_at),
        }
    }
}
