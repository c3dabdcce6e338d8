//! Static category metadata.
//!
//! Categories are free text on a transaction; this table only decides how a
//! name is displayed. Unknown names fall back to the "Other" styling.

use shared::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const DEFAULT_CATEGORIES: [CategoryStyle; 10] = [
    CategoryStyle { name: "Groceries", icon: "🍔", color: "#FF6384" },
    CategoryStyle { name: "Transport", icon: "🚗", color: "#36A2EB" },
    CategoryStyle { name: "Dining Out", icon: "🍕", color: "#FFCE56" },
    CategoryStyle { name: "Entertainment", icon: "🎬", color: "#4BC0C0" },
    CategoryStyle { name: "Shopping", icon: "👕", color: "#9966FF" },
    CategoryStyle { name: "Bills", icon: "💳", color: "#FF9F40" },
    CategoryStyle { name: "Healthcare", icon: "⚕️", color: "#FF6384" },
    CategoryStyle { name: "Housing", icon: "🏠", color: "#C9CBCF" },
    CategoryStyle { name: "Travel", icon: "✈️", color: "#4BC0C0" },
    CategoryStyle { name: "Other", icon: "📝", color: "#36A2EB" },
];

const FALLBACK_ICON: &str = "📝";
const FALLBACK_COLOR: &str = "#36A2EB";

/// Icon and color for a category name (exact, case-sensitive match)
pub fn category_style(name: &str) -> (&'static str, &'static str) {
    DEFAULT_CATEGORIES
        .iter()
        .find(|c| c.name == name)
        .map(|c| (c.icon, c.color))
        .unwrap_or((FALLBACK_ICON, FALLBACK_COLOR))
}

/// The predefined categories in display order
pub fn list_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|c| Category {
            name: c.name.to_string(),
            icon: c.icon.to_string(),
            color: c.color.to_string(),
        })
        .collect()
}
