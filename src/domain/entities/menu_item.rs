//! Menu item entity and read filters.

use chrono::{DateTime, Utc};

/// A dish or drink offered by the restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new menu item.
///
/// New items are available unless stated otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

/// Selects which menu read operation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuItemFilter {
    All,
    /// Only items currently marked as available.
    #[default]
    Available,
    /// All items of a category, regardless of availability.
    Category(String),
}
