//! Order entity and read filters.

use chrono::{DateTime, Utc};

/// Status assigned to orders created without an explicit one.
pub const DEFAULT_ORDER_STATUS: &str = "pending";

/// A customer order.
///
/// `status` is free text (`pending`, `preparing`, `served`, ...); the API
/// filters on exact matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub status: String,
    pub total: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: i64,
    pub status: String,
    pub total: f64,
    pub notes: Option<String>,
}

/// Selects which order read operation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OrderFilter {
    #[default]
    All,
    Status(String),
    Customer(i64),
}
