//! Customer entity and read filters.

use chrono::{DateTime, Utc};

use super::order::Order;

/// A registered restaurant customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A customer together with all of their orders (eager-loaded).
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerWithOrders {
    pub customer: Customer,
    pub orders: Vec<Order>,
}

/// Input data for creating a new customer.
///
/// `name` and `email` are required and validated at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Selects which customer read operation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerFilter {
    #[default]
    All,
    /// Every customer with their orders attached.
    WithOrders,
}
