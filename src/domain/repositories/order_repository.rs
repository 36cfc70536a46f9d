//! Repository trait for order data access.

use crate::domain::entities::{NewOrder, Order};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for customer orders.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Creates a new order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the customer does not exist.
    /// Returns [`AppError::Backend`] on database errors.
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError>;

    /// Lists every order.
    async fn list(&self) -> Result<Vec<Order>, AppError>;

    /// Lists orders with exactly the given status.
    async fn list_by_status(&self, status: &str) -> Result<Vec<Order>, AppError>;

    /// Lists orders placed by one customer.
    async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Order>, AppError>;
}
