//! Repository trait for customer data access.

use crate::domain::entities::{Customer, CustomerWithOrders, NewCustomer};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for customers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Creates a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already registered.
    /// Returns [`AppError::Backend`] on database errors.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError>;

    /// Lists all customers ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] on database errors.
    async fn list(&self) -> Result<Vec<Customer>, AppError>;

    /// Lists all customers with their orders attached.
    ///
    /// Customers without orders are included with an empty order list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] on database errors.
    async fn list_with_orders(&self) -> Result<Vec<CustomerWithOrders>, AppError>;
}
