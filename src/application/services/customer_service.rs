//! Customer service.

use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerFilter, CustomerWithOrders, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// Result of a customer list request.
///
/// The eager-loaded variant carries each customer's orders.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerListing {
    Plain(Vec<Customer>),
    WithOrders(Vec<CustomerWithOrders>),
}

/// Service for reading and registering customers.
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    /// Creates a new customer service.
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Lists customers according to `filter`.
    ///
    /// Exactly one repository read is issued per call.
    ///
    /// # Errors
    ///
    /// Propagates repository errors unchanged.
    pub async fn get_customers(&self, filter: CustomerFilter) -> Result<CustomerListing, AppError> {
        match filter {
            CustomerFilter::All => self.get_all_customers().await.map(CustomerListing::Plain),
            CustomerFilter::WithOrders => self
                .get_customers_with_orders()
                .await
                .map(CustomerListing::WithOrders),
        }
    }

    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.repository.list().await
    }

    pub async fn get_customers_with_orders(&self) -> Result<Vec<CustomerWithOrders>, AppError> {
        self.repository.list_with_orders().await
    }

    /// Registers a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already registered.
    /// Returns [`AppError::Backend`] on database errors.
    pub async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let customer = self.repository.create(new_customer).await?;
        tracing::info!(customer_id = customer.id, "Customer created");
        Ok(customer)
    }
}
