//! Order service.

use std::sync::Arc;

use crate::domain::entities::{NewOrder, Order, OrderFilter};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// Service for listing and placing orders.
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Lists orders according to `filter`.
    ///
    /// Exactly one repository read is issued per call.
    pub async fn get_orders(&self, filter: OrderFilter) -> Result<Vec<Order>, AppError> {
        match filter {
            OrderFilter::Status(status) => self.get_orders_by_status(&status).await,
            OrderFilter::Customer(customer_id) => self.get_orders_by_customer(customer_id).await,
            OrderFilter::All => self.get_all_orders().await,
        }
    }

    pub async fn get_all_orders(&self) -> Result<Vec<Order>, AppError> {
        self.repository.list().await
    }

    pub async fn get_orders_by_status(&self, status: &str) -> Result<Vec<Order>, AppError> {
        self.repository.list_by_status(status).await
    }

    pub async fn get_orders_by_customer(&self, customer_id: i64) -> Result<Vec<Order>, AppError> {
        self.repository.list_by_customer(customer_id).await
    }

    /// Places a new order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the customer does not exist.
    /// Returns [`AppError::Backend`] on database errors.
    pub async fn create_order(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let order = self.repository.create(new_order).await?;
        tracing::info!(
            order_id = order.id,
            customer_id = order.customer_id,
            status = %order.status,
            "Order created"
        );
        Ok(order)
    }
}
