//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{CustomerService, MenuItemService, OrderService};
use crate::domain::repositories::{
    CustomerRepository, HealthRepository, MenuItemRepository, OrderRepository,
};
use crate::infrastructure::persistence::{
    PgCustomerRepository, PgHealthRepository, PgMenuItemRepository, PgOrderRepository,
};

/// Long-lived services shared across requests.
///
/// Services are built once at startup; handlers never construct or tear down
/// data-access objects themselves.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService>,
    pub menu_item_service: Arc<MenuItemService>,
    pub order_service: Arc<OrderService>,
    pub health_repository: Arc<dyn HealthRepository>,
}

impl AppState {
    /// Builds the state from arbitrary repository implementations.
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        menu_items: Arc<dyn MenuItemRepository>,
        orders: Arc<dyn OrderRepository>,
        health: Arc<dyn HealthRepository>,
    ) -> Self {
        Self {
            customer_service: Arc::new(CustomerService::new(customers)),
            menu_item_service: Arc::new(MenuItemService::new(menu_items)),
            order_service: Arc::new(OrderService::new(orders)),
            health_repository: health,
        }
    }

    /// Builds the state backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self::new(
            Arc::new(PgCustomerRepository::new(pool.clone())),
            Arc::new(PgMenuItemRepository::new(pool.clone())),
            Arc::new(PgOrderRepository::new(pool.clone())),
            Arc::new(PgHealthRepository::new(pool)),
        )
    }
}
