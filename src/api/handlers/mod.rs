//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource. Read handlers return
//! [`crate::api::response::ReadFailure`] and create handlers return
//! [`crate::api::response::WriteFailure`], which fixes the failure status.

pub mod customers;
pub mod health;
pub mod menu;
pub mod orders;

pub use customers::{create_customer_handler, list_customers_handler};
pub use health::health_handler;
pub use menu::{create_menu_item_handler, list_menu_items_handler};
pub use orders::{create_order_handler, list_orders_handler};

#[cfg(test)]
pub(crate) mod test_support {
    use axum_test::TestServer;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    use crate::domain::entities::{Customer, MenuItem, Order};
    use crate::domain::repositories::{
        MockCustomerRepository, MockHealthRepository, MockMenuItemRepository,
        MockOrderRepository,
    };
    use crate::routes::api_router;
    use crate::state::AppState;

    #[derive(Default)]
    pub struct Mocks {
        pub customers: MockCustomerRepository,
        pub menu_items: MockMenuItemRepository,
        pub orders: MockOrderRepository,
        pub health: MockHealthRepository,
    }

    pub fn make_server(mocks: Mocks) -> TestServer {
        let state = AppState::new(
            Arc::new(mocks.customers),
            Arc::new(mocks.menu_items),
            Arc::new(mocks.orders),
            Arc::new(mocks.health),
        );
        TestServer::new(api_router(state)).unwrap()
    }

    fn timestamp() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    pub fn customer(id: i64, name: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            address: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    pub fn menu_item(id: i64, name: &str, category: &str) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: None,
            price: 3.5,
            category: category.to_string(),
            available: true,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    pub fn order(id: i64, customer_id: i64, status: &str) -> Order {
        Order {
            id,
            customer_id,
            status: status.to_string(),
            total: 42.0,
            notes: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }
}
