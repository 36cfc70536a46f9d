//! API route configuration.
//!
//! Every read route is wrapped in [`panic::read_layer`] and every create
//! route in [`panic::write_layer`], so a panicking handler still answers
//! with the envelope and the status of its verb.

use crate::api::handlers::{
    create_customer_handler, create_menu_item_handler, create_order_handler,
    list_customers_handler, list_menu_items_handler, list_orders_handler,
};
use crate::api::middleware::panic;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Resource routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /customers` - List customers (`?withOrders=true` eager-loads orders)
/// - `POST /customers` - Register a customer
/// - `GET  /menu`      - List menu items (`?category=`, `?available=`)
/// - `POST /menu`      - Add a menu item
/// - `GET  /orders`    - List orders (`?status=`, `?customerId=`)
/// - `POST /orders`    - Place an order
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(list_customers_handler).layer(panic::read_layer()),
        )
        .route(
            "/customers",
            post(create_customer_handler).layer(panic::write_layer()),
        )
        .route("/menu", get(list_menu_items_handler).layer(panic::read_layer()))
        .route(
            "/menu",
            post(create_menu_item_handler).layer(panic::write_layer()),
        )
        .route("/orders", get(list_orders_handler).layer(panic::read_layer()))
        .route(
            "/orders",
            post(create_order_handler).layer(panic::write_layer()),
        )
}
