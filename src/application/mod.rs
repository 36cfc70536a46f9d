//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI. Each list operation maps a read filter onto
//! exactly one repository call.
//!
//! # Available Services
//!
//! - [`services::customer_service::CustomerService`] - Customers, optionally with their orders
//! - [`services::menu_item_service::MenuItemService`] - Menu browsing by category or availability
//! - [`services::order_service::OrderService`] - Orders by status or customer

pub mod services;
