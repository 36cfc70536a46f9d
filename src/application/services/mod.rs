//! Business logic services for the application layer.

pub mod customer_service;
pub mod menu_item_service;
pub mod order_service;

pub use customer_service::{CustomerListing, CustomerService};
pub use menu_item_service::MenuItemService;
pub use order_service::OrderService;
