//! Core domain entities representing the restaurant data model.
//!
//! Entities are plain data structures without persistence or HTTP concerns.
//!
//! # Entity Types
//!
//! - [`Customer`] - A registered customer
//! - [`MenuItem`] - A dish or drink on the menu
//! - [`Order`] - An order placed by a customer
//!
//! # Design Pattern
//!
//! Each entity has a separate `New*` struct used for creation and a `*Filter`
//! enum describing which read operation a list request maps to.

pub mod customer;
pub mod menu_item;
pub mod order;

pub use customer::{Customer, CustomerFilter, CustomerWithOrders, NewCustomer};
pub use menu_item::{MenuItem, MenuItemFilter, NewMenuItem};
pub use order::{DEFAULT_ORDER_STATUS, NewOrder, Order, OrderFilter};
