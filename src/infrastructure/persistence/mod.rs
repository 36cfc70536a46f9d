//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are checked at runtime and rows are mapped through `FromRow` structs.
//! Every call borrows a connection from the shared pool and returns it when
//! the borrow ends, on success and failure alike.
//!
//! # Repositories
//!
//! - [`PgCustomerRepository`] - Customers and eager-loaded orders
//! - [`PgMenuItemRepository`] - Menu items
//! - [`PgOrderRepository`] - Orders
//! - [`PgHealthRepository`] - Liveness probe

pub mod pg_customer_repository;
pub mod pg_health_repository;
pub mod pg_menu_item_repository;
pub mod pg_order_repository;

pub use pg_customer_repository::PgCustomerRepository;
pub use pg_health_repository::PgHealthRepository;
pub use pg_menu_item_repository::PgMenuItemRepository;
pub use pg_order_repository::PgOrderRepository;
