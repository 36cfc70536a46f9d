//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CustomerRepository`] - Customers and their orders
//! - [`MenuItemRepository`] - Menu items
//! - [`OrderRepository`] - Orders
//! - [`HealthRepository`] - Database liveness probe
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod customer_repository;
pub mod health_repository;
pub mod menu_item_repository;
pub mod order_repository;

pub use customer_repository::CustomerRepository;
pub use health_repository::HealthRepository;
pub use menu_item_repository::MenuItemRepository;
pub use order_repository::OrderRepository;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
