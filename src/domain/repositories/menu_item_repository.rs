//! Repository trait for menu item data access.

use crate::domain::entities::{MenuItem, NewMenuItem};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the restaurant menu.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMenuItemRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Creates a new menu item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] on database errors.
    async fn create(&self, new_item: NewMenuItem) -> Result<MenuItem, AppError>;

    /// Lists every menu item.
    async fn list(&self) -> Result<Vec<MenuItem>, AppError>;

    /// Lists items marked as available.
    async fn list_available(&self) -> Result<Vec<MenuItem>, AppError>;

    /// Lists all items of a category (exact match), available or not.
    async fn list_by_category(&self, category: &str) -> Result<Vec<MenuItem>, AppError>;
}
