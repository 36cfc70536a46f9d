//! Menu service.

use std::sync::Arc;

use crate::domain::entities::{MenuItem, MenuItemFilter, NewMenuItem};
use crate::domain::repositories::MenuItemRepository;
use crate::error::AppError;

/// Service for browsing and extending the menu.
pub struct MenuItemService {
    repository: Arc<dyn MenuItemRepository>,
}

impl MenuItemService {
    /// Creates a new menu service.
    pub fn new(repository: Arc<dyn MenuItemRepository>) -> Self {
        Self { repository }
    }

    /// Lists menu items according to `filter`.
    ///
    /// Exactly one repository read is issued per call.
    pub async fn get_menu_items(&self, filter: MenuItemFilter) -> Result<Vec<MenuItem>, AppError> {
        match filter {
            MenuItemFilter::Category(category) => {
                self.get_menu_items_by_category(&category).await
            }
            MenuItemFilter::Available => self.get_available_menu_items().await,
            MenuItemFilter::All => self.get_all_menu_items().await,
        }
    }

    pub async fn get_all_menu_items(&self) -> Result<Vec<MenuItem>, AppError> {
        self.repository.list().await
    }

    pub async fn get_available_menu_items(&self) -> Result<Vec<MenuItem>, AppError> {
        self.repository.list_available().await
    }

    pub async fn get_menu_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MenuItem>, AppError> {
        self.repository.list_by_category(category).await
    }

    /// Adds an item to the menu.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] on database errors.
    pub async fn create_menu_item(&self, new_item: NewMenuItem) -> Result<MenuItem, AppError> {
        let item = self.repository.create(new_item).await?;
        tracing::info!(menu_item_id = item.id, category = %item.category, "Menu item created");
        Ok(item)
    }
}
