//! DTOs for the menu endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::{non_empty, non_zero_amount, required_fields_error};
use crate::domain::entities::{MenuItem, MenuItemFilter, NewMenuItem};
use crate::error::AppError;

pub const MENU_ITEM_REQUIRED_MESSAGE: &str = "Name, price, and category are required";

/// Query parameters of `GET /api/menu`.
#[derive(Debug, Default, Deserialize)]
pub struct MenuListQuery {
    pub category: Option<String>,
    pub available: Option<String>,
}

impl MenuListQuery {
    /// Resolves the read filter.
    ///
    /// Precedence: `category`, then `available` (defaults to `"true"`), then
    /// everything.
    pub fn filter(self) -> MenuItemFilter {
        if let Some(category) = non_empty(self.category) {
            return MenuItemFilter::Category(category);
        }

        let available = non_empty(self.available).unwrap_or_else(|| "true".to_string());
        if available == "true" {
            MenuItemFilter::Available
        } else {
            MenuItemFilter::All
        }
    }
}

/// Request body of `POST /api/menu`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, custom(function = "non_zero_amount"))]
    pub price: Option<f64>,

    #[validate(required, length(min = 1))]
    pub category: Option<String>,

    pub description: Option<String>,

    /// Defaults to `true`.
    pub available: Option<bool>,
}

impl CreateMenuItemRequest {
    /// Validates required fields and converts into a domain [`NewMenuItem`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with [`MENU_ITEM_REQUIRED_MESSAGE`].
    pub fn into_new_menu_item(self) -> Result<NewMenuItem, AppError> {
        self.validate()
            .map_err(|e| required_fields_error(MENU_ITEM_REQUIRED_MESSAGE, &e))?;

        let (Some(name), Some(price), Some(category)) = (self.name, self.price, self.category)
        else {
            return Err(AppError::bad_request(MENU_ITEM_REQUIRED_MESSAGE, json!({})));
        };

        Ok(NewMenuItem {
            name,
            description: self.description,
            price,
            category,
            available: self.available.unwrap_or(true),
        })
    }
}

/// Menu item as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(m: MenuItem) -> Self {
        MenuItemResponse {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            category: m.category,
            available: m.available,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
