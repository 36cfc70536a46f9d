//! Handlers for the menu endpoints.

use axum::extract::State;

use crate::api::dto::menu_item::{CreateMenuItemRequest, MenuItemResponse, MenuListQuery};
use crate::api::extract::{CreateBody, ListQuery};
use crate::api::response::{ApiResponse, ReadFailure, WriteFailure};
use crate::state::AppState;

/// Lists menu items.
///
/// # Endpoint
///
/// `GET /api/menu?category=drinks` or `GET /api/menu?available=false`
///
/// Without parameters only available items are returned.
pub async fn list_menu_items_handler(
    State(state): State<AppState>,
    ListQuery(query): ListQuery<MenuListQuery>,
) -> Result<ApiResponse<Vec<MenuItemResponse>>, ReadFailure> {
    let items = state.menu_item_service.get_menu_items(query.filter()).await?;

    Ok(ApiResponse::ok(
        items.into_iter().map(MenuItemResponse::from).collect(),
    ))
}

/// Adds an item to the menu.
///
/// # Endpoint
///
/// `POST /api/menu`
///
/// # Request Body
///
/// ```json
/// { "name": "Lemonade", "price": 3.5, "category": "drinks", "description": "...", "available": true }
/// ```
///
/// # Errors
///
/// Returns `400` when `name`, `price` or `category` is missing, the body is
/// malformed, or the item cannot be stored.
pub async fn create_menu_item_handler(
    State(state): State<AppState>,
    CreateBody(payload): CreateBody<CreateMenuItemRequest>,
) -> Result<ApiResponse<MenuItemResponse>, WriteFailure> {
    let new_item = payload.into_new_menu_item()?;

    let item = state.menu_item_service.create_menu_item(new_item).await?;

    Ok(ApiResponse::created(item.into()))
}
