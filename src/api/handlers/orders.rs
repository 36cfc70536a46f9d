//! Handlers for the orders endpoints.

use axum::extract::State;

use crate::api::dto::order::{CreateOrderRequest, OrderItem, OrderListQuery};
use crate::api::extract::{CreateBody, ListQuery};
use crate::api::response::{ApiResponse, ReadFailure, WriteFailure};
use crate::state::AppState;

/// Lists orders.
///
/// # Endpoint
///
/// `GET /api/orders?status=pending` or `GET /api/orders?customerId=42`
///
/// `status` wins over `customerId` when both are present.
///
/// # Errors
///
/// Returns `500` on any failure, including a malformed `customerId`.
pub async fn list_orders_handler(
    State(state): State<AppState>,
    ListQuery(query): ListQuery<OrderListQuery>,
) -> Result<ApiResponse<Vec<OrderItem>>, ReadFailure> {
    let filter = query.filter()?;

    let orders = state.order_service.get_orders(filter).await?;

    Ok(ApiResponse::ok(orders.into_iter().map(OrderItem::from).collect()))
}

/// Places a new order.
///
/// # Endpoint
///
/// `POST /api/orders`
///
/// # Request Body
///
/// ```json
/// { "customerId": 42, "total": 27.5, "status": "pending", "notes": "no onions" }
/// ```
///
/// # Errors
///
/// Returns `400` when `customerId` or `total` is missing, the body is
/// malformed, the customer does not exist, or the order cannot be stored.
pub async fn create_order_handler(
    State(state): State<AppState>,
    CreateBody(payload): CreateBody<CreateOrderRequest>,
) -> Result<ApiResponse<OrderItem>, WriteFailure> {
    let new_order = payload.into_new_order()?;

    let order = state.order_service.create_order(new_order).await?;

    Ok(ApiResponse::created(order.into()))
}
