//! Handlers for the customers endpoints.

use axum::extract::State;

use crate::api::dto::customer::{
    CreateCustomerRequest, CustomerItem, CustomerList, CustomerListQuery,
};
use crate::api::extract::{CreateBody, ListQuery};
use crate::api::response::{ApiResponse, ReadFailure, WriteFailure};
use crate::state::AppState;

/// Lists customers, optionally with their orders.
///
/// # Endpoint
///
/// `GET /api/customers?withOrders=true`
///
/// # Errors
///
/// Any failure is answered with `500` and `{success: false, message}`.
pub async fn list_customers_handler(
    State(state): State<AppState>,
    ListQuery(query): ListQuery<CustomerListQuery>,
) -> Result<ApiResponse<CustomerList>, ReadFailure> {
    let listing = state.customer_service.get_customers(query.filter()).await?;

    Ok(ApiResponse::ok(listing.into()))
}

/// Registers a new customer.
///
/// # Endpoint
///
/// `POST /api/customers`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada Lovelace", "email": "ada@example.com", "phone": "...", "address": "..." }
/// ```
///
/// # Errors
///
/// Returns `400` when `name` or `email` is missing, the body is malformed,
/// or the customer cannot be stored.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    CreateBody(payload): CreateBody<CreateCustomerRequest>,
) -> Result<ApiResponse<CustomerItem>, WriteFailure> {
    let new_customer = payload.into_new_customer()?;

    let customer = state.customer_service.create_customer(new_customer).await?;

    Ok(ApiResponse::created(customer.into()))
}
