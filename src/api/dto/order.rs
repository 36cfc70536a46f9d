//! DTOs for the orders endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::{non_empty, non_zero_amount, non_zero_id, required_fields_error};
use crate::domain::entities::{DEFAULT_ORDER_STATUS, NewOrder, Order, OrderFilter};
use crate::error::AppError;

pub const ORDER_REQUIRED_MESSAGE: &str = "Customer ID and total are required";

/// Query parameters of `GET /api/orders`.
#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,

    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
}

impl OrderListQuery {
    /// Resolves the read filter.
    ///
    /// Precedence: `status`, then `customerId`, then everything. `customerId`
    /// is only parsed when it is the selected filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the selected `customerId` is not an integer.
    pub fn filter(self) -> Result<OrderFilter, AppError> {
        if let Some(status) = non_empty(self.status) {
            return Ok(OrderFilter::Status(status));
        }

        if let Some(raw) = non_empty(self.customer_id) {
            let customer_id = raw.trim().parse::<i64>().map_err(|_| {
                AppError::bad_request("Invalid customer ID", json!({ "customerId": raw }))
            })?;
            return Ok(OrderFilter::Customer(customer_id));
        }

        Ok(OrderFilter::All)
    }
}

/// Request body of `POST /api/orders`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(required, custom(function = "non_zero_id"))]
    pub customer_id: Option<i64>,

    #[validate(required, custom(function = "non_zero_amount"))]
    pub total: Option<f64>,

    /// Defaults to `pending`.
    pub status: Option<String>,

    pub notes: Option<String>,
}

impl CreateOrderRequest {
    /// Validates required fields and converts into a domain [`NewOrder`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with [`ORDER_REQUIRED_MESSAGE`] when
    /// `customerId` or `total` is missing or zero.
    pub fn into_new_order(self) -> Result<NewOrder, AppError> {
        self.validate()
            .map_err(|e| required_fields_error(ORDER_REQUIRED_MESSAGE, &e))?;

        let (Some(customer_id), Some(total)) = (self.customer_id, self.total) else {
            return Err(AppError::bad_request(ORDER_REQUIRED_MESSAGE, json!({})));
        };

        Ok(NewOrder {
            customer_id,
            total,
            status: non_empty(self.status).unwrap_or_else(|| DEFAULT_ORDER_STATUS.to_string()),
            notes: self.notes,
        })
    }
}

/// Order as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub customer_id: i64,
    pub status: String,
    pub total: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderItem {
    fn from(o: Order) -> Self {
        OrderItem {
            id: o.id,
            customer_id: o.customer_id,
            status: o.status,
            total: o.total,
            notes: o.notes,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}
