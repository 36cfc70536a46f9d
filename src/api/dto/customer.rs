//! DTOs for the customers endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::order::OrderItem;
use super::required_fields_error;
use crate::application::services::CustomerListing;
use crate::domain::entities::{Customer, CustomerFilter, CustomerWithOrders, NewCustomer};
use crate::error::AppError;

pub const CUSTOMER_REQUIRED_MESSAGE: &str = "Name and email are required";

/// Query parameters of `GET /api/customers`.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerListQuery {
    #[serde(rename = "withOrders")]
    pub with_orders: Option<String>,
}

impl CustomerListQuery {
    /// Only the exact value `"true"` enables eager loading.
    pub fn filter(self) -> CustomerFilter {
        match self.with_orders.as_deref() {
            Some("true") => CustomerFilter::WithOrders,
            _ => CustomerFilter::All,
        }
    }
}

/// Request body of `POST /api/customers`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CreateCustomerRequest {
    /// Validates required fields and converts into a domain [`NewCustomer`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with [`CUSTOMER_REQUIRED_MESSAGE`].
    pub fn into_new_customer(self) -> Result<NewCustomer, AppError> {
        self.validate()
            .map_err(|e| required_fields_error(CUSTOMER_REQUIRED_MESSAGE, &e))?;

        let (Some(name), Some(email)) = (self.name, self.email) else {
            return Err(AppError::bad_request(CUSTOMER_REQUIRED_MESSAGE, json!({})));
        };

        Ok(NewCustomer {
            name,
            email,
            phone: self.phone,
            address: self.address,
        })
    }
}

/// Customer as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerItem {
    fn from(c: Customer) -> Self {
        CustomerItem {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            address: c.address,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Customer with the `orders` array attached.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerWithOrdersItem {
    #[serde(flatten)]
    pub customer: CustomerItem,
    pub orders: Vec<OrderItem>,
}

impl From<CustomerWithOrders> for CustomerWithOrdersItem {
    fn from(c: CustomerWithOrders) -> Self {
        CustomerWithOrdersItem {
            customer: c.customer.into(),
            orders: c.orders.into_iter().map(OrderItem::from).collect(),
        }
    }
}

/// Customer list payload; eager-loaded entries carry their orders.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CustomerList {
    Plain(Vec<CustomerItem>),
    WithOrders(Vec<CustomerWithOrdersItem>),
}

impl From<CustomerListing> for CustomerList {
    fn from(listing: CustomerListing) -> Self {
        match listing {
            CustomerListing::Plain(customers) => {
                CustomerList::Plain(customers.into_iter().map(CustomerItem::from).collect())
            }
            CustomerListing::WithOrders(customers) => CustomerList::WithOrders(
                customers
                    .into_iter()
                    .map(CustomerWithOrdersItem::from)
                    .collect(),
            ),
        }
    }
}
