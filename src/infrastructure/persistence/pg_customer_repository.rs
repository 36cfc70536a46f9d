//! PostgreSQL implementation of the customer repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use std::sync::Arc;

use super::pg_order_repository::OrderRow;
use crate::domain::entities::{Customer, CustomerWithOrders, NewCustomer, Order};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            address: row.address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for customers.
///
/// Eager loading of orders uses one query for customers and one for all of
/// their orders, grouped in memory (no N+1).
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (name, email, phone, address)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone, address, created_at, updated_at
            "#,
        )
        .bind(new_customer.name)
        .bind(new_customer.email)
        .bind(new_customer.phone)
        .bind(new_customer.address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, email, phone, address, created_at, updated_at
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn list_with_orders(&self) -> Result<Vec<CustomerWithOrders>, AppError> {
        let customers = self.list().await?;
        if customers.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = customers.iter().map(|c| c.id).collect();

        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_id, status, total, notes, created_at, updated_at
            FROM orders
            WHERE customer_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(ids.as_slice())
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut orders_by_customer: HashMap<i64, Vec<Order>> = HashMap::new();
        for row in rows {
            orders_by_customer
                .entry(row.customer_id)
                .or_default()
                .push(row.into());
        }

        Ok(customers
            .into_iter()
            .map(|customer| {
                let orders = orders_by_customer.remove(&customer.id).unwrap_or_default();
                CustomerWithOrders { customer, orders }
            })
            .collect())
    }
}
