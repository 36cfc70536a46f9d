//! PostgreSQL implementation of the order repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewOrder, Order};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// Row shape of the `orders` table.
#[derive(Debug, FromRow)]
pub(super) struct OrderRow {
    pub id: i64,
    pub customer_id: i64,
    pub status: String,
    pub total: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: row.id,
            customer_id: row.customer_id,
            status: row.status,
            total: row.total,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for orders.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (customer_id, status, total, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING id, customer_id, status, total, notes, created_at, updated_at
            "#,
        )
        .bind(new_order.customer_id)
        .bind(new_order.status)
        .bind(new_order.total)
        .bind(new_order.notes)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_id, status, total, notes, created_at, updated_at
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_id, status, total, notes, created_at, updated_at
            FROM orders
            WHERE status = $1
            ORDER BY id
            "#,
        )
        .bind(status)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_id, status, total, notes, created_at, updated_at
            FROM orders
            WHERE customer_id = $1
            ORDER BY id
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }
}
