//! PostgreSQL implementation of the menu item repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{MenuItem, NewMenuItem};
use crate::domain::repositories::MenuItemRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct MenuItemRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    category: String,
    available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            category: row.category,
            available: row.available,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for the menu.
pub struct PgMenuItemRepository {
    pool: Arc<PgPool>,
}

impl PgMenuItemRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn create(&self, new_item: NewMenuItem) -> Result<MenuItem, AppError> {
        let row = sqlx::query_as::<_, MenuItemRow>(
            r#"
            INSERT INTO menu_items (name, description, price, category, available)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, category, available, created_at, updated_at
            "#,
        )
        .bind(new_item.name)
        .bind(new_item.description)
        .bind(new_item.price)
        .bind(new_item.category)
        .bind(new_item.available)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<MenuItem>, AppError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT id, name, description, price, category, available, created_at, updated_at
            FROM menu_items
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn list_available(&self) -> Result<Vec<MenuItem>, AppError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT id, name, description, price, category, available, created_at, updated_at
            FROM menu_items
            WHERE available
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<MenuItem>, AppError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT id, name, description, price, category, available, created_at, updated_at
            FROM menu_items
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }
}
