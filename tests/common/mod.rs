#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

use restaurant_api::domain::entities::{
    Customer, CustomerWithOrders, MenuItem, NewCustomer, NewMenuItem, NewOrder, Order,
};
use restaurant_api::domain::repositories::{
    CustomerRepository, HealthRepository, MenuItemRepository, OrderRepository,
};
use restaurant_api::error::AppError;
use restaurant_api::routes::api_router;
use restaurant_api::state::AppState;

/// In-memory stand-in for the database, enforcing the same constraints as
/// the schema (unique email, order customer must exist).
#[derive(Default)]
pub struct InMemoryStore {
    customers: Mutex<Vec<Customer>>,
    menu_items: Mutex<Vec<MenuItem>>,
    orders: Mutex<Vec<Order>>,
    outage: Mutex<Option<String>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every subsequent call fail with a backend error.
    pub fn fail_with(&self, message: &str) {
        *self.outage.lock().unwrap() = Some(message.to_string());
    }

    pub fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        match self.outage.lock().unwrap().as_ref() {
            Some(message) => Err(AppError::backend(message.clone(), json!({}))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        self.check()?;
        let mut customers = self.customers.lock().unwrap();

        if customers.iter().any(|c| c.email == new_customer.email) {
            return Err(AppError::bad_request(
                "Unique constraint violation",
                json!({ "constraint": "customers_email_key" }),
            ));
        }

        let now = Utc::now();
        let customer = Customer {
            id: customers.len() as i64 + 1,
            name: new_customer.name,
            email: new_customer.email,
            phone: new_customer.phone,
            address: new_customer.address,
            created_at: now,
            updated_at: now,
        };
        customers.push(customer.clone());
        Ok(customer)
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        self.check()?;
        Ok(self.customers.lock().unwrap().clone())
    }

    async fn list_with_orders(&self) -> Result<Vec<CustomerWithOrders>, AppError> {
        self.check()?;
        let customers = self.customers.lock().unwrap().clone();
        let orders = self.orders.lock().unwrap();

        Ok(customers
            .into_iter()
            .map(|customer| CustomerWithOrders {
                orders: orders
                    .iter()
                    .filter(|o| o.customer_id == customer.id)
                    .cloned()
                    .collect(),
                customer,
            })
            .collect())
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryStore {
    async fn create(&self, new_item: NewMenuItem) -> Result<MenuItem, AppError> {
        self.check()?;
        let mut items = self.menu_items.lock().unwrap();

        let now = Utc::now();
        let item = MenuItem {
            id: items.len() as i64 + 1,
            name: new_item.name,
            description: new_item.description,
            price: new_item.price,
            category: new_item.category,
            available: new_item.available,
            created_at: now,
            updated_at: now,
        };
        items.push(item.clone());
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<MenuItem>, AppError> {
        self.check()?;
        Ok(self.menu_items.lock().unwrap().clone())
    }

    async fn list_available(&self) -> Result<Vec<MenuItem>, AppError> {
        self.check()?;
        Ok(self
            .menu_items
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.available)
            .cloned()
            .collect())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<MenuItem>, AppError> {
        self.check()?;
        Ok(self
            .menu_items
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.category == category)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        self.check()?;

        let customer_exists = self
            .customers
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.id == new_order.customer_id);
        if !customer_exists {
            return Err(AppError::bad_request(
                "Referenced record does not exist",
                json!({ "constraint": "orders_customer_id_fkey" }),
            ));
        }

        let mut orders = self.orders.lock().unwrap();
        let now = Utc::now();
        let order = Order {
            id: orders.len() as i64 + 1,
            customer_id: new_order.customer_id,
            status: new_order.status,
            total: new_order.total,
            notes: new_order.notes,
            created_at: now,
            updated_at: now,
        };
        orders.push(order.clone());
        Ok(order)
    }

    async fn list(&self) -> Result<Vec<Order>, AppError> {
        self.check()?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Order>, AppError> {
        self.check()?;
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect())
    }

    async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Order>, AppError> {
        self.check()?;
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl HealthRepository for InMemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    AppState::new(store.clone(), store.clone(), store.clone(), store)
}

pub fn create_test_server(store: Arc<InMemoryStore>) -> TestServer {
    TestServer::new(api_router(create_test_state(store))).unwrap()
}

pub async fn create_test_customer(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO customers (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_order(pool: &PgPool, customer_id: i64, status: &str, total: f64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO orders (customer_id, status, total) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(customer_id)
    .bind(status)
    .bind(total)
    .fetch_one(pool)
    .await
    .unwrap()
}
