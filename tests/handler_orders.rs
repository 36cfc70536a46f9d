mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;

async fn server_with_customers(store: Arc<common::InMemoryStore>) -> TestServer {
    let server = common::create_test_server(store);

    for (name, email) in [("Ada", "ada@example.com"), ("Bob", "bob@example.com")] {
        server
            .post("/api/customers")
            .json(&json!({ "name": name, "email": email }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    server
}

#[tokio::test]
async fn test_order_defaults_to_pending() {
    let server = server_with_customers(common::InMemoryStore::new()).await;

    let response = server
        .post("/api/orders")
        .json(&json!({ "customerId": 1, "total": 42, "notes": "no onions" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["customerId"], 1);
    assert_eq!(body["data"]["notes"], "no onions");
}

#[tokio::test]
async fn test_filters() {
    let server = server_with_customers(common::InMemoryStore::new()).await;

    for order in [
        json!({ "customerId": 1, "total": 10, "status": "served" }),
        json!({ "customerId": 2, "total": 20 }),
        json!({ "customerId": 2, "total": 30, "status": "served" }),
    ] {
        server
            .post("/api/orders")
            .json(&order)
            .await
            .assert_status(StatusCode::CREATED);
    }

    let all = server.get("/api/orders").await.json::<Value>();
    assert_eq!(all["data"].as_array().unwrap().len(), 3);

    let served = server.get("/api/orders?status=served").await.json::<Value>();
    assert_eq!(served["data"].as_array().unwrap().len(), 2);

    let bobs = server.get("/api/orders?customerId=2").await.json::<Value>();
    assert_eq!(bobs["data"].as_array().unwrap().len(), 2);

    let both = server
        .get("/api/orders?status=pending&customerId=1")
        .await
        .json::<Value>();
    assert_eq!(both["data"].as_array().unwrap().len(), 1);
    assert_eq!(both["data"][0]["customerId"], 2);
}

#[tokio::test]
async fn test_missing_customer_id_creates_nothing() {
    let store = common::InMemoryStore::new();
    let server = server_with_customers(store.clone()).await;

    let response = server.post("/api/orders").json(&json!({ "total": 42 })).await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "success": false,
        "message": "Customer ID and total are required"
    }));
    assert_eq!(store.order_count(), 0);
}

#[tokio::test]
async fn test_unknown_customer_is_400() {
    let server = server_with_customers(common::InMemoryStore::new()).await;

    let response = server
        .post("/api/orders")
        .json(&json!({ "customerId": 99, "total": 42 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "Referenced record does not exist"
    );
}

#[tokio::test]
async fn test_non_numeric_customer_id_is_500() {
    let server = server_with_customers(common::InMemoryStore::new()).await;

    let response = server.get("/api/orders?customerId=abc").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_database_outage_on_list_is_500() {
    let store = common::InMemoryStore::new();
    let server = server_with_customers(store.clone()).await;
    store.fail_with("DB down");

    let response = server.get("/api/orders?status=pending").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "success": false, "message": "DB down" }));
}

#[tokio::test]
async fn test_repeated_status_uses_first_value() {
    let server = server_with_customers(common::InMemoryStore::new()).await;

    for order in [
        json!({ "customerId": 1, "total": 10 }),
        json!({ "customerId": 2, "total": 20, "status": "served" }),
    ] {
        server
            .post("/api/orders")
            .json(&order)
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/api/orders?status=pending&status=served").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["status"], "pending");
}
