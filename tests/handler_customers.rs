mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_then_list_customers() {
    let server = common::create_test_server(common::InMemoryStore::new());

    let response = server
        .post("/api/customers")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "555-0100"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created = response.json::<Value>();
    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["phone"], "555-0100");
    assert!(created["data"]["createdAt"].is_string());

    let response = server.get("/api/customers").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_empty_customer_list_is_array() {
    let server = common::create_test_server(common::InMemoryStore::new());

    let response = server.get("/api/customers").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "success": true, "data": [] }));
}

#[tokio::test]
async fn test_with_orders_attaches_orders() {
    let server = common::create_test_server(common::InMemoryStore::new());

    server
        .post("/api/customers")
        .json(&json!({ "name": "Ada", "email": "ada@example.com" }))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/customers")
        .json(&json!({ "name": "Bob", "email": "bob@example.com" }))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/orders")
        .json(&json!({ "customerId": 1, "total": 12.5 }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/api/customers?withOrders=true").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"][0]["orders"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["orders"][0]["total"], 12.5);
    assert_eq!(body["data"][1]["orders"], json!([]));
}

#[tokio::test]
async fn test_with_orders_other_value_is_plain() {
    let server = common::create_test_server(common::InMemoryStore::new());

    server
        .post("/api/customers")
        .json(&json!({ "name": "Ada", "email": "ada@example.com" }))
        .await;

    let response = server.get("/api/customers?withOrders=yes").await;

    response.assert_status_ok();
    assert!(response.json::<Value>()["data"][0].get("orders").is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let server = common::create_test_server(common::InMemoryStore::new());
    let payload = json!({ "name": "Ada", "email": "ada@example.com" });

    server
        .post("/api/customers")
        .json(&payload)
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.post("/api/customers").json(&payload).await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "success": false,
        "message": "Unique constraint violation"
    }));
}

#[tokio::test]
async fn test_empty_name_is_rejected() {
    let server = common::create_test_server(common::InMemoryStore::new());

    let response = server
        .post("/api/customers")
        .json(&json!({ "name": "", "email": "ada@example.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "Name and email are required"
    );
}

#[tokio::test]
async fn test_database_outage_on_list_is_500() {
    let store = common::InMemoryStore::new();
    store.fail_with("DB down");
    let server = common::create_test_server(store);

    let response = server.get("/api/customers").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "success": false, "message": "DB down" }));
}

#[tokio::test]
async fn test_create_customer_with_plain_text_body() {
    let server = common::create_test_server(common::InMemoryStore::new());

    let response = server
        .post("/api/customers")
        .text(r#"{ "name": "Ada", "email": "ada@example.com" }"#)
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["data"]["email"], "ada@example.com");
}
