//! End-to-end tests for the orders HTTP surface.
//!
//! Each test runs against the real router with a scratch SQLite file,
//! so repository, migrations and handlers are exercised together.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use ecommerce_orders::db::DbService;
use ecommerce_orders::db::repository::{order, product};
use ecommerce_orders::{Config, ServerState, build_app};

struct TestApp {
    // Keeps the scratch database directory alive for the test's duration
    _dir: tempfile::TempDir,
    state: ServerState,
    app: Router,
}

async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("orders.db");
    let config = Config::with_overrides(db_path.to_str().unwrap(), 0);
    let db = DbService::new(&config.db_path, false).await.unwrap();
    let state = ServerState::new(config, db.pool);
    let app = build_app(&state.config).with_state(state.clone());
    TestApp {
        _dir: dir,
        state,
        app,
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn widget_payload() -> Value {
    json!({"products": [{"name": "Widget", "price": 9.99, "quantity": 2}]})
}

#[tokio::test]
async fn create_then_get_round_trips_the_aggregate() {
    let t = spawn_app().await;

    let (status, body) = send(&t.app, "POST", "/ecommerce/v1/orders", Some(widget_payload())).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().expect("id must be numeric");
    assert!(id >= 1);

    let (status, body) = send(&t.app, "GET", &format!("/ecommerce/v1/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderId"], id);
    assert_eq!(body["status"], "OrderPending");
    assert_eq!(body["version"], 0);
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Widget");
    assert_eq!(products[0]["price"], 9.99);
    assert_eq!(products[0]["quantity"], 2);
    assert_eq!(products[0]["orderId"], id);
}

#[tokio::test]
async fn create_without_products_is_rejected() {
    let t = spawn_app().await;

    let (status, body) = send(
        &t.app,
        "POST",
        "/ecommerce/v1/orders",
        Some(json!({"user": "alice", "totalAmount": 10.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("products"));

    let (status, _) = send(
        &t.app,
        "POST",
        "/ecommerce/v1/orders",
        Some(json!({"products": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_bodies_yield_400() {
    let t = spawn_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/ecommerce/v1/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = t.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid input");

    // Unknown status values fail JSON binding, not the database CHECK
    let (status, _) = send(
        &t.app,
        "POST",
        "/ecommerce/v1/orders",
        Some(json!({"status": "NotAStatus", "products": [{"name": "x", "price": 1.0, "quantity": 1}]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_integer_path_and_query_params_yield_400() {
    let t = spawn_app().await;

    let (status, body) = send(&t.app, "GET", "/ecommerce/v1/orders/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid order ID");

    let (status, _) = send(&t.app, "DELETE", "/ecommerce/v1/orders/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&t.app, "GET", "/ecommerce/v1/orders?limit=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid limit parameter");

    let (status, _) = send(&t.app, "GET", "/ecommerce/v1/orders?limit=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_missing_order_yields_404() {
    let t = spawn_app().await;

    let (status, body) = send(&t.app, "GET", "/ecommerce/v1/orders/12345", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn delete_is_idempotent_and_makes_get_404() {
    let t = spawn_app().await;

    let (_, body) = send(&t.app, "POST", "/ecommerce/v1/orders", Some(widget_payload())).await;
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(&t.app, "DELETE", &format!("/ecommerce/v1/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order deleted successfully");

    let (status, _) = send(&t.app, "GET", &format!("/ecommerce/v1/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting the already-absent id still succeeds
    let (status, _) = send(&t.app, "DELETE", &format!("/ecommerce/v1/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_cascades_to_children() {
    let t = spawn_app().await;

    let payload = json!({
        "user": "alice",
        "products": [
            {"name": "Widget", "price": 9.99, "quantity": 2},
            {"name": "Gadget", "price": 4.50, "quantity": 1}
        ],
        "updates": [{"notes": "packed", "handledBy": "warehouse"}]
    });
    let (_, body) = send(&t.app, "POST", "/ecommerce/v1/orders", Some(payload)).await;
    let id = body["id"].as_i64().unwrap();

    assert_eq!(product::find_by_order(&t.state.pool, id).await.unwrap().len(), 2);
    assert_eq!(order::find_updates(&t.state.pool, id).await.unwrap().len(), 1);

    let (status, _) = send(&t.app, "DELETE", &format!("/ecommerce/v1/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    // No orphaned child rows survive the parent
    assert!(product::find_by_order(&t.state.pool, id).await.unwrap().is_empty());
    assert!(order::find_updates(&t.state.pool, id).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_respects_limit_and_defaults() {
    let t = spawn_app().await;

    for i in 0..3 {
        let payload = json!({
            "user": format!("user-{i}"),
            "products": [{"name": format!("item-{i}"), "price": 1.0, "quantity": 1}]
        });
        let (status, _) = send(&t.app, "POST", "/ecommerce/v1/orders", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&t.app, "GET", "/ecommerce/v1/orders?limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Default limit of 100 returns everything here
    let (status, body) = send(&t.app, "GET", "/ecommerce/v1/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, body) = send(&t.app, "GET", "/ecommerce/v1/orders?limit=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn save_updates_with_version_check() {
    let t = spawn_app().await;

    let (_, body) = send(&t.app, "POST", "/ecommerce/v1/orders", Some(widget_payload())).await;
    let id = body["id"].as_i64().unwrap();

    let update = json!({
        "orderId": id,
        "version": 0,
        "user": "carol",
        "totalAmount": 42.0,
        "status": "OrderShipped",
        "products": [{"name": "Replacement", "price": 42.0, "quantity": 1}]
    });
    let (status, body) = send(&t.app, "PUT", "/ecommerce/v1/orders", Some(update.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order updated successfully");

    let (_, body) = send(&t.app, "GET", &format!("/ecommerce/v1/orders/{id}"), None).await;
    assert_eq!(body["version"], 1);
    assert_eq!(body["user"], "carol");
    assert_eq!(body["status"], "OrderShipped");
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Replacement");

    // Replaying the same stale version is a conflict
    let (status, body) = send(&t.app, "PUT", "/ecommerce/v1/orders", Some(update)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("version"));
}

#[tokio::test]
async fn save_inserts_unknown_ids() {
    let t = spawn_app().await;

    let payload = json!({"orderId": 999, "user": "dave", "totalAmount": 5.0});
    let (status, _) = send(&t.app, "PUT", "/ecommerce/v1/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&t.app, "GET", "/ecommerce/v1/orders/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"], "dave");
    assert_eq!(body["status"], "OrderPending");
}

#[tokio::test]
async fn products_endpoint_lists_products_not_orders() {
    let t = spawn_app().await;

    let (_, body) = send(&t.app, "POST", "/ecommerce/v1/orders", Some(widget_payload())).await;
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(&t.app, "GET", "/ecommerce/v1/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Widget");
    assert_eq!(products[0]["orderId"], id);

    let (status, body) = send(&t.app, "GET", "/ecommerce/v1/products?limit=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = send(&t.app, "GET", "/ecommerce/v1/products?limit=x", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_route_reports_running() {
    let t = spawn_app().await;

    let (status, body) = send(&t.app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Service is running");
}

#[tokio::test]
async fn seed_route_populates_dev_databases() {
    let t = spawn_app().await;
    assert!(t.state.config.is_dev_mode());

    let (status, body) = send(&t.app, "POST", "/internal/seed-local-db", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Database seeded successfully");

    let (_, body) = send(&t.app, "GET", "/ecommerce/v1/orders", None).await;
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| !o["products"].as_array().unwrap().is_empty()));
}
