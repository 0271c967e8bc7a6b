//! Black-box tests for the inventory HTTP API.
//!
//! Each test builds the same router production runs, backed by its own
//! isolated database, binds it to an ephemeral port, and drives it with a
//! real HTTP client.

use reqwest::StatusCode;
use serde_json::{json, Value};

use shopstock_db::{Database, DbConfig};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(db: Database) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = inventory_api::app::build_app(db);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    /// Server over a fresh in-memory store, isolated to this test.
    async fn spawn_fresh() -> Self {
        let db = Database::new(DbConfig::in_memory())
            .await
            .expect("failed to open in-memory database");
        Self::spawn(db).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn kettle() -> Value {
    json!({
        "name": "Kettle",
        "price": 12.99,
        "quantity": 50,
        "category": "Kitchen"
    })
}

async fn create_product(client: &reqwest::Client, base_url: &str, body: &Value) -> i64 {
    let res = client
        .post(format!("{}/products", base_url))
        .json(body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let created: Value = res.json().await.unwrap();
    created["id"].as_i64().expect("created product has numeric id")
}

#[tokio::test]
async fn root_returns_liveness_string() {
    let srv = TestServer::spawn_fresh().await;

    let res = reqwest::get(format!("{}/", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Shop Inventory API is running!");
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let srv = TestServer::spawn_fresh().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/products", srv.base_url))
        .json(&kettle())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert!(created["id"].is_i64());
    assert_eq!(created["name"], "Kettle");
    assert_eq!(created["price"], 12.99);
    assert_eq!(created["quantity"], 50);
    assert_eq!(created["category"], "Kitchen");

    let res = client
        .get(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let listed: Vec<Value> = res.json().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);
    assert_eq!(listed[0]["name"], "Kettle");
}

#[tokio::test]
async fn list_on_empty_store_is_empty_array() {
    let srv = TestServer::spawn_fresh().await;

    let res = reqwest::get(format!("{}/products", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let listed: Vec<Value> = res.json().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn create_without_required_field_is_rejected() {
    let srv = TestServer::spawn_fresh().await;
    let client = reqwest::Client::new();

    for missing in ["name", "price", "quantity"] {
        let mut body = kettle();
        body.as_object_mut().unwrap().remove(missing);

        let res = client
            .post(format!("{}/products", srv.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "missing {missing}");
        let err: Value = res.json().await.unwrap();
        assert!(err["error"]
            .as_str()
            .unwrap()
            .contains("Missing required fields"));
    }

    // Nothing should have been stored along the way.
    let listed: Vec<Value> = client
        .get(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn create_without_category_stores_null() {
    let srv = TestServer::spawn_fresh().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/products", srv.base_url))
        .json(&json!({"name": "Mug", "price": 4.5, "quantity": 10}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert!(created["category"].is_null());
}

#[tokio::test]
async fn update_existing_product() {
    let srv = TestServer::spawn_fresh().await;
    let client = reqwest::Client::new();

    let id = create_product(&client, &srv.base_url, &kettle()).await;

    let res = client
        .put(format!("{}/products/{}", srv.base_url, id))
        .json(&json!({
            "name": "Desk Lamp",
            "price": 22.5,
            "quantity": 15,
            "category": "Office"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Product updated successfully");
    assert_eq!(body["changes"], 1);

    // The row now carries the new fields under the same id.
    let listed: Vec<Value> = client
        .get(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"].as_i64().unwrap(), id);
    assert_eq!(listed[0]["name"], "Desk Lamp");
    assert_eq!(listed[0]["quantity"], 15);
}

#[tokio::test]
async fn update_unknown_id_is_not_found_with_id_in_message() {
    let srv = TestServer::spawn_fresh().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/products/999999", srv.base_url))
        .json(&json!({"name": "Fake", "price": 1.0, "quantity": 1, "category": "Misc"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let err: Value = res.json().await.unwrap();
    assert!(err["error"].as_str().unwrap().contains("999999"));
}

#[tokio::test]
async fn update_with_non_numeric_id_is_bad_request() {
    let srv = TestServer::spawn_fresh().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/products/abc", srv.base_url))
        .json(&kettle())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: Value = res.json().await.unwrap();
    assert_eq!(err["error"], "Invalid product id");
}

#[tokio::test]
async fn update_missing_fields_is_bad_request_even_for_existing_id() {
    let srv = TestServer::spawn_fresh().await;
    let client = reqwest::Client::new();

    let id = create_product(&client, &srv.base_url, &kettle()).await;

    let res = client
        .put(format!("{}/products/{}", srv.base_url, id))
        .json(&json!({"price": 1.0, "quantity": 1}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: Value = res.json().await.unwrap();
    assert!(err["error"]
        .as_str()
        .unwrap()
        .contains("Missing required fields"));
}

#[tokio::test]
async fn delete_existing_then_again_is_404() {
    let srv = TestServer::spawn_fresh().await;
    let client = reqwest::Client::new();

    let id = create_product(&client, &srv.base_url, &kettle()).await;

    let res = client
        .delete(format!("{}/products/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Product deleted successfully");
    assert_eq!(body["changes"], 1);

    // Second delete: the row is gone, so the change count is 0 → 404.
    let res = client
        .delete(format!("{}/products/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let err: Value = res.json().await.unwrap();
    assert!(err["error"].as_str().unwrap().contains(&id.to_string()));
}

#[tokio::test]
async fn delete_with_non_numeric_id_is_bad_request() {
    let srv = TestServer::spawn_fresh().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/products/abc", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: Value = res.json().await.unwrap();
    assert_eq!(err["error"], "Invalid product id");
}

#[tokio::test]
async fn negative_price_and_quantity_pass_through() {
    // Documented behavior pending product-owner review.
    let srv = TestServer::spawn_fresh().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/products", srv.base_url))
        .json(&json!({"name": "Refund Voucher", "price": -5.0, "quantity": -3}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["price"], -5.0);
    assert_eq!(created["quantity"], -3);
}

#[tokio::test]
async fn full_lifecycle_against_ephemeral_store() {
    // The one test that exercises the fixed-location ephemeral database,
    // end to end: reset, create, update, delete.
    let db = Database::ephemeral()
        .await
        .expect("failed to reset ephemeral database");
    let srv = TestServer::spawn(db).await;
    let client = reqwest::Client::new();

    // Reset guarantees an empty table no matter what a prior run left.
    let listed: Vec<Value> = client
        .get(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.is_empty());

    let id = create_product(&client, &srv.base_url, &kettle()).await;

    let res = client
        .put(format!("{}/products/{}", srv.base_url, id))
        .json(&json!({
            "name": "Desk Lamp",
            "price": 22.5,
            "quantity": 15,
            "category": "Office"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(format!("{}/products/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
