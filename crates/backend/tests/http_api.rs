use backend::routes::configure_routes;
use backend::shared::data::db::{StorageLimits, Store};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_app() -> String {
    let store = Store::open_in_memory(StorageLimits::default())
        .await
        .expect("in-memory store");
    let app = configure_routes(store);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn health_responds_ok() {
    let base = spawn_app().await;
    let body = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn item_lifecycle() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let list: Value = client
        .get(format!("{base}/api/item"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([]));

    let created: Value = client
        .post(format!("{base}/api/item"))
        .json(&json!({
            "title": "Widget",
            "description": "Small blue widget",
            "illustrationUrl": "https://img.example/widget.png"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["title"], "Widget");
    assert!(created["updatedAt"].is_null());

    let updated: Value = client
        .put(format!("{base}/api/item/{id}"))
        .json(&json!({ "title": "Gadget" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["title"], "Gadget");
    assert_eq!(updated["description"], "Small blue widget");
    assert!(updated["updatedAt"].is_string());

    let resp = client
        .delete(format!("{base}/api/item/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base}/api/item/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains(&id));
}

#[tokio::test]
async fn supplier_update_missing_is_404() {
    let base = spawn_app().await;
    let resp = reqwest::Client::new()
        .put(format!("{base}/api/supplier/00000000-0000-4000-8000-000000000000"))
        .json(&json!({ "name": "Nobody" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stock_adjustments() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/api/supplier_item_stock"))
        .json(&json!({ "itemId": "X", "quantity": 10 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let after: Value = client
        .post(format!("{base}/api/supplier_item_stock/{id}/decrease"))
        .json(&json!({ "amount": 4 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after["quantity"], "6");

    let resp = client
        .post(format!("{base}/api/supplier_item_stock/{id}/decrease"))
        .json(&json!({ "amount": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let current: Value = client
        .get(format!("{base}/api/supplier_item_stock/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(current["quantity"], "6");

    let after: Value = client
        .post(format!("{base}/api/supplier_item_stock/{id}/increase"))
        .json(&json!({ "amount": 5 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after["quantity"], "11");

    let after: Value = client
        .post(format!("{base}/api/supplier_item_stock/{id}/item"))
        .json(&json!({ "itemId": "Y" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after["itemId"], "Y");
    assert_eq!(after["quantity"], "11");
}

#[tokio::test]
async fn negative_amount_is_rejected_before_the_store() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/api/supplier_item_stock"))
        .json(&json!({ "itemId": "X", "quantity": 1 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let resp = client
        .post(format!("{base}/api/supplier_item_stock/{id}/increase"))
        .json(&json!({ "amount": -5 }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());

    let current: Value = client
        .get(format!("{base}/api/supplier_item_stock/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(current["quantity"], "1");
}

#[tokio::test]
async fn quantities_beyond_64_bits_travel_as_strings() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/api/supplier_item_stock"))
        .json(&json!({ "itemId": "X", "quantity": "18446744073709551615" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["quantity"], "18446744073709551615");

    let after: Value = client
        .post(format!("{base}/api/supplier_item_stock/{id}/increase"))
        .json(&json!({ "amount": 1 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after["quantity"], "18446744073709551616");

    let resp = client
        .post(format!("{base}/api/supplier_item_stock/{id}/decrease"))
        .json(&json!({ "amount": "18446744073709551617" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let after: Value = client
        .post(format!("{base}/api/supplier_item_stock/{id}/decrease"))
        .json(&json!({ "amount": "18446744073709551616" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after["quantity"], "0");
}
