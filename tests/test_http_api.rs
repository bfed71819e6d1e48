//! HTTP surface: REST routes (JSON and multipart), the dispatch route, auth and stats.
//!
//! Each test starts its own server on an ephemeral port with a fresh in-memory store.

use catalog_admin_mock::domain::dispatch::auth::MOCK_TOKEN;
use catalog_admin_mock::{transport, CatalogStore, Dispatcher};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn_app() -> Result<String, Box<dyn std::error::Error>> {
    let store = Arc::new(CatalogStore::in_memory().await);
    let state = transport::http::AppState {
        dispatcher: Arc::new(Dispatcher::with_defaults(store)?),
    };
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://{}", addr))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn health_reports_collection_sizes() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_app().await?;
    let body: Value = reqwest::get(format!("{}/health", base)).await?.json().await?;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["status"], json!("ok"));
    assert_eq!(body["data"]["products"], json!(4));
    assert_eq!(body["data"]["admins"], json!(4));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rest_product_lifecycle_with_json() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_app().await?;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{}/product/create-product", base))
        .json(&json!({ "name": "Пуф", "price": { "ru": 700, "kz": 750 } }))
        .send()
        .await?
        .json()
        .await?;
    let id = created["id"].as_str().ok_or("missing id")?.to_string();
    assert_eq!(created["name"], json!({ "ru": "Пуф", "kz": "Пуф" }));

    let updated = client
        .put(format!("{}/product/update-product/{}", base, id))
        .json(&json!({ "material": "Кожа" }))
        .send()
        .await?;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated: Value = updated.json().await?;
    assert_eq!(updated["material"], json!({ "ru": "Кожа", "kz": "Кожа" }));
    assert_eq!(updated["price"], json!({ "ru": 700, "kz": 750 }));

    let deleted = client
        .delete(format!("{}/product/delete-product/{}", base, id))
        .send()
        .await?;
    assert_eq!(deleted.status(), StatusCode::OK);

    let missing = client
        .get(format!("{}/product/get-products/{}", base, id))
        .send()
        .await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let missing: Value = missing.json().await?;
    assert_eq!(missing, json!({ "status": 404, "data": { "message": "Product not found" } }));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn multipart_create_product_encodes_uploads() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_app().await?;
    let client = reqwest::Client::new();

    let form = Form::new()
        .text("name_ru", "Стеллаж")
        .text("name_kz", "Сөре")
        .text("price_ru", "4200")
        .text("size_X", "80")
        .text("size_Y", "180")
        .text("size_Z", "35.5")
        .part(
            "mainImage",
            Part::bytes(vec![1, 2, 3]).file_name("main.png").mime_str("image/png")?,
        )
        .text("additionalImageUrls", "https://images.example.com/side.jpg");

    let response = client
        .post(format!("{}/product/create-product", base))
        .multipart(form)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let product: Value = response.json().await?;
    assert_eq!(product["name"], json!({ "ru": "Стеллаж", "kz": "Сөре" }));
    assert_eq!(product["price"]["ru"], json!(4200));
    assert_eq!(product["size"], json!({ "X": 80, "Y": 180, "Z": 35.5 }));
    assert_eq!(product["mainImage"], json!("data:image/png;base64,AQID"));
    assert_eq!(product["additionalImages"], json!(["https://images.example.com/side.jpg"]));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn multipart_update_admin_keeps_other_fields() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_app().await?;
    let client = reqwest::Client::new();

    let form = Form::new().text("email", "lead@example.com");
    let updated: Value = client
        .put(format!("{}/admin/update-admin/2", base))
        .multipart(form)
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(updated["id"], json!("2"));
    assert_eq!(updated["username"], json!("manager"));
    assert_eq!(updated["email"], json!("lead@example.com"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dispatch_route_mirrors_the_rest_routes() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_app().await?;
    let client = reqwest::Client::new();

    let admins: Value = client
        .post(format!("{}/api/dispatch", base))
        .json(&json!({ "endpointName": "getAdmins", "method": "GET", "url": "/admin/get-admins" }))
        .send()
        .await?
        .json()
        .await?;
    let rest: Value = client
        .get(format!("{}/admin/get-admins", base))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(admins, rest);

    let unknown = client
        .post(format!("{}/api/dispatch", base))
        .json(&json!({ "endpointName": "exportCsv", "url": "/export/1" }))
        .send()
        .await?;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    let unknown: Value = unknown.json().await?;
    assert_eq!(unknown["data"]["message"], json!("Endpoint not found"));

    let malformed = client
        .post(format!("{}/api/dispatch", base))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await?;
    assert_eq!(malformed.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn login_logout_and_stats() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_app().await?;
    let client = reqwest::Client::new();

    let ok: Value = client
        .post(format!("{}/auth/login", base))
        .json(&json!({ "username": "admin", "password": "password" }))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(ok["token"], json!(MOCK_TOKEN));

    let denied = client
        .post(format!("{}/auth/login", base))
        .json(&json!({ "username": "admin", "password": "hunter2" }))
        .send()
        .await?;
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);
    let denied: Value = denied.json().await?;
    assert_eq!(denied, json!({ "status": 401, "data": { "message": "Invalid credentials" } }));

    let out: Value = client
        .post(format!("{}/auth/logout", base))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(out, json!({ "success": true }));

    client
        .delete(format!("{}/admin/delete-admin/4", base))
        .send()
        .await?
        .error_for_status()?;
    let stats: Value = client
        .get(format!("{}/api/stats", base))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(stats["totalProducts"], json!(4));
    assert_eq!(stats["totalAdmins"], json!(3));
    assert!(stats["generatedAt"].is_string());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn empty_file_part_keeps_existing_image() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_app().await?;
    let client = reqwest::Client::new();

    let before: Value = client
        .get(format!("{}/product/get-products/1", base))
        .send()
        .await?
        .json()
        .await?;

    let form = Form::new()
        .text("code_ru", "ST999")
        .part("mainImage", Part::bytes(Vec::new()).file_name(""));
    let updated: Value = client
        .put(format!("{}/product/update-product/1", base))
        .multipart(form)
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(updated["code"]["ru"], json!("ST999"));
    assert_eq!(updated["mainImage"], before["mainImage"]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn registered_blob_can_be_used_in_a_create() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_app().await?;
    let client = reqwest::Client::new();

    let form = Form::new().part(
        "file",
        Part::bytes(vec![1, 2, 3]).file_name("avatar.png").mime_str("image/png")?,
    );
    let registered: Value = client
        .post(format!("{}/media/blobs", base))
        .multipart(form)
        .send()
        .await?
        .json()
        .await?;
    let handle = registered["handle"].as_str().ok_or("missing handle")?.to_string();
    assert!(handle.starts_with("blob:"));

    let admin: Value = client
        .post(format!("{}/admin/create-admin", base))
        .json(&json!({ "username": "editor", "email": "editor@example.com", "image": handle }))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(admin["image"], json!("data:image/png;base64,AQID"));

    let no_file = client
        .post(format!("{}/media/blobs", base))
        .multipart(Form::new().text("note", "nothing attached"))
        .send()
        .await?;
    assert_eq!(no_file.status(), StatusCode::BAD_REQUEST);

    let unknown = client
        .post(format!("{}/admin/create-admin", base))
        .json(&json!({ "username": "ghost", "image": "blob:0000" }))
        .send()
        .await?;
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
