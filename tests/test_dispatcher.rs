//! Endpoint dispatch end to end: request builders in, bare values or `{status, data}` errors out.

use catalog_admin_mock::domain::dispatch::auth::MOCK_TOKEN;
use catalog_admin_mock::domain::dispatch::{ApiRequest, Dispatcher, Endpoint, HandlerRegistry};
use catalog_admin_mock::domain::dispatch::handlers::LogoutHandler;
use catalog_admin_mock::CatalogStore;
use serde_json::{json, Value};
use std::sync::Arc;

async fn dispatcher() -> Dispatcher {
    Dispatcher::with_defaults(Arc::new(CatalogStore::in_memory().await)).unwrap()
}

#[tokio::test]
async fn unknown_endpoint_is_not_found_whatever_the_payload() {
    let dispatcher = dispatcher().await;
    let requests = [
        ApiRequest::named("getOrders", None, None),
        ApiRequest::named("getorders", Some("/product/get-products/1"), None),
        ApiRequest::named("", Some("/"), Some(json!({ "id": "1" }))),
        ApiRequest::named("GetProducts", None, Some(json!([1, 2, 3]))),
    ];
    for request in requests {
        let err = dispatcher.dispatch(request).await.unwrap_err();
        assert_eq!(err.status(), 404);
        assert_eq!(
            serde_json::to_value(err.to_body()).unwrap(),
            json!({ "status": 404, "data": { "message": "Endpoint not found" } })
        );
    }
}

#[tokio::test]
async fn login_accepts_only_the_mock_account() {
    let dispatcher = dispatcher().await;

    let ok = dispatcher.dispatch(ApiRequest::login("admin", "password")).await.unwrap();
    assert_eq!(ok, json!({ "token": MOCK_TOKEN }));

    for (user, pass) in [("admin", "wrong"), ("root", "password"), ("", "")] {
        let err = dispatcher.dispatch(ApiRequest::login(user, pass)).await.unwrap_err();
        assert_eq!(err.status(), 401);
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    let missing_body = dispatcher
        .dispatch(ApiRequest::new(Endpoint::Login, None, None))
        .await
        .unwrap_err();
    assert_eq!(missing_body.status(), 401);

    let mistyped = [
        json!({ "username": "admin", "password": 123 }),
        json!({ "username": ["admin"], "password": "password" }),
        json!("admin:password"),
        json!(null),
    ];
    for body in mistyped {
        let err = dispatcher
            .dispatch(ApiRequest::new(Endpoint::Login, None, Some(body)))
            .await
            .unwrap_err();
        assert_eq!(err.status(), 401);
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    let out = dispatcher.dispatch(ApiRequest::logout()).await.unwrap();
    assert_eq!(out, json!({ "success": true }));
}

#[tokio::test]
async fn product_crud_cycle() {
    let dispatcher = dispatcher().await;

    let list = dispatcher.dispatch(ApiRequest::get_products()).await.unwrap();
    assert_eq!(list.as_array().map(Vec::len), Some(4));

    let created = dispatcher
        .dispatch(ApiRequest::add_product(json!({
            "name": { "ru": "Кресло", "kz": "Кресло" },
            "price": 3000,
            "size": { "X": 70, "Y": 100, "Z": 80 },
            "mainImage": "https://images.example.com/armchair.jpg"
        })))
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id, "5");
    assert_eq!(created["price"], json!({ "ru": 3000, "kz": 3000 }));
    assert_eq!(created["size"], json!({ "X": 70, "Y": 100, "Z": 80 }));
    assert_eq!(created["additionalImages"], json!([]));

    let fetched = dispatcher.dispatch(ApiRequest::get_product(&id)).await.unwrap();
    assert_eq!(fetched, created);

    let updated = dispatcher
        .dispatch(ApiRequest::update_product(&id, json!({ "code": { "ru": "KR1", "kz": "KR1" } })))
        .await
        .unwrap();
    assert_eq!(updated["code"], json!({ "ru": "KR1", "kz": "KR1" }));
    assert_eq!(updated["name"], created["name"]);

    let removed = dispatcher.dispatch(ApiRequest::delete_product(&id)).await.unwrap();
    assert_eq!(removed["id"], json!(id));

    let err = dispatcher.dispatch(ApiRequest::get_product(&id)).await.unwrap_err();
    assert_eq!(
        serde_json::to_value(err.to_body()).unwrap(),
        json!({ "status": 404, "data": { "message": "Product not found" } })
    );
}

#[tokio::test]
async fn admin_update_prefers_url_id_over_body_id() {
    let dispatcher = dispatcher().await;

    let updated = dispatcher
        .dispatch(ApiRequest::update_admin("2", json!({ "id": "3", "email": "boss@example.com" })))
        .await
        .unwrap();
    assert_eq!(updated["id"], json!("2"));
    assert_eq!(updated["email"], json!("boss@example.com"));

    let untouched = dispatcher.dispatch(ApiRequest::get_admin("3")).await.unwrap();
    assert_eq!(untouched["email"], json!("supervisor@example.com"));

    // Without a URL the body id is used.
    let via_body = dispatcher
        .dispatch(ApiRequest::named(
            "updateAdmin",
            None,
            Some(json!({ "id": 4, "username": "mod" })),
        ))
        .await
        .unwrap();
    assert_eq!(via_body["id"], json!("4"));
    assert_eq!(via_body["username"], json!("mod"));
}

#[tokio::test]
async fn invalid_body_is_a_bad_request() {
    let dispatcher = dispatcher().await;
    let err = dispatcher
        .dispatch(ApiRequest::add_admin(json!({ "username": 42 })))
        .await
        .unwrap_err();
    assert_eq!(err.status(), 400);

    let admins: Value = dispatcher.dispatch(ApiRequest::get_admins()).await.unwrap();
    assert_eq!(admins.as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn incomplete_registry_is_rejected() {
    let store = Arc::new(CatalogStore::in_memory().await);
    let mut registry = HandlerRegistry::new();
    registry.register(Endpoint::Logout, LogoutHandler);
    let err = Dispatcher::new(store, registry).err().unwrap();
    assert!(err.to_string().contains("getProducts"));
}
