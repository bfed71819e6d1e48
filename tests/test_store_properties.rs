//! Catalog store behaviour across restarts, concurrent writers and image normalization.

use catalog_admin_mock::app::{CatalogStore, IdStrategy, StoreOptions};
use catalog_admin_mock::domain::model::{
    AdminDraft, FileUpload, ImageInput, LocalizedInput, Product, ProductDraft, Scalar,
};
use catalog_admin_mock::storage::{FileKvStore, KeyValueStore, MemoryKvStore};
use catalog_admin_mock::{Admin, ApiError, MediaResolver};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

async fn open_with(kv: Arc<dyn KeyValueStore>, id_strategy: IdStrategy) -> CatalogStore {
    CatalogStore::open(kv, MediaResolver::default(), StoreOptions { id_strategy }).await
}

fn product_named(ru: &str) -> ProductDraft {
    serde_json::from_value(json!({
        "name": { "ru": ru, "kz": ru },
        "price": 2500,
        "mainImage": "https://images.example.com/p.jpg"
    }))
    .unwrap()
}

#[tokio::test]
async fn create_then_get_returns_same_entity() {
    let store = CatalogStore::in_memory().await;
    let created = store.create::<Product>(product_named("Кресло")).await.unwrap();
    assert_eq!(created.id, "5");
    assert_eq!(created.price.ru, Scalar::from(2500_i64));
    assert_eq!(created.price.kz, Scalar::from(2500_i64));

    let fetched = store.get::<Product>(&created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let store = CatalogStore::in_memory().await;
    let removed = store.delete::<Admin>("3").await.unwrap();
    assert_eq!(removed.username, "supervisor");

    let err = store.get::<Admin>("3").await.unwrap_err();
    assert_eq!(err.status(), 404);
    assert_eq!(err.to_string(), "Admin not found");
    assert_eq!(store.list::<Admin>().await.len(), 3);

    // Deleting twice is also not found.
    assert!(matches!(store.delete::<Admin>("3").await, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn update_replaces_only_submitted_fields() {
    let store = CatalogStore::in_memory().await;
    let before = store.get::<Product>("1").await.unwrap();

    let patch: ProductDraft = serde_json::from_value(json!({ "price": { "ru": 1500 } })).unwrap();
    let after = store.update::<Product>("1", patch).await.unwrap();

    assert_eq!(after.id, "1");
    assert_eq!(after.price.ru, Scalar::from(1500_i64));
    assert_eq!(after.name, before.name);
    assert_eq!(after.size, before.size);
    assert_eq!(after.additional_images, before.additional_images);
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let store = CatalogStore::in_memory().await;
    let err = store
        .update::<Product>("999", ProductDraft::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Product not found");
}

#[tokio::test]
async fn mutations_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let store = open_with(Arc::new(FileKvStore::new(dir.path())), IdStrategy::Monotonic).await;
    let created = store.create::<Product>(product_named("Полка")).await.unwrap();
    store.delete::<Admin>("4").await.unwrap();
    drop(store);

    let reopened = open_with(Arc::new(FileKvStore::new(dir.path())), IdStrategy::Monotonic).await;
    let products = reopened.list::<Product>().await;
    assert_eq!(products.len(), 5);
    assert_eq!(reopened.get::<Product>(&created.id).await.unwrap(), created);
    assert_eq!(reopened.list::<Admin>().await.len(), 3);

    // Ids continue after the highest stored id.
    let next = reopened.create::<Product>(product_named("Шкаф")).await.unwrap();
    assert_eq!(next.id, "6");
}

#[tokio::test]
async fn stored_empty_collection_is_not_reseeded() {
    let kv = Arc::new(MemoryKvStore::with_entries([("mockProducts", "[]")]));
    let store = open_with(kv, IdStrategy::Monotonic).await;
    assert!(store.list::<Product>().await.is_empty());
    assert_eq!(store.list::<Admin>().await.len(), 4);

    let first = store.create::<Product>(product_named("Первый")).await.unwrap();
    assert_eq!(first.id, "1");
}

#[tokio::test]
async fn malformed_record_falls_back_to_seed() {
    let kv = Arc::new(MemoryKvStore::with_entries([("mockAdmins", "{not json")]));
    let store = open_with(kv, IdStrategy::Monotonic).await;
    let admins = store.list::<Admin>().await;
    assert_eq!(admins.len(), 4);
    assert_eq!(admins[0].username, "admin");
}

#[tokio::test]
async fn length_ids_collide_after_a_delete() {
    let store = open_with(Arc::new(MemoryKvStore::new()), IdStrategy::CollectionLength).await;
    store.delete::<Product>("2").await.unwrap();
    let created = store.create::<Product>(product_named("Дубль")).await.unwrap();
    assert_eq!(created.id, "4");

    let with_id_4 = store
        .list::<Product>()
        .await
        .into_iter()
        .filter(|p| p.id == "4")
        .count();
    assert_eq!(with_id_4, 2);
}

#[tokio::test]
async fn monotonic_ids_never_reuse_after_a_delete() {
    let store = open_with(Arc::new(MemoryKvStore::new()), IdStrategy::Monotonic).await;
    store.delete::<Product>("4").await.unwrap();
    let created = store.create::<Product>(product_named("Новый")).await.unwrap();
    assert_eq!(created.id, "5");

    let ids: HashSet<String> = store.list::<Product>().await.into_iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 4);
}

#[tokio::test]
async fn monotonic_ids_are_not_reused_across_a_restart() {
    let kv = Arc::new(MemoryKvStore::new());

    let store = open_with(kv.clone(), IdStrategy::Monotonic).await;
    let newest = store.create::<Product>(product_named("Временный")).await.unwrap();
    assert_eq!(newest.id, "5");
    store.delete::<Product>("5").await.unwrap();
    drop(store);

    let reopened = open_with(kv.clone(), IdStrategy::Monotonic).await;
    let next = reopened.create::<Product>(product_named("Следующий")).await.unwrap();
    assert_eq!(next.id, "6");
    assert_eq!(kv.get("mockProductsNextId").await.unwrap().as_deref(), Some("7"));
}

#[tokio::test]
async fn oversized_stored_id_does_not_break_creation() {
    let kv = Arc::new(MemoryKvStore::with_entries([(
        "mockProducts",
        r#"[{"id":"18446744073709551615"}]"#,
    )]));
    let store = open_with(kv, IdStrategy::Monotonic).await;
    let created = store.create::<Product>(product_named("Обычный")).await.unwrap();
    assert_eq!(created.id, "1");
    assert_eq!(store.list::<Product>().await.len(), 2);
    assert!(store.get::<Product>("18446744073709551615").await.is_ok());
}

#[tokio::test]
async fn unresolved_blob_leaves_store_untouched() {
    let kv = Arc::new(MemoryKvStore::new());
    let store = open_with(kv.clone(), IdStrategy::Monotonic).await;

    let draft: ProductDraft = serde_json::from_value(json!({
        "name": "Тумба",
        "mainImage": "https://images.example.com/ok.jpg",
        "additionalImages": ["https://images.example.com/a.jpg", "blob:deadbeef"]
    }))
    .unwrap();
    let err = store.create::<Product>(draft).await.unwrap_err();
    assert_eq!(err, ApiError::UnresolvedBlob("blob:deadbeef".to_string()));
    assert_eq!(err.status(), 400);

    assert_eq!(store.list::<Product>().await.len(), 4);
    assert_eq!(kv.get("mockProducts").await.unwrap(), None);
}

#[tokio::test]
async fn registered_blob_is_stored_as_data_uri() {
    let store = CatalogStore::in_memory().await;
    let handle = store
        .media()
        .blobs()
        .register(FileUpload::new("me.png", Some("image/png"), vec![1, 2, 3]))
        .await;
    assert!(handle.starts_with("blob:"));

    let draft = AdminDraft {
        username: Some("editor".to_string()),
        email: Some("editor@example.com".to_string()),
        image: Some(ImageInput::Reference(handle)),
    };
    let admin = store.create::<Admin>(draft).await.unwrap();
    assert_eq!(admin.image, "data:image/png;base64,AQID");
}

#[tokio::test]
async fn uploads_are_encoded_in_order() {
    let store = CatalogStore::in_memory().await;
    let draft = ProductDraft {
        name: Some(LocalizedInput::Single("Лампа".into())),
        main_image: Some(ImageInput::Upload(FileUpload::new("m.jpg", None, vec![0]))),
        additional_images: Some(vec![
            ImageInput::Reference("https://images.example.com/1.jpg".to_string()),
            ImageInput::Upload(FileUpload::new("2.gif", Some("image/gif"), vec![255])),
        ]),
        ..ProductDraft::default()
    };
    let product = store.create::<Product>(draft).await.unwrap();
    assert_eq!(product.main_image, "data:application/octet-stream;base64,AA==");
    assert_eq!(
        product.additional_images,
        vec![
            "https://images.example.com/1.jpg".to_string(),
            "data:image/gif;base64,/w==".to_string()
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_keep_every_entity() {
    let kv = Arc::new(MemoryKvStore::new());
    let store = Arc::new(open_with(kv.clone(), IdStrategy::Monotonic).await);

    let mut tasks = Vec::new();
    for i in 0..20 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store
                .create::<Product>(product_named(&format!("Товар {}", i)))
                .await
                .map(|p| p.id)
        }));
    }
    let mut ids = HashSet::new();
    for task in tasks {
        ids.insert(task.await.unwrap().unwrap());
    }
    assert_eq!(ids.len(), 20);
    assert_eq!(store.list::<Product>().await.len(), 24);

    // The last write-back holds every entity.
    let raw = kv.get("mockProducts").await.unwrap().unwrap();
    let stored: Vec<Product> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 24);
}

#[tokio::test]
async fn stats_follow_mutations() {
    let store = CatalogStore::in_memory().await;
    let stats = store.stats().await;
    assert_eq!((stats.total_products, stats.total_admins), (4, 4));

    store.delete::<Product>("1").await.unwrap();
    let stats = store.stats().await;
    assert_eq!((stats.total_products, stats.total_admins), (3, 4));
}
