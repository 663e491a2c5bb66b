//! Catalog store contract, exercised through `CatalogService` on the in-memory store.

use chrono::NaiveDate;
use serde_json::json;
use thaliwada::{CatalogService, NewOrder, StoreError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn order(customer: &str, status: &str, on: NaiveDate) -> NewOrder {
    NewOrder {
        date: on,
        status: status.to_string(),
        customer_name: customer.to_string(),
        customer_contact: format!("{}@example.com", customer),
        items: json!([{"item_id": 1, "quantity": 2}]),
    }
}

async fn ready_catalog() -> CatalogService {
    let catalog = CatalogService::in_memory();
    catalog.create_schema().await.unwrap();
    catalog
}

#[tokio::test]
async fn inserted_items_are_listed_with_distinct_ids() {
    let catalog = ready_catalog().await;

    let a = catalog
        .insert_item("Indian Thali", "Black lentils with rice, naan and raita", 299)
        .await
        .unwrap();
    let b = catalog.insert_item("Lassi", "Sweet yoghurt drink", 80).await.unwrap();
    assert_ne!(a.item_id, b.item_id);

    let items = catalog.fetch_items().await.unwrap();
    assert_eq!(items, vec![a.clone(), b]);
    assert_eq!(items[0].item_name, "Indian Thali");
    assert_eq!(items[0].item_price, 299);
}

#[tokio::test]
async fn duplicate_customer_name_is_rejected_and_table_unchanged() {
    let catalog = ready_catalog().await;
    catalog
        .insert_order(order("asha", "pending", date(2023, 10, 1)))
        .await
        .unwrap();

    let mut dup = order("asha", "delivered", date(2023, 10, 2));
    dup.customer_contact = "other@example.com".to_string();
    let err = catalog.insert_order(dup).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { ref constraint } if constraint == "orders_customer_name_key"));

    let orders = catalog.fetch_orders_by_status("delivered").await.unwrap();
    assert!(orders.is_empty());
    assert_eq!(catalog.fetch_orders(&Default::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_customer_contact_is_rejected() {
    let catalog = ready_catalog().await;
    catalog
        .insert_order(order("asha", "pending", date(2023, 10, 1)))
        .await
        .unwrap();

    let mut dup = order("ravi", "pending", date(2023, 10, 1));
    dup.customer_contact = "asha@example.com".to_string();
    let err = catalog.insert_order(dup).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { ref constraint } if constraint == "orders_customer_contact_key"));
    assert!(catalog.fetch_orders_by_customer("ravi").await.unwrap().is_empty());
}

#[tokio::test]
async fn order_filters_are_exact_match() {
    let catalog = ready_catalog().await;
    let first = catalog
        .insert_order(order("asha", "pending", date(2023, 10, 1)))
        .await
        .unwrap();
    let second = catalog
        .insert_order(order("ravi", "delivered", date(2023, 10, 1)))
        .await
        .unwrap();
    let third = catalog
        .insert_order(order("meera", "pending", date(2023, 10, 2)))
        .await
        .unwrap();
    catalog
        .insert_order(order("kiran", "Pending", date(2023, 10, 3)))
        .await
        .unwrap();

    let pending = catalog.fetch_orders_by_status("pending").await.unwrap();
    assert_eq!(pending, vec![first.clone(), third]);

    let on_first = catalog.fetch_orders_by_date(date(2023, 10, 1)).await.unwrap();
    assert_eq!(on_first, vec![first, second.clone()]);

    let ravi = catalog.fetch_orders_by_customer("ravi").await.unwrap();
    assert_eq!(ravi, vec![second]);
}

#[tokio::test]
async fn create_schema_is_idempotent() {
    let catalog = ready_catalog().await;
    catalog.insert_item("Thali", "Rice and lentils", 299).await.unwrap();

    catalog.create_schema().await.unwrap();
    catalog.create_schema().await.unwrap();

    let items = catalog.fetch_items().await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn dropped_schema_never_returns_stale_rows() {
    let catalog = ready_catalog().await;
    catalog.insert_item("Thali", "Rice and lentils", 299).await.unwrap();

    catalog.drop_schema().await.unwrap();
    let err = catalog.fetch_items().await.unwrap_err();
    assert!(matches!(err, StoreError::SchemaMissing));
    assert!(matches!(
        catalog.insert_item("Thali", "Rice and lentils", 299).await,
        Err(StoreError::SchemaMissing)
    ));

    catalog.create_schema().await.unwrap();
    assert!(catalog.fetch_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn operations_fail_before_schema_exists() {
    let catalog = CatalogService::in_memory();
    assert!(matches!(
        catalog.fetch_orders_by_status("pending").await,
        Err(StoreError::SchemaMissing)
    ));
    catalog.ping().await.unwrap();
}
