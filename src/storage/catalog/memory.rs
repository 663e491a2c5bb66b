//! Process-local catalog store.
//!
//! Mirrors the observable behaviour of the Postgres store: ids are assigned
//! sequentially, `customer_name` and `customer_contact` are unique, and every
//! operation fails with [`StoreError::SchemaMissing`] while the tables do not
//! exist.

use crate::domain::model::{Item, NewItem, NewOrder, Order, OrderFilter};
use crate::storage::catalog::store::{CatalogStore, StoreError, StoreResult};
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Debug)]
struct Tables {
    items: Vec<Item>,
    orders: Vec<Order>,
    next_item_id: i32,
    next_order_id: i32,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            orders: Vec::new(),
            next_item_id: 1,
            next_order_id: 1,
        }
    }
}

/// `None` means the schema has not been created (or was dropped).
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    tables: Mutex<Option<Tables>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn create_schema(&self) -> StoreResult<()> {
        let mut tables = self.tables.lock().await;
        if tables.is_none() {
            *tables = Some(Tables::default());
        }
        Ok(())
    }

    async fn drop_schema(&self) -> StoreResult<()> {
        *self.tables.lock().await = None;
        Ok(())
    }

    async fn insert_item(&self, item: NewItem) -> StoreResult<Item> {
        let mut guard = self.tables.lock().await;
        let tables = guard.as_mut().ok_or(StoreError::SchemaMissing)?;
        let stored = item.into_item(tables.next_item_id);
        tables.next_item_id += 1;
        tables.items.push(stored.clone());
        Ok(stored)
    }

    async fn insert_order(&self, order: NewOrder) -> StoreResult<Order> {
        let mut guard = self.tables.lock().await;
        let tables = guard.as_mut().ok_or(StoreError::SchemaMissing)?;

        // Same constraint names Postgres generates for the UNIQUE columns.
        if tables.orders.iter().any(|o| o.customer_name == order.customer_name) {
            return Err(StoreError::Duplicate {
                constraint: "orders_customer_name_key".to_string(),
            });
        }
        if tables
            .orders
            .iter()
            .any(|o| o.customer_contact == order.customer_contact)
        {
            return Err(StoreError::Duplicate {
                constraint: "orders_customer_contact_key".to_string(),
            });
        }

        let stored = order.into_order(tables.next_order_id);
        tables.next_order_id += 1;
        tables.orders.push(stored.clone());
        Ok(stored)
    }

    async fn fetch_items(&self) -> StoreResult<Vec<Item>> {
        let guard = self.tables.lock().await;
        let tables = guard.as_ref().ok_or(StoreError::SchemaMissing)?;
        Ok(tables.items.clone())
    }

    async fn fetch_orders(&self, filter: &OrderFilter) -> StoreResult<Vec<Order>> {
        let guard = self.tables.lock().await;
        let tables = guard.as_ref().ok_or(StoreError::SchemaMissing)?;
        Ok(tables
            .orders
            .iter()
            .filter(|o| filter.matches(o))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
