//! The catalog service.
//!
//! Sits between the HTTP facade and the store. It holds the store handle
//! that was explicitly constructed at startup and logs the outcome of every
//! operation. Failures are logged and then returned to the caller so the
//! boundary can decide how to report them.

use crate::domain::model::{Item, NewItem, NewOrder, Order, OrderFilter};
use crate::infra::config;
use crate::storage::catalog::{
    CatalogStore, InMemoryCatalogStore, PostgresCatalogStore, StoreResult,
};
use chrono::NaiveDate;
use std::sync::Arc;

/// Which store implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" | "mem" => Ok(StoreBackend::Memory),
            other => Err(anyhow::anyhow!(
                "unknown store backend '{}' (expected 'postgres' or 'memory')",
                other
            )),
        }
    }
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Builds a service backed by a fresh in-memory store (schema not yet created).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCatalogStore::new()))
    }

    /// Builds the service from environment configuration.
    ///
    /// Only connects; the schema is left alone so that callers decide when it
    /// is created.
    pub async fn from_env() -> anyhow::Result<Self> {
        match config::store_backend()? {
            StoreBackend::Memory => {
                tracing::info!("using in-memory catalog store");
                Ok(Self::in_memory())
            }
            StoreBackend::Postgres => {
                let url = config::database_url()?;
                let max_connections = config::db_max_connections()?;
                let store = PostgresCatalogStore::connect(&url, max_connections).await?;
                tracing::info!(max_connections, "connected to postgres catalog store");
                Ok(Self::new(Arc::new(store)))
            }
        }
    }

    pub async fn create_schema(&self) -> StoreResult<()> {
        match self.store.create_schema().await {
            Ok(()) => {
                tracing::info!("Tables created successfully.");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error creating tables");
                Err(e)
            }
        }
    }

    pub async fn drop_schema(&self) -> StoreResult<()> {
        match self.store.drop_schema().await {
            Ok(()) => {
                tracing::warn!("Tables dropped successfully.");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error dropping tables");
                Err(e)
            }
        }
    }

    pub async fn insert_item(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: i32,
    ) -> StoreResult<Item> {
        let item = NewItem::new(name, description, price);
        match self.store.insert_item(item).await {
            Ok(stored) => {
                tracing::info!(item_id = stored.item_id, "Inserted item: {}", stored.item_name);
                Ok(stored)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error inserting item");
                Err(e)
            }
        }
    }

    pub async fn insert_order(&self, order: NewOrder) -> StoreResult<Order> {
        match self.store.insert_order(order).await {
            Ok(stored) => {
                tracing::info!(
                    order_id = stored.order_id,
                    customer = %stored.customer_name,
                    "Inserted order"
                );
                Ok(stored)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error inserting order");
                Err(e)
            }
        }
    }

    pub async fn fetch_items(&self) -> StoreResult<Vec<Item>> {
        self.store.fetch_items().await.map_err(|e| {
            tracing::warn!(error = %e, "Error fetching items");
            e
        })
    }

    pub async fn fetch_orders(&self, filter: &OrderFilter) -> StoreResult<Vec<Order>> {
        self.store.fetch_orders(filter).await.map_err(|e| {
            tracing::warn!(error = %e, ?filter, "Error fetching orders");
            e
        })
    }

    pub async fn fetch_orders_by_date(&self, date: NaiveDate) -> StoreResult<Vec<Order>> {
        self.fetch_orders(&OrderFilter::Date(date)).await
    }

    pub async fn fetch_orders_by_status(&self, status: &str) -> StoreResult<Vec<Order>> {
        self.fetch_orders(&OrderFilter::Status(status.to_string())).await
    }

    pub async fn fetch_orders_by_customer(&self, customer_name: &str) -> StoreResult<Vec<Order>> {
        self.fetch_orders(&OrderFilter::Customer(customer_name.to_string()))
            .await
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_store_backends() {
        assert_eq!("postgres".parse::<StoreBackend>().unwrap(), StoreBackend::Postgres);
        assert_eq!(" Memory ".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("sqlite".parse::<StoreBackend>().is_err());
    }
}
