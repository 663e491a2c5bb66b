//! Catalog store implementation using PostgreSQL.

use crate::domain::model::{Item, NewItem, NewOrder, Order, OrderFilter, ITEMS_TABLE, ORDERS_TABLE};
use crate::storage::catalog::store::{CatalogStore, StoreResult};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

const CREATE_ITEMS_SQL: &str = "CREATE TABLE IF NOT EXISTS items (
    item_id SERIAL PRIMARY KEY,
    item_name TEXT NOT NULL,
    item_description TEXT NOT NULL,
    item_price INTEGER NOT NULL
)";

const CREATE_ORDERS_SQL: &str = "CREATE TABLE IF NOT EXISTS orders (
    order_id SERIAL PRIMARY KEY,
    order_date DATE NOT NULL,
    order_status TEXT NOT NULL,
    customer_name TEXT NOT NULL UNIQUE,
    customer_contact TEXT NOT NULL UNIQUE,
    items JSONB NOT NULL
)";

/// Advisory lock key serializing catalog DDL across processes.
const SCHEMA_LOCK_ID: i64 = 7_240_001;

const ITEM_COLUMNS: &str = "item_id, item_name, item_description, item_price";
const ORDER_COLUMNS: &str =
    "order_id, order_date, order_status, customer_name, customer_contact, items";

/// A catalog store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresCatalogStore {
    pool: PgPool,
}

impl PostgresCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a new pool. Does not touch the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn item_from_row(row: &PgRow) -> Result<Item, sqlx::Error> {
    Ok(Item {
        item_id: row.try_get("item_id")?,
        item_name: row.try_get("item_name")?,
        item_description: row.try_get("item_description")?,
        item_price: row.try_get("item_price")?,
    })
}

fn order_from_row(row: &PgRow) -> Result<Order, sqlx::Error> {
    Ok(Order {
        order_id: row.try_get("order_id")?,
        order_date: row.try_get("order_date")?,
        order_status: row.try_get("order_status")?,
        customer_name: row.try_get("customer_name")?,
        customer_contact: row.try_get("customer_contact")?,
        items: row.try_get::<JsonValue, _>("items")?,
    })
}

#[async_trait]
impl CatalogStore for PostgresCatalogStore {
    async fn create_schema(&self) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        // Concurrent CREATE TABLE IF NOT EXISTS races on pg_type without this.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SCHEMA_LOCK_ID)
            .execute(&mut *tx)
            .await?;
        sqlx::query(CREATE_ITEMS_SQL).execute(&mut *tx).await?;
        sqlx::query(CREATE_ORDERS_SQL).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn drop_schema(&self) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SCHEMA_LOCK_ID)
            .execute(&mut *tx)
            .await?;
        sqlx::query(&format!("DROP TABLE IF EXISTS {}, {}", ORDERS_TABLE, ITEMS_TABLE))
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn insert_item(&self, item: NewItem) -> StoreResult<Item> {
        let sql = format!(
            "INSERT INTO {} (item_name, item_description, item_price) VALUES ($1, $2, $3) RETURNING {}",
            ITEMS_TABLE, ITEM_COLUMNS
        );
        // Dropping `tx` on an early `?` return rolls it back.
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(&sql)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .fetch_one(&mut *tx)
            .await?;
        let stored = item_from_row(&row)?;
        tx.commit().await?;
        Ok(stored)
    }

    async fn insert_order(&self, order: NewOrder) -> StoreResult<Order> {
        let sql = format!(
            "INSERT INTO {} (order_date, order_status, customer_name, customer_contact, items) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            ORDERS_TABLE, ORDER_COLUMNS
        );
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(&sql)
            .bind(order.date)
            .bind(&order.status)
            .bind(&order.customer_name)
            .bind(&order.customer_contact)
            .bind(&order.items)
            .fetch_one(&mut *tx)
            .await?;
        let stored = order_from_row(&row)?;
        tx.commit().await?;
        Ok(stored)
    }

    async fn fetch_items(&self) -> StoreResult<Vec<Item>> {
        let sql = format!("SELECT {} FROM {} ORDER BY item_id", ITEM_COLUMNS, ITEMS_TABLE);
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query(&sql).fetch_all(&mut *tx).await?;
        tx.commit().await?;
        let items = rows.iter().map(item_from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    async fn fetch_orders(&self, filter: &OrderFilter) -> StoreResult<Vec<Order>> {
        let sql = match filter.column() {
            Some(column) => format!(
                "SELECT {} FROM {} WHERE {} = $1 ORDER BY order_id",
                ORDER_COLUMNS, ORDERS_TABLE, column
            ),
            None => format!("SELECT {} FROM {} ORDER BY order_id", ORDER_COLUMNS, ORDERS_TABLE),
        };
        let query = sqlx::query(&sql);
        let query = match filter {
            OrderFilter::All => query,
            OrderFilter::Date(date) => query.bind(*date),
            OrderFilter::Status(status) => query.bind(status.as_str()),
            OrderFilter::Customer(name) => query.bind(name.as_str()),
        };

        let mut tx = self.pool.begin().await?;
        let rows = query.fetch_all(&mut *tx).await?;
        tx.commit().await?;
        let orders = rows.iter().map(order_from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(orders)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
