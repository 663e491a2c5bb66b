//! The storage contract shared by every catalog backend.

use crate::domain::model::{Item, NewItem, NewOrder, Order, OrderFilter};
use async_trait::async_trait;
use thiserror::Error;

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// Postgres SQLSTATE for `undefined_table`.
const UNDEFINED_TABLE: &str = "42P01";
/// The only table carrying user-facing uniqueness constraints.
const UNIQUE_TABLE: &str = "orders";

#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write. Nothing was stored.
    #[error("duplicate value violates unique constraint '{constraint}'")]
    Duplicate { constraint: String },

    /// The catalog tables do not exist (never created, or dropped).
    #[error("catalog schema is missing; create it before use")]
    SchemaMissing,

    /// Connectivity loss or any other engine failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                // Unique violations on system catalogs (concurrent DDL) are engine errors.
                Some(UNIQUE_VIOLATION) if db_err.table() == Some(UNIQUE_TABLE) => {
                    return StoreError::Duplicate {
                        constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                    };
                }
                Some(UNDEFINED_TABLE) => return StoreError::SchemaMissing,
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Owns the two-table catalog schema and every statement run against it.
///
/// Each method runs exactly one unit of work in its own transaction: it
/// commits on success and rolls back on failure, so a failed write leaves the
/// tables unchanged.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Creates both tables if absent. Existing rows are untouched.
    async fn create_schema(&self) -> StoreResult<()>;

    /// Drops both tables and everything in them.
    async fn drop_schema(&self) -> StoreResult<()>;

    async fn insert_item(&self, item: NewItem) -> StoreResult<Item>;

    async fn insert_order(&self, order: NewOrder) -> StoreResult<Order>;

    /// All items in natural storage order (ascending id).
    async fn fetch_items(&self) -> StoreResult<Vec<Item>>;

    /// Orders satisfying `filter`, in ascending id order.
    async fn fetch_orders(&self, filter: &OrderFilter) -> StoreResult<Vec<Order>>;

    /// Cheap round trip used by health checks.
    async fn ping(&self) -> StoreResult<()>;
}
