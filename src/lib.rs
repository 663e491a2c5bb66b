pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog_service::{CatalogService, StoreBackend};
pub use domain::model::{Item, NewItem, NewOrder, Order, OrderFilter};
pub use storage::catalog::{
    CatalogStore, InMemoryCatalogStore, PostgresCatalogStore, StoreError, StoreResult,
};
