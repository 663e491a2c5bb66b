pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::InMemoryCatalogStore;
pub use postgres::PostgresCatalogStore;
pub use store::{CatalogStore, StoreError, StoreResult};
