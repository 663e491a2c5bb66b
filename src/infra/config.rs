//! Centralized configuration (environment variables + defaults).

use crate::app::catalog_service::StoreBackend;
use anyhow::Context;

/// Default listen address for the API server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,thaliwada=debug,tower_http=debug,sqlx=debug";

/// Database URL must be provided (no default) for safety.
///
/// `DB_URL` is accepted as a fallback for older deployments.
pub fn database_url() -> anyhow::Result<String> {
    std::env::var("DATABASE_URL")
        .or_else(|_| std::env::var("DB_URL"))
        .context("DATABASE_URL must be set")
}

/// Connection pool size (defaults to 5).
pub fn db_max_connections() -> anyhow::Result<u32> {
    match std::env::var("DB_MAX_CONNECTIONS") {
        Ok(v) => {
            let n = v
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a valid u32, got '{}'", v))?;
            Ok(n.max(1))
        }
        Err(_) => Ok(5),
    }
}

/// Address the API server listens on.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

/// Store backend selection (`postgres` unless `STORE_BACKEND` says otherwise).
pub fn store_backend() -> anyhow::Result<StoreBackend> {
    match std::env::var("STORE_BACKEND") {
        Ok(v) => v.parse(),
        Err(_) => Ok(StoreBackend::Postgres),
    }
}
