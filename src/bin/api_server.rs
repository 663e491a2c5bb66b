// src/bin/api_server.rs

use anyhow::Context;
use thaliwada::infra::{config, logging};
use thaliwada::transport;
use thaliwada::CatalogService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    // --- Store Initialization ---
    tracing::info!("initializing catalog service");
    let catalog = CatalogService::from_env().await?;

    // --- Startup hook: schema must exist before traffic is accepted ---
    catalog
        .create_schema()
        .await
        .context("failed to create catalog tables on startup")?;
    tracing::info!("database tables created on startup");

    // --- API Server Initialization ---
    let app = transport::http::create_app(transport::http::AppState::new(catalog));
    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("API server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("shutdown signal received (Ctrl+C)");
            }
        })
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}
