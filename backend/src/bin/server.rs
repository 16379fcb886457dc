//! Student API HTTP Server Binary
//!
//! Initializes logging and the repository, sets up the HTTP router, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # In-memory repository (default)
//! cargo run --bin student-server
//!
//! # JSON file repository
//! REPOSITORY_TYPE=file STUDENTS_FILE=data/students.json cargo run --bin student-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_CONFIG`: Path to a repository.toml file
//! - `REPOSITORY_TYPE`: `local` or `file` when no repository.toml is found
//! - `STUDENTS_FILE`: Snapshot path for the file repository
//! - `RUST_LOG`: Log filter (default: info)

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use student_api::config::ServerConfig;
use student_api::db;
use student_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Student API server");

    let config = ServerConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    db::init_repository(config.repository_config.as_deref())?;
    let repository = Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    let app = create_router(AppState::new(repository));

    let addr = config.bind_addr().map_err(|e| anyhow::anyhow!(e))?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
