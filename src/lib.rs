use std::path::Path;
use std::sync::Arc;

use crate::model::{CatalogStore, DatabaseError, DbConnection, MemoryStore, ModelManager};
use crate::utils::signal::shutdown_signal;
use crate::{error::AppResult, web::AppState};
use axum::Router;
use sqlx::migrate::Migrator;
use tokio::net::TcpListener;

pub mod config;
pub use config::{Config, ConfigError, ConfigResult};

pub mod error;
pub mod model;
pub mod types;
pub mod utils;
pub mod web;

static APPLICATION_NAME: &str = "lms-admin";

/// Opens the store named by `database_uri`, running migrations for PostgreSQL.
pub async fn connect_store(app: &config::App) -> AppResult<Arc<dyn CatalogStore>> {
    if app.uses_memory_store() {
        tracing::warn!("using the in-memory catalog store, nothing survives a restart");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let db = DbConnection::connect(app.database_uri(), app.max_connections())?;

    let migrator = Migrator::new(Path::new("./migrations"))
        .await
        .map_err(DatabaseError::from)?;
    tracing::debug!("applying migrations...");
    migrator.run(db.pool()).await.map_err(DatabaseError::from)?;

    let mm = ModelManager::new(db).with_transactional_reorder(app.reorder_in_transaction());
    Ok(Arc::new(mm))
}

pub async fn build_server() -> AppResult<(AppState, Router)> {
    let use_local = cfg!(debug_assertions);
    let config = config::Config::get_or_init(use_local).await;

    let store = connect_store(config.app()).await?;
    let state = AppState::new(store);
    let app = web::routes::build_app(state.clone(), config.app().docs());
    Ok((state, app))
}

pub fn build_server_with_store(store: Arc<dyn CatalogStore>) -> (AppState, Router) {
    let state = AppState::new(store);
    let app = web::routes::build_app(state.clone(), false);
    (state, app)
}

#[tracing::instrument]
pub async fn setup_workers() -> AppResult<()> {
    let (_, app) = build_server().await?;
    let config = Config::get_or_init(false).await;
    let listener = TcpListener::bind(config.host().bindto()).await?;

    tracing::info!("axum is starting at: {}", config.host().bindto());
    let axum_handle = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal());

    axum_handle.await?;
    Ok(())
}

fn setup_trace() {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

    // load .env file for RUST_LOG etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .with(ErrorLayer::default())
        .init();

    tracing::debug!("tracing initialized.");
}

#[tracing::instrument]
pub async fn run() -> AppResult<()> {
    setup_trace();
    setup_workers().await?;
    Ok(())
}
