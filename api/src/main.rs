//! Catalog API Server
//!
//! Name search over the product catalog, served as JSON.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::{ConnectOptions, Database};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresCatalogRepository;
use app::CatalogService;
use config::Config;
use domain::ports::CatalogRepository;

/// Application state shared across all handlers
pub struct AppState<CR = PostgresCatalogRepository>
where
    CR: CatalogRepository,
{
    pub catalog_service: Arc<CatalogService<CR>>,
}

impl<CR> Clone for AppState<CR>
where
    CR: CatalogRepository,
{
    fn clone(&self) -> Self {
        Self {
            catalog_service: self.catalog_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over any catalog repository
fn build_router<CR>(state: AppState<CR>) -> Router
where
    CR: CatalogRepository + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Catalog search
        .route("/api/books/search", get(handlers::search_books::<CR>))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Catalog API...");

    // Load configuration once; everything below receives it explicitly
    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .connect_timeout(config.database_connect_timeout)
        .acquire_timeout(config.database_acquire_timeout);
    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters and services
    let catalog_repo = Arc::new(PostgresCatalogRepository::new(db));
    let catalog_service = Arc::new(CatalogService::new(catalog_repo));

    let app = build_router(AppState { catalog_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
