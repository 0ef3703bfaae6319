pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state for the whole application
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
    pub catalog: services::Catalog,
    pub bookings: services::BookingService,
}

impl AppState {
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let db = database::Database::new(&config.database.url, config.database.pool_size).await?;

        db.run_migrations().await?;

        let catalog = services::Catalog::new(db.clone());
        let ledger = services::Ledger::new(db.clone());
        let bookings = services::BookingService::new(db.clone(), catalog.clone(), ledger);

        Ok(Arc::new(Self {
            db,
            config,
            catalog,
            bookings,
        }))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Studio Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
