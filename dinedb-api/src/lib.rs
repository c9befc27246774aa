//! dinedb-api library - restaurant and dish query service
//!
//! Read-only HTTP endpoints over the `restaurants` and `dishes` tables.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, connected before the listener is bound
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// Cross-origin requests are accepted from any origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::restaurant_routes())
        .merge(api::dish_routes())
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
