//! Liveness endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Body of GET /health
///
/// Everything here is fixed at compile time, so the route stays up even
/// when the store is unreachable.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Liveness {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    pub build: &'static str,
}

pub const LIVENESS: Liveness = Liveness {
    status: "ok",
    module: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    build: env!("GIT_HASH"),
};

/// GET /health
pub async fn liveness() -> Json<Liveness> {
    Json(LIVENESS)
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(liveness))
}
