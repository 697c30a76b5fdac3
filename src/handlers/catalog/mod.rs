//! Catalog handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Catalog routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/refresh", post(handler::refresh_catalog))
        .route("/stats", get(handler::catalog_stats))
}
