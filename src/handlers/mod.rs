//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod catalog;
pub mod filters;
pub mod handles;
pub mod health;
pub mod problems;
pub mod sheet;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/catalog", catalog::routes())
        .nest("/problems", problems::routes())
        .nest("/filters", filters::routes())
        .nest("/handles", handles::routes())
        .nest("/sheet", sheet::routes())
}
