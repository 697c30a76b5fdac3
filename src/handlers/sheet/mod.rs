//! Sheet handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::state::AppState;

/// Sheet routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::get_sheet).post(handler::add_to_sheet))
        .route("/export", get(handler::export_sheet))
        .route("/{key}", delete(handler::remove_from_sheet))
}
