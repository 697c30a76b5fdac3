//! Handle (solved status) handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Handle routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/check", post(handler::check_handle))
        .route("/status", get(handler::handle_status))
}
