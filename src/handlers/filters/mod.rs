//! Filter criteria handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

/// Filter routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::get_filters).delete(handler::reset_filters))
        .route("/options", get(handler::filter_options))
        .route("/rating", put(handler::set_rating))
        .route("/problem-types/{value}", post(handler::toggle_problem_type))
        .route("/contest-types/{value}", post(handler::toggle_contest_type))
        .route("/tags/{tag}", post(handler::toggle_tag))
}
