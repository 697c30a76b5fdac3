//! Filter handler implementations

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, services::FilterService, state::AppState};

use super::{
    request::SetRatingRequest,
    response::{FilterOptionsResponse, FiltersResponse},
};

/// Get the active criteria
pub async fn get_filters(State(state): State<AppState>) -> AppResult<Json<FiltersResponse>> {
    Ok(Json(FilterService::get_filters(&state).await))
}

/// Reset every criterion to its default
pub async fn reset_filters(State(state): State<AppState>) -> AppResult<Json<FiltersResponse>> {
    Ok(Json(FilterService::reset_filters(&state).await))
}

/// List the available choices
pub async fn filter_options() -> Json<FilterOptionsResponse> {
    Json(FilterService::options())
}

/// Set rating bounds
pub async fn set_rating(
    State(state): State<AppState>,
    Json(payload): Json<SetRatingRequest>,
) -> AppResult<Json<FiltersResponse>> {
    Ok(Json(FilterService::set_rating(&state, payload).await))
}

/// Toggle a problem index (`random` selects every index)
pub async fn toggle_problem_type(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> AppResult<Json<FiltersResponse>> {
    let response = FilterService::toggle_problem_type(&state, &value).await?;
    Ok(Json(response))
}

/// Toggle a contest type (`any` selects every type)
pub async fn toggle_contest_type(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> AppResult<Json<FiltersResponse>> {
    let response = FilterService::toggle_contest_type(&state, &value).await?;
    Ok(Json(response))
}

/// Toggle a tag
pub async fn toggle_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> AppResult<Json<FiltersResponse>> {
    let response = FilterService::toggle_tag(&state, &tag).await?;
    Ok(Json(response))
}
