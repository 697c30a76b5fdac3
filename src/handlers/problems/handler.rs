//! Problem handler implementations

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{error::AppResult, services::ProblemService, state::AppState};

use super::{
    request::ListProblemsQuery,
    response::{CurrentProblemResponse, ProblemsListResponse},
};

/// List problems matching the current filters
pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let response = ProblemService::list_problems(&state, query.limit).await;
    Ok(Json(response))
}

/// Get the currently drawn problem
pub async fn current_problem(State(state): State<AppState>) -> AppResult<Json<CurrentProblemResponse>> {
    Ok(Json(ProblemService::current_problem(&state).await))
}

/// Draw a new problem from the filtered set
pub async fn draw_problem(State(state): State<AppState>) -> AppResult<Json<CurrentProblemResponse>> {
    Ok(Json(ProblemService::draw_problem(&state).await))
}
