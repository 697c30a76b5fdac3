//! Handle handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    services::HandleService,
    state::AppState,
};

use super::{request::CheckHandleRequest, response::HandleStatusResponse};

/// Rebuild the solved index from a handle's submissions
pub async fn check_handle(
    State(state): State<AppState>,
    Json(payload): Json<CheckHandleRequest>,
) -> AppResult<Json<HandleStatusResponse>> {
    let payload = payload.trimmed();
    if payload.handle.is_empty() {
        return Err(AppError::Validation("Please enter a handle".to_string()));
    }
    payload.validate()?;

    let response = HandleService::check_handle(&state, &payload.handle).await?;
    Ok(Json(response))
}

/// Get the current handle status
pub async fn handle_status(State(state): State<AppState>) -> AppResult<Json<HandleStatusResponse>> {
    Ok(Json(HandleService::status(&state).await))
}
