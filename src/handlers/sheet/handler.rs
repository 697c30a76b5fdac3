//! Sheet handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::ProblemKey,
    services::SheetService,
    state::AppState,
};

use super::{
    request::AddToSheetRequest,
    response::{ExportResponse, SheetMutationResponse, SheetResponse},
};

/// List the sheet
pub async fn get_sheet(State(state): State<AppState>) -> AppResult<Json<SheetResponse>> {
    Ok(Json(SheetService::get_sheet(&state).await))
}

/// Add a problem (the current one when no body is sent)
pub async fn add_to_sheet(
    State(state): State<AppState>,
    payload: Option<Json<AddToSheetRequest>>,
) -> AppResult<(StatusCode, Json<SheetMutationResponse>)> {
    let key = match payload {
        Some(Json(payload)) => {
            payload.validate()?;
            Some(ProblemKey::new(payload.contest_id, payload.index))
        }
        None => None,
    };

    let response = SheetService::add(&state, key).await?;
    let status = if response.changed {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(response)))
}

/// Remove a problem by key, e.g. `1850-A`
pub async fn remove_from_sheet(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<SheetMutationResponse>> {
    let key: ProblemKey = key
        .parse()
        .map_err(|e: crate::models::ParseProblemKeyError| AppError::InvalidInput(e.to_string()))?;

    let response = SheetService::remove(&state, &key).await?;
    Ok(Json(response))
}

/// Export snapshot of the sheet
pub async fn export_sheet(State(state): State<AppState>) -> AppResult<Json<ExportResponse>> {
    Ok(Json(SheetService::export(&state).await))
}
