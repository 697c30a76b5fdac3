//! Catalog handler implementations

use axum::{extract::State, Json};

use crate::{error::AppResult, services::CatalogService, state::AppState};

use super::response::{CatalogStatsResponse, RefreshResponse};

/// Fetch the catalog and publish a new snapshot
pub async fn refresh_catalog(State(state): State<AppState>) -> AppResult<Json<RefreshResponse>> {
    let response = CatalogService::refresh(&state).await?;
    Ok(Json(response))
}

/// Get catalog statistics
pub async fn catalog_stats(State(state): State<AppState>) -> AppResult<Json<CatalogStatsResponse>> {
    Ok(Json(CatalogService::stats(&state).await))
}
