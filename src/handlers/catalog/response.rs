//! Catalog response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::handlers::problems::ProblemView;

/// Catalog statistics
#[derive(Debug, Serialize)]
pub struct CatalogStatsResponse {
    pub total_problems: usize,
    pub matching_problems: usize,
    pub last_updated: Option<DateTime<Utc>>,
    /// `last_updated` as e.g. `Oct 17, 2026`
    pub last_updated_label: Option<String>,
    pub loading: bool,
    /// Message of the last failed refresh, cleared by a successful one
    pub error: Option<String>,
}

/// Result of a catalog refresh
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// False when a newer refresh had already published
    pub published: bool,
    pub contests: usize,
    pub stats: CatalogStatsResponse,
    pub current: Option<ProblemView>,
}
