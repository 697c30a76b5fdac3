//! Sheet response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::handlers::problems::ProblemView;

/// One sheet entry with its display data
#[derive(Debug, Serialize)]
pub struct SheetEntryView {
    #[serde(flatten)]
    pub problem: ProblemView,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SheetSummary {
    pub total: usize,
    pub solved: usize,
}

/// The sheet in insertion order
#[derive(Debug, Serialize)]
pub struct SheetResponse {
    pub entries: Vec<SheetEntryView>,
    pub summary: SheetSummary,
}

/// Result of an add or remove
#[derive(Debug, Serialize)]
pub struct SheetMutationResponse {
    /// False when the call was a no-op
    pub changed: bool,
    pub key: String,
    pub sheet: SheetResponse,
}

/// One row of the exported sheet
#[derive(Debug, Serialize)]
pub struct ExportRow {
    pub position: usize,
    /// Compact label, e.g. `1850A`
    pub id: String,
    pub name: String,
    /// Rating, or `N/A`
    pub rating: String,
    pub tags: String,
    pub contest: String,
    pub solved: bool,
    pub url: String,
}

/// Everything a document exporter needs
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub title: String,
    pub generated_on: String,
    pub total: usize,
    pub solved: usize,
    pub rows: Vec<ExportRow>,
}
