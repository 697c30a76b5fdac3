//! Sheet service
//!
//! Every successful add or remove writes the whole sheet to the store before
//! returning. A failed write undoes the in-memory change.

use tracing::{info, warn};

use crate::{
    constants::EXPORT_TITLE,
    error::{AppError, AppResult},
    handlers::problems::ProblemView,
    handlers::sheet::{
        ExportResponse, ExportRow, SheetEntryView, SheetMutationResponse, SheetResponse, SheetSummary,
    },
    models::{ContestNames, ProblemKey, SheetEntry},
    picker::{display_name, Sheet, SolvedIndex},
    state::AppState,
    store::{KeyValueStore, StoreError},
    utils::{format_date, now_utc},
};

/// Sheet service for persistence and views
pub struct SheetService;

impl SheetService {
    /// Load the persisted sheet. Unreadable data is dropped from the store
    /// and an empty sheet is returned.
    pub async fn load(store: &dyn KeyValueStore, key: &str) -> Result<Sheet, StoreError> {
        let Some(raw) = store.get(key).await? else {
            return Ok(Sheet::new());
        };

        match serde_json::from_str::<Vec<SheetEntry>>(&raw) {
            Ok(entries) => {
                let sheet = Sheet::from_entries(entries);
                info!(key, entries = sheet.len(), "Sheet loaded");
                Ok(sheet)
            }
            Err(e) => {
                warn!(key, error = %e, "Discarding unreadable sheet");
                store.remove(key).await?;
                Ok(Sheet::new())
            }
        }
    }

    /// Write the full sheet under `key`
    pub async fn persist(store: &dyn KeyValueStore, key: &str, sheet: &Sheet) -> Result<(), StoreError> {
        let raw = serde_json::to_string(sheet.entries())?;
        store.set(key, &raw).await
    }

    /// List the sheet with display data
    pub async fn get_sheet(state: &AppState) -> SheetResponse {
        let (catalog, solved) = {
            let session = state.session().read().await;
            (session.catalog(), session.solved())
        };

        let sheet = state.sheet().lock().await;
        Self::to_response(&sheet, &catalog.contest_names, &solved)
    }

    /// Add the problem for `key`, or the current problem when `key` is None
    pub async fn add(state: &AppState, key: Option<ProblemKey>) -> AppResult<SheetMutationResponse> {
        let problem = {
            let session = state.session().read().await;
            match &key {
                Some(key) => session
                    .catalog()
                    .find(key)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound(format!("Problem {} is not in the catalog", key)))?,
                None => session
                    .current()
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("No current problem".to_string()))?,
            }
        };
        let key = problem.key();

        let changed = {
            let mut sheet = state.sheet().lock().await;
            let changed = sheet.add(problem, now_utc());
            if changed {
                if let Err(e) = Self::persist(state.store(), state.sheet_key(), &sheet).await {
                    sheet.pop();
                    warn!(key = %key, error = %e, "Sheet write failed, add undone");
                    return Err(e.into());
                }
                info!(key = %key, total = sheet.len(), "Added to sheet");
            }
            changed
        };

        Ok(SheetMutationResponse {
            changed,
            key: key.to_string(),
            sheet: Self::get_sheet(state).await,
        })
    }

    /// Remove `key`; an absent key is a no-op
    pub async fn remove(state: &AppState, key: &ProblemKey) -> AppResult<SheetMutationResponse> {
        let changed = {
            let mut sheet = state.sheet().lock().await;
            match sheet.remove(key) {
                Some((position, entry)) => {
                    if let Err(e) = Self::persist(state.store(), state.sheet_key(), &sheet).await {
                        sheet.restore(position, entry);
                        warn!(key = %key, error = %e, "Sheet write failed, remove undone");
                        return Err(e.into());
                    }
                    info!(key = %key, total = sheet.len(), "Removed from sheet");
                    true
                }
                None => false,
            }
        };

        Ok(SheetMutationResponse {
            changed,
            key: key.to_string(),
            sheet: Self::get_sheet(state).await,
        })
    }

    /// Rows for a document exporter
    pub async fn export(state: &AppState) -> ExportResponse {
        let (catalog, solved) = {
            let session = state.session().read().await;
            (session.catalog(), session.solved())
        };

        let sheet = state.sheet().lock().await;
        let rows: Vec<ExportRow> = sheet
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let problem = &entry.problem;
                ExportRow {
                    position: i + 1,
                    id: problem.label(),
                    name: problem.name.clone(),
                    rating: problem
                        .rating
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "N/A".to_string()),
                    tags: problem.tags.join(", "),
                    contest: display_name(problem.contest_id, &catalog.contest_names),
                    solved: solved.is_solved(problem),
                    url: problem.url(),
                }
            })
            .collect();

        ExportResponse {
            title: EXPORT_TITLE.to_string(),
            generated_on: format_date(now_utc()),
            total: rows.len(),
            solved: rows.iter().filter(|r| r.solved).count(),
            rows,
        }
    }

    fn to_response(sheet: &Sheet, contest_names: &ContestNames, solved: &SolvedIndex) -> SheetResponse {
        let entries: Vec<SheetEntryView> = sheet
            .entries()
            .iter()
            .map(|entry| SheetEntryView {
                problem: ProblemView::new(&entry.problem, contest_names, solved, true),
                added_at: entry.added_at,
            })
            .collect();

        SheetResponse {
            summary: SheetSummary {
                total: entries.len(),
                solved: entries.iter().filter(|e| e.problem.solved).count(),
            },
            entries,
        }
    }
}
