//! Picker session state
//!
//! One `Session` owns everything a user interacts with apart from the sheet:
//! the published catalog snapshot, the filter criteria, the current problem,
//! the solved index and the handle status. Results of external calls are
//! published through [`RequestTracker`] tickets so that a slow response can
//! never overwrite a newer one.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::models::{Catalog, FilterCriteria, Problem};
use crate::picker::{filter, pick, SolvedIndex};

/// Ordering token for one external call
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Last-write-wins bookkeeping for one kind of external call
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    issued: u64,
    published: u64,
}

impl RequestTracker {
    /// Take a ticket for a call about to start
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Claim the right to publish. Only a ticket newer than the last
    /// published one wins.
    pub fn try_publish(&mut self, ticket: Ticket) -> bool {
        if ticket.0 <= self.published {
            return false;
        }
        self.published = ticket.0;
        true
    }

    /// A call newer than the last published result is in flight
    pub fn is_pending(&self) -> bool {
        self.issued > self.published
    }
}

/// Progress of the solved-status lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HandleStatus {
    #[default]
    Idle,
    Checking {
        handle: String,
    },
    Loaded {
        handle: String,
        solved: usize,
    },
    Failed {
        handle: String,
        message: String,
    },
}

impl HandleStatus {
    /// Status line shown to the user
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Checking { .. } => Some(crate::constants::CHECKING_HANDLE_MESSAGE.to_string()),
            Self::Loaded { handle, solved } => {
                Some(format!("Handle \"{}\" loaded. ({} solved)", handle, solved))
            }
            Self::Failed { message, .. } => Some(format!("Error: {}", message)),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    current: Option<Problem>,
    solved: Arc<SolvedIndex>,
    handle_status: HandleStatus,
    last_error: Option<String>,
    refreshes: RequestTracker,
    handle_checks: RequestTracker,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Criteria are edited in place; the current problem is left alone
    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn reset_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn current(&self) -> Option<&Problem> {
        self.current.as_ref()
    }

    pub fn solved(&self) -> Arc<SolvedIndex> {
        Arc::clone(&self.solved)
    }

    pub fn handle_status(&self) -> &HandleStatus {
        &self.handle_status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.refreshes.is_pending()
    }

    // -------------------------------------------------------------------------
    // Catalog refresh
    // -------------------------------------------------------------------------

    pub fn begin_refresh(&mut self) -> Ticket {
        self.refreshes.issue()
    }

    /// Publish the outcome of a refresh. A stale ticket is ignored. On
    /// success the snapshot is swapped and, when nothing is drawn yet, a
    /// first problem is drawn. On failure the previous snapshot stays.
    pub fn finish_refresh<R: Rng + ?Sized>(
        &mut self,
        ticket: Ticket,
        outcome: Result<Catalog, String>,
        rng: &mut R,
    ) -> bool {
        if !self.refreshes.try_publish(ticket) {
            tracing::debug!(?ticket, "Discarding stale catalog refresh");
            return false;
        }

        match outcome {
            Ok(catalog) => {
                self.catalog = Arc::new(catalog);
                self.last_error = None;
                if self.current.is_none() {
                    self.draw(rng);
                }
            }
            Err(message) => self.last_error = Some(message),
        }
        true
    }

    // -------------------------------------------------------------------------
    // Handle check
    // -------------------------------------------------------------------------

    pub fn begin_handle_check(&mut self, handle: &str) -> Ticket {
        self.handle_status = HandleStatus::Checking {
            handle: handle.to_string(),
        };
        self.handle_checks.issue()
    }

    /// Publish the outcome of a handle check. A failure keeps the previous
    /// index. While a newer check is in flight the status stays `Checking`.
    pub fn finish_handle_check(
        &mut self,
        ticket: Ticket,
        handle: &str,
        outcome: Result<SolvedIndex, String>,
    ) -> bool {
        if !self.handle_checks.try_publish(ticket) {
            tracing::debug!(?ticket, handle, "Discarding stale handle check");
            return false;
        }

        let status = match outcome {
            Ok(index) => {
                let solved = index.len();
                self.solved = Arc::new(index);
                HandleStatus::Loaded {
                    handle: handle.to_string(),
                    solved,
                }
            }
            Err(message) => HandleStatus::Failed {
                handle: handle.to_string(),
                message,
            },
        };
        if !self.handle_checks.is_pending() {
            self.handle_status = status;
        }
        true
    }

    // -------------------------------------------------------------------------
    // Filtering and drawing
    // -------------------------------------------------------------------------

    /// Current snapshot filtered by the current criteria
    pub fn filtered(&self) -> Vec<Problem> {
        filter::filter_problems(&self.catalog.problems, &self.criteria, &self.catalog.contest_names)
    }

    pub fn matching_count(&self) -> usize {
        filter::count_matching(&self.catalog.problems, &self.criteria, &self.catalog.contest_names)
    }

    /// Replace the current problem with a fresh draw; an empty filtered set
    /// clears it.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Problem> {
        let candidates = self.filtered();
        self.current = pick(&candidates, rng).cloned();
        self.current.as_ref()
    }
}
