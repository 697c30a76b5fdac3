//! Catalog snapshot model

use chrono::{DateTime, Utc};

use super::{ContestNames, Problem, ProblemKey};

/// Published result of one catalog refresh. Replaced wholesale, never edited.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub problems: Vec<Problem>,
    pub contest_names: ContestNames,
    /// `None` until the first successful refresh
    pub last_updated: Option<DateTime<Utc>>,
}

impl Catalog {
    pub fn new(problems: Vec<Problem>, contest_names: ContestNames, last_updated: DateTime<Utc>) -> Self {
        Self {
            problems,
            contest_names,
            last_updated: Some(last_updated),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.last_updated.is_some()
    }

    pub fn find(&self, key: &ProblemKey) -> Option<&Problem> {
        self.problems
            .iter()
            .find(|p| p.contest_id == key.contest_id && p.index == key.index)
    }
}
