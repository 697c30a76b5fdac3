//! Sheet entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Problem, ProblemKey};

/// A problem the user put on their sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetEntry {
    #[serde(flatten)]
    pub problem: Problem,
    pub added_at: DateTime<Utc>,
}

impl SheetEntry {
    pub fn new(problem: Problem, added_at: DateTime<Utc>) -> Self {
        Self { problem, added_at }
    }

    pub fn key(&self) -> ProblemKey {
        self.problem.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProblemType;

    #[test]
    fn test_entry_persists_flat_with_added_at() {
        let entry = SheetEntry::new(
            Problem {
                contest_id: 100,
                index: "A".to_string(),
                name: "Sample".to_string(),
                rating: Some(1200),
                tags: vec!["dp".to_string()],
                solved_count: 0,
                problem_type: ProblemType::Programming,
            },
            "2024-01-15T12:00:00Z".parse().unwrap(),
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["contestId"], 100);
        assert_eq!(json["index"], "A");
        assert_eq!(json["addedAt"], "2024-01-15T12:00:00Z");

        let back: SheetEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
