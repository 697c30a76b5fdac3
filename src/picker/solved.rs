//! Solved-status index

use std::collections::HashSet;

use crate::models::{Problem, ProblemKey, Submission};

/// Keys of every problem a handle has an accepted submission for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolvedIndex {
    keys: HashSet<ProblemKey>,
}

impl SolvedIndex {
    /// Build from a full submission history
    pub fn build(submissions: &[Submission]) -> Self {
        Self {
            keys: submissions
                .iter()
                .filter(|s| s.is_accepted())
                .map(Submission::key)
                .collect(),
        }
    }

    pub fn contains(&self, key: &ProblemKey) -> bool {
        self.keys.contains(key)
    }

    pub fn is_solved(&self, problem: &Problem) -> bool {
        self.contains(&problem.key())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys as `"{contest}-{index}"`, sorted
    pub fn key_strings(&self) -> Vec<String> {
        let mut keys: Vec<&ProblemKey> = self.keys.iter().collect();
        keys.sort();
        keys.into_iter().map(ToString::to_string).collect()
    }
}
