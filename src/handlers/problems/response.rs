//! Problem response DTOs

use serde::Serialize;

use crate::models::{ContestNames, Difficulty, Problem};
use crate::picker::{display_name, SolvedIndex};

/// Difficulty band of a rated problem
#[derive(Debug, Clone, Serialize)]
pub struct DifficultyView {
    pub label: String,
    pub color: &'static str,
    /// Position on the 800..=3500 scale, in percent
    pub position: f64,
}

/// A problem as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct ProblemView {
    pub key: String,
    pub contest_id: i64,
    pub index: String,
    pub label: String,
    pub name: String,
    pub rating: Option<i32>,
    pub tags: Vec<String>,
    pub solved_count: u64,
    pub contest: String,
    pub url: String,
    pub difficulty: Option<DifficultyView>,
    pub solved: bool,
    pub in_sheet: bool,
}

impl ProblemView {
    pub fn new(problem: &Problem, contest_names: &ContestNames, solved: &SolvedIndex, in_sheet: bool) -> Self {
        Self {
            key: problem.key().to_string(),
            contest_id: problem.contest_id,
            index: problem.index.clone(),
            label: problem.label(),
            name: problem.name.clone(),
            rating: problem.rating,
            tags: problem.tags.clone(),
            solved_count: problem.solved_count,
            contest: display_name(problem.contest_id, contest_names),
            url: problem.url(),
            difficulty: problem.rating.map(|rating| {
                let band = Difficulty::from_rating(rating);
                DifficultyView {
                    label: band.to_string(),
                    color: band.color(),
                    position: Difficulty::scale_position(rating),
                }
            }),
            solved: solved.is_solved(problem),
            in_sheet,
        }
    }
}

/// Filtered problem list
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemView>,
    pub total: usize,
}

/// The drawn problem, or a message when there is none
#[derive(Debug, Serialize)]
pub struct CurrentProblemResponse {
    pub problem: Option<ProblemView>,
    pub message: Option<String>,
}
