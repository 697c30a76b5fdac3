//! Filter response DTOs

use serde::Serialize;

/// Active filter criteria. Multi-choice fields hold the sentinel alone when
/// unconstrained.
#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub problem_types: Vec<String>,
    pub contest_types: Vec<String>,
    pub min_rating: i32,
    pub max_rating: i32,
    pub tags: Vec<String>,
    /// Problems in the current snapshot matching these criteria
    pub matching: usize,
}

#[derive(Debug, Serialize)]
pub struct ContestTypeOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Choices offered by the filter panel
#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub problem_types: Vec<&'static str>,
    pub contest_types: Vec<ContestTypeOption>,
    pub tags: Vec<&'static str>,
    pub default_min_rating: i32,
    pub default_max_rating: i32,
}
