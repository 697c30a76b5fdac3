//! Problem request DTOs

use serde::Deserialize;

/// Query for the filtered problem list
#[derive(Debug, Default, Deserialize)]
pub struct ListProblemsQuery {
    /// Only return the first `limit` matches; `total` still counts all
    pub limit: Option<usize>,
}
