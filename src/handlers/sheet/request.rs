//! Sheet request DTOs

use serde::Deserialize;
use validator::Validate;

/// Add a catalog problem to the sheet. Without a body the current problem
/// is added.
#[derive(Debug, Deserialize, Validate)]
pub struct AddToSheetRequest {
    #[validate(range(min = 1))]
    pub contest_id: i64,

    #[validate(length(min = 1, max = 2))]
    pub index: String,
}
