//! Handle request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_HANDLE_LENGTH, MIN_HANDLE_LENGTH};
use crate::utils::validate_handle;

/// Check a handle's solved problems
#[derive(Debug, Deserialize, Validate)]
pub struct CheckHandleRequest {
    #[validate(
        length(min = MIN_HANDLE_LENGTH, max = MAX_HANDLE_LENGTH),
        custom(function = "validate_handle")
    )]
    pub handle: String,
}

impl CheckHandleRequest {
    /// Surrounding whitespace is not part of the handle
    pub fn trimmed(self) -> Self {
        Self {
            handle: self.handle.trim().to_string(),
        }
    }
}
