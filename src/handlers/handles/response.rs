//! Handle response DTOs

use serde::Serialize;

use crate::session::HandleStatus;

/// Handle lookup status with its display line
#[derive(Debug, Serialize)]
pub struct HandleStatusResponse {
    pub status: HandleStatus,
    pub message: Option<String>,
}

impl From<&HandleStatus> for HandleStatusResponse {
    fn from(status: &HandleStatus) -> Self {
        Self {
            status: status.clone(),
            message: status.message(),
        }
    }
}
