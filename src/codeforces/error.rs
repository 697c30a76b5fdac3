//! Codeforces client errors

/// Failure talking to the Codeforces API
#[derive(Debug, thiserror::Error)]
pub enum CodeforcesError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Http(u16),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-OK status; carries the API's comment
    #[error("{0}")]
    Failed(String),

    #[error("response carried no result")]
    MissingResult,
}
