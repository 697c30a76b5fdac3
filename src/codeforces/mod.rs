//! Codeforces API access
//!
//! The engine only sees the [`CodeforcesApi`] trait; [`CodeforcesClient`]
//! is the HTTP implementation used by the server.

mod client;
mod error;
pub mod types;

pub use client::CodeforcesClient;
pub use error::CodeforcesError;
pub use types::{RawProblem, RawProblemSet, RawProblemStatistics};

use async_trait::async_trait;

use crate::models::{Contest, Submission};

/// Remote source of the catalog, contest list and submission histories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeforcesApi: Send + Sync {
    /// `problemset.problems`: problems plus aggregate statistics
    async fn problemset(&self) -> Result<RawProblemSet, CodeforcesError>;

    /// `contest.list`
    async fn contests(&self) -> Result<Vec<Contest>, CodeforcesError>;

    /// `user.status`: full submission history of `handle`
    async fn user_status(&self, handle: &str) -> Result<Vec<Submission>, CodeforcesError>;
}
