//! `reqwest` implementation of the Codeforces API

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::types::{parse_lenient, ApiEnvelope, RawContest, RawProblemSet, RawSubmission};
use super::{CodeforcesApi, CodeforcesError};
use crate::config::CodeforcesConfig;
use crate::models::{Contest, Submission};

/// HTTP client for the public Codeforces API
#[derive(Debug, Clone)]
pub struct CodeforcesClient {
    http: reqwest::Client,
    base_url: String,
    submission_count: u32,
}

impl CodeforcesClient {
    pub fn new(config: &CodeforcesConfig) -> Result<Self, CodeforcesError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("cfpicker/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
            submission_count: config.submission_count,
        })
    }

    /// Call `method` and unwrap the response envelope.
    ///
    /// The API answers failed calls (unknown handle, bad arguments) with a
    /// 400 and a normal envelope, so the body is decoded before the HTTP
    /// status is looked at.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, String)],
    ) -> Result<T, CodeforcesError> {
        let url = format!("{}/{}", self.base_url, method);
        tracing::debug!(%url, "Calling Codeforces API");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&body).map_err(|e| {
            if status.is_success() {
                CodeforcesError::Decode(e)
            } else {
                CodeforcesError::Http(status.as_u16())
            }
        })?;

        envelope.into_result()
    }
}

#[async_trait]
impl CodeforcesApi for CodeforcesClient {
    async fn problemset(&self) -> Result<RawProblemSet, CodeforcesError> {
        self.call("problemset.problems", &[("lang", "en".to_string())])
            .await
    }

    async fn contests(&self) -> Result<Vec<Contest>, CodeforcesError> {
        let values: Vec<serde_json::Value> = self
            .call("contest.list", &[("lang", "en".to_string())])
            .await?;

        Ok(parse_lenient::<RawContest>(values)
            .into_iter()
            .filter_map(RawContest::into_contest)
            .collect())
    }

    async fn user_status(&self, handle: &str) -> Result<Vec<Submission>, CodeforcesError> {
        let values: Vec<serde_json::Value> = self
            .call(
                "user.status",
                &[
                    ("handle", handle.to_string()),
                    ("from", "1".to_string()),
                    ("count", self.submission_count.to_string()),
                ],
            )
            .await?;

        Ok(parse_lenient::<RawSubmission>(values)
            .into_iter()
            .filter_map(RawSubmission::into_submission)
            .collect())
    }
}
