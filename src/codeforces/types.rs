//! Wire types of the Codeforces API
//!
//! Fields are optional and list entries that fail to parse are skipped.
//! Shape checks happen in the normalizer.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::CodeforcesError;
use crate::constants::API_STATUS_OK;
use crate::models::{Contest, Submission, Verdict};

/// Common response envelope: `{status, comment?, result?}`
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub result: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Turn any non-OK status into an error carrying the API comment
    pub fn into_result(self) -> Result<T, CodeforcesError> {
        if self.status != API_STATUS_OK {
            return Err(CodeforcesError::Failed(
                self.comment
                    .unwrap_or_else(|| format!("request returned status {}", self.status)),
            ));
        }
        self.result.ok_or(CodeforcesError::MissingResult)
    }
}

/// Parse each value on its own, dropping the ones that don't fit `T`
pub fn parse_lenient<T: DeserializeOwned>(values: Vec<serde_json::Value>) -> Vec<T> {
    values
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect()
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(parse_lenient(values.unwrap_or_default()))
}

/// Result of `problemset.problems`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProblemSet {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub problems: Vec<RawProblem>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub problem_statistics: Vec<RawProblemStatistics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProblem {
    pub contest_id: Option<i64>,
    pub index: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProblemStatistics {
    pub contest_id: Option<i64>,
    pub index: Option<String>,
    pub solved_count: Option<u64>,
}

/// Entry of `contest.list`
#[derive(Debug, Clone, Deserialize)]
pub struct RawContest {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl RawContest {
    pub fn into_contest(self) -> Option<Contest> {
        Some(Contest {
            id: self.id?,
            name: self.name?,
        })
    }
}

/// Entry of `user.status`
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubmission {
    pub problem: Option<RawProblemRef>,
    #[serde(default)]
    pub verdict: Option<Verdict>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProblemRef {
    pub contest_id: Option<i64>,
    pub index: Option<String>,
}

impl RawSubmission {
    /// Submissions without a problem reference (e.g. gym oddities) are dropped
    pub fn into_submission(self) -> Option<Submission> {
        let problem = self.problem?;
        Some(Submission {
            contest_id: problem.contest_id?,
            index: problem.index?,
            verdict: self.verdict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_envelope_carries_comment() {
        let envelope: ApiEnvelope<Vec<serde_json::Value>> = serde_json::from_str(
            r#"{"status":"FAILED","comment":"handle: User with handle nobody_xyz not found"}"#,
        )
        .unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.to_string(), "handle: User with handle nobody_xyz not found");
    }

    #[test]
    fn test_ok_envelope_without_result() {
        let envelope: ApiEnvelope<Vec<serde_json::Value>> =
            serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
        assert!(matches!(envelope.into_result(), Err(CodeforcesError::MissingResult)));
    }

    #[test]
    fn test_problemset_skips_malformed_entries() {
        let set: RawProblemSet = serde_json::from_str(
            r#"{
                "problems": [
                    {"contestId": 100, "index": "A", "name": "Ok", "type": "PROGRAMMING", "rating": 1200, "tags": ["dp"]},
                    {"contestId": "not a number", "index": "B", "name": "Broken"},
                    {"contestId": 101, "index": "C", "name": "Unrated", "type": "PROGRAMMING", "tags": []}
                ],
                "problemStatistics": [{"contestId": 100, "index": "A", "solvedCount": 42}]
            }"#,
        )
        .unwrap();
        assert_eq!(set.problems.len(), 2);
        assert_eq!(set.problems[1].rating, None);
        assert_eq!(set.problem_statistics[0].solved_count, Some(42));
    }

    #[test]
    fn test_problemset_tolerates_null_statistics() {
        let set: RawProblemSet =
            serde_json::from_str(r#"{"problems": [], "problemStatistics": null}"#).unwrap();
        assert!(set.problem_statistics.is_empty());
    }

    #[test]
    fn test_submission_conversion() {
        let raw: Vec<RawSubmission> = serde_json::from_str(
            r#"[
                {"problem": {"contestId": 1, "index": "A"}, "verdict": "OK"},
                {"problem": {"index": "A"}, "verdict": "OK"},
                {"problem": {"contestId": 2, "index": "B"}}
            ]"#,
        )
        .unwrap();
        let submissions: Vec<Submission> =
            raw.into_iter().filter_map(RawSubmission::into_submission).collect();
        assert_eq!(submissions.len(), 2);
        assert!(submissions[0].is_accepted());
        assert_eq!(submissions[1].verdict, None);
    }
}
