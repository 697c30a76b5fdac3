//! Submission model

use serde::{Deserialize, Serialize};

use super::ProblemKey;

/// One entry of a user's submission history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub contest_id: i64,
    pub index: String,
    /// Missing while the submission is still queued
    pub verdict: Option<Verdict>,
}

impl Submission {
    pub fn key(&self) -> ProblemKey {
        ProblemKey::new(self.contest_id, self.index.clone())
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict == Some(Verdict::Ok)
    }
}

/// Submission verdict as reported by the judge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Failed,
    Ok,
    Partial,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    PresentationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    IdlenessLimitExceeded,
    SecurityViolated,
    Crashed,
    InputPreparationCrashed,
    Challenged,
    Skipped,
    Testing,
    Rejected,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_wire_names() {
        let ok: Verdict = serde_json::from_str("\"OK\"").unwrap();
        assert_eq!(ok, Verdict::Ok);

        let wa: Verdict = serde_json::from_str("\"WRONG_ANSWER\"").unwrap();
        assert_eq!(wa, Verdict::WrongAnswer);

        let odd: Verdict = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(odd, Verdict::Unknown);
    }

    #[test]
    fn test_only_ok_is_accepted() {
        let mut submission = Submission {
            contest_id: 1,
            index: "A".to_string(),
            verdict: Some(Verdict::Ok),
        };
        assert!(submission.is_accepted());

        submission.verdict = Some(Verdict::Partial);
        assert!(!submission.is_accepted());

        submission.verdict = None;
        assert!(!submission.is_accepted());
    }
}
