//! Problem model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{problem_types, CODEFORCES_WEB_URL, DIFFICULTY_SCALE_MAX, DIFFICULTY_SCALE_MIN};

/// Identity of a problem: `(contest id, index)`, written as `"{contest}-{index}"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProblemKey {
    pub contest_id: i64,
    pub index: String,
}

impl ProblemKey {
    pub fn new(contest_id: i64, index: impl Into<String>) -> Self {
        Self {
            contest_id,
            index: index.into(),
        }
    }
}

impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.contest_id, self.index)
    }
}

/// Error parsing a `ProblemKey` from text
#[derive(Debug, thiserror::Error)]
#[error("invalid problem key: {0}")]
pub struct ParseProblemKeyError(String);

impl FromStr for ProblemKey {
    type Err = ParseProblemKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (contest, index) = s
            .rsplit_once('-')
            .ok_or_else(|| ParseProblemKeyError(s.to_string()))?;
        let contest_id = contest
            .parse()
            .map_err(|_| ParseProblemKeyError(s.to_string()))?;
        if index.is_empty() || !index.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ParseProblemKeyError(s.to_string()));
        }
        Ok(Self::new(contest_id, index))
    }
}

impl TryFrom<String> for ProblemKey {
    type Error = ParseProblemKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProblemKey> for String {
    fn from(key: ProblemKey) -> Self {
        key.to_string()
    }
}

/// Problem category as reported by the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemType {
    #[default]
    Programming,
    Question,
}

impl ProblemType {
    /// Parse the catalog's type discriminator
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            problem_types::PROGRAMMING => Some(Self::Programming),
            problem_types::QUESTION => Some(Self::Question),
            _ => None,
        }
    }
}

/// A normalized catalog problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub contest_id: i64,
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub solved_count: u64,
    #[serde(rename = "type", default)]
    pub problem_type: ProblemType,
}

impl Problem {
    /// Identity key of this problem
    pub fn key(&self) -> ProblemKey {
        ProblemKey::new(self.contest_id, self.index.clone())
    }

    /// Compact label such as `1850A`
    pub fn label(&self) -> String {
        format!("{}{}", self.contest_id, self.index)
    }

    /// Link to the problem statement
    pub fn url(&self) -> String {
        format!(
            "{}/contest/{}/problem/{}",
            CODEFORCES_WEB_URL, self.contest_id, self.index
        )
    }

    /// Whether the problem carries `tag` (case-insensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.rating.map(Difficulty::from_rating)
    }
}

/// Difficulty band derived from a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
    Challenging,
    Difficult,
    Expert,
    Master,
}

impl Difficulty {
    pub fn from_rating(rating: i32) -> Self {
        match rating {
            r if r < 1200 => Self::Easy,
            r if r < 1400 => Self::Medium,
            r if r < 1600 => Self::Hard,
            r if r < 1900 => Self::VeryHard,
            r if r < 2100 => Self::Challenging,
            r if r < 2300 => Self::Difficult,
            r if r < 2400 => Self::Expert,
            _ => Self::Master,
        }
    }

    /// Display color of the band
    pub fn color(&self) -> &'static str {
        match self {
            Self::Easy => "#00b894",
            Self::Medium => "#00cec9",
            Self::Hard => "#0984e3",
            Self::VeryHard => "#6c5ce7",
            Self::Challenging => "#fd79a8",
            Self::Difficult => "#e17055",
            Self::Expert | Self::Master => "#d63031",
        }
    }

    /// Position of `rating` on the 800..=3500 scale, in percent
    pub fn scale_position(rating: i32) -> f64 {
        let clamped = rating.clamp(DIFFICULTY_SCALE_MIN, DIFFICULTY_SCALE_MAX);
        f64::from(clamped - DIFFICULTY_SCALE_MIN)
            / f64::from(DIFFICULTY_SCALE_MAX - DIFFICULTY_SCALE_MIN)
            * 100.0
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
            Self::VeryHard => write!(f, "Very Hard"),
            Self::Challenging => write!(f, "Challenging"),
            Self::Difficult => write!(f, "Difficult"),
            Self::Expert => write!(f, "Expert"),
            Self::Master => write!(f, "Master"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_problem() -> Problem {
        Problem {
            contest_id: 1850,
            index: "A".to_string(),
            name: "To My Critics".to_string(),
            rating: Some(800),
            tags: vec!["implementation".to_string(), "sortings".to_string()],
            solved_count: 60000,
            problem_type: ProblemType::Programming,
        }
    }

    #[test]
    fn test_problem_key_round_trip_through_text() {
        let key = ProblemKey::new(100, "B2");
        assert_eq!(key.to_string(), "100-B2");
        assert_eq!("100-B2".parse::<ProblemKey>().unwrap(), key);
    }

    #[test]
    fn test_problem_key_rejects_garbage() {
        assert!("100".parse::<ProblemKey>().is_err());
        assert!("abc-A".parse::<ProblemKey>().is_err());
        assert!("100-".parse::<ProblemKey>().is_err());
        assert!("100-A/B".parse::<ProblemKey>().is_err());
    }

    #[test]
    fn test_problem_derived_values() {
        let problem = sample_problem();
        assert_eq!(problem.key(), ProblemKey::new(1850, "A"));
        assert_eq!(problem.label(), "1850A");
        assert_eq!(problem.url(), "https://codeforces.com/contest/1850/problem/A");
        assert!(problem.has_tag("Sortings"));
        assert!(!problem.has_tag("dp"));
    }

    #[test]
    fn test_problem_serializes_camel_case() {
        let json = serde_json::to_value(sample_problem()).unwrap();
        assert_eq!(json["contestId"], 1850);
        assert_eq!(json["solvedCount"], 60000);
        assert_eq!(json["type"], "PROGRAMMING");
    }

    #[test]
    fn test_difficulty_bands() {
        assert_eq!(Difficulty::from_rating(800), Difficulty::Easy);
        assert_eq!(Difficulty::from_rating(1200), Difficulty::Medium);
        assert_eq!(Difficulty::from_rating(1899), Difficulty::VeryHard);
        assert_eq!(Difficulty::from_rating(2399), Difficulty::Expert);
        assert_eq!(Difficulty::from_rating(2400), Difficulty::Master);
        assert_eq!(Difficulty::VeryHard.to_string(), "Very Hard");
    }

    #[test]
    fn test_scale_position() {
        assert_eq!(Difficulty::scale_position(800), 0.0);
        assert_eq!(Difficulty::scale_position(3500), 100.0);
        assert_eq!(Difficulty::scale_position(100), 0.0);
        assert_eq!(Difficulty::scale_position(2150), 50.0);
    }
}
