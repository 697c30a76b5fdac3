//! Filter request DTOs

use serde::Deserialize;

use crate::utils::parse_rating;

/// A rating bound as typed by the user: a number or raw text
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Number(i64),
    Text(String),
}

impl RatingInput {
    /// Resolve to a bound; zero, out-of-range or unreadable input gives
    /// `default`
    pub fn resolve(&self, default: i32) -> i32 {
        match self {
            Self::Number(0) => default,
            Self::Number(n) => i32::try_from(*n).unwrap_or(default),
            Self::Text(s) => parse_rating(s, default),
        }
    }
}

/// Set rating bounds; an omitted bound is left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct SetRatingRequest {
    pub min_rating: Option<RatingInput>,
    pub max_rating: Option<RatingInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_input_accepts_numbers_and_text() {
        let req: SetRatingRequest =
            serde_json::from_str(r#"{"min_rating": 1200, "max_rating": "1900"}"#).unwrap();
        assert_eq!(req.min_rating.unwrap().resolve(800), 1200);
        assert_eq!(req.max_rating.unwrap().resolve(3500), 1900);
    }

    #[test]
    fn test_rating_input_falls_back() {
        assert_eq!(RatingInput::Number(0).resolve(800), 800);
        assert_eq!(RatingInput::Text("abc".to_string()).resolve(3500), 3500);
        assert_eq!(RatingInput::Number(i64::MAX).resolve(3500), 3500);
    }
}
