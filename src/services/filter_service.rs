//! Filter service

use tracing::debug;

use crate::{
    constants::{sentinels, AVAILABLE_TAGS, DEFAULT_MAX_RATING, DEFAULT_MIN_RATING, PROBLEM_INDICES},
    error::{AppError, AppResult},
    handlers::filters::{ContestTypeOption, FilterOptionsResponse, FiltersResponse, SetRatingRequest},
    models::{ContestType, FilterCriteria},
    session::Session,
    state::AppState,
    utils::validation::{is_any_contest_type, is_any_problem_type, is_problem_index},
};

/// Filter service for editing the active criteria.
///
/// Criteria edits never touch the current problem; a new draw is explicit.
pub struct FilterService;

impl FilterService {
    /// Get the active criteria
    pub async fn get_filters(state: &AppState) -> FiltersResponse {
        let session = state.session().read().await;
        Self::to_response(&session)
    }

    /// Reset to defaults
    pub async fn reset_filters(state: &AppState) -> FiltersResponse {
        let mut session = state.session().write().await;
        session.reset_criteria();
        Self::to_response(&session)
    }

    /// Choices the criteria can take
    pub fn options() -> FilterOptionsResponse {
        let mut problem_types = vec![sentinels::ANY_PROBLEM_TYPE];
        problem_types.extend_from_slice(PROBLEM_INDICES);

        FilterOptionsResponse {
            problem_types,
            contest_types: ContestType::ALL
                .iter()
                .map(|t| ContestTypeOption {
                    value: t.as_str(),
                    label: t.label(),
                })
                .collect(),
            tags: AVAILABLE_TAGS.to_vec(),
            default_min_rating: DEFAULT_MIN_RATING,
            default_max_rating: DEFAULT_MAX_RATING,
        }
    }

    /// Set either rating bound
    pub async fn set_rating(state: &AppState, payload: SetRatingRequest) -> FiltersResponse {
        let mut session = state.session().write().await;
        let criteria = session.criteria_mut();
        if let Some(min) = payload.min_rating {
            criteria.min_rating = min.resolve(DEFAULT_MIN_RATING);
        }
        if let Some(max) = payload.max_rating {
            criteria.max_rating = max.resolve(DEFAULT_MAX_RATING);
        }
        debug!(min = criteria.min_rating, max = criteria.max_rating, "Rating range set");
        Self::to_response(&session)
    }

    /// Toggle a problem index; the sentinel selects every index
    pub async fn toggle_problem_type(state: &AppState, value: &str) -> AppResult<FiltersResponse> {
        let value = value.trim();
        let mut session = state.session().write().await;

        if is_any_problem_type(value) {
            session.criteria_mut().problem_types.select_all();
        } else {
            let index = value.to_ascii_uppercase();
            if !is_problem_index(&index) {
                return Err(AppError::InvalidInput(format!("Unknown problem type '{}'", value)));
            }
            session.criteria_mut().problem_types.toggle(index);
        }

        Ok(Self::to_response(&session))
    }

    /// Toggle a contest type; the sentinel selects every type
    pub async fn toggle_contest_type(state: &AppState, value: &str) -> AppResult<FiltersResponse> {
        let mut session = state.session().write().await;

        if is_any_contest_type(value.trim()) {
            session.criteria_mut().contest_types.select_all();
        } else {
            let contest_type: ContestType = value.parse().map_err(AppError::InvalidInput)?;
            session.criteria_mut().contest_types.toggle(contest_type);
        }

        Ok(Self::to_response(&session))
    }

    /// Toggle a tag in or out of the selection
    pub async fn toggle_tag(state: &AppState, tag: &str) -> AppResult<FiltersResponse> {
        if tag.trim().is_empty() {
            return Err(AppError::InvalidInput("Tag must not be empty".to_string()));
        }

        let mut session = state.session().write().await;
        session.criteria_mut().toggle_tag(tag);
        Ok(Self::to_response(&session))
    }

    fn to_response(session: &Session) -> FiltersResponse {
        let criteria: &FilterCriteria = session.criteria();

        let problem_types = if criteria.problem_types.is_all() {
            vec![sentinels::ANY_PROBLEM_TYPE.to_string()]
        } else {
            criteria.problem_types.values()
        };
        let contest_types = if criteria.contest_types.is_all() {
            vec![sentinels::ANY_CONTEST_TYPE.to_string()]
        } else {
            criteria
                .contest_types
                .values()
                .iter()
                .map(|t| t.as_str().to_string())
                .collect()
        };

        FiltersResponse {
            problem_types,
            contest_types,
            min_rating: criteria.min_rating,
            max_rating: criteria.max_rating,
            tags: criteria.tags.iter().cloned().collect(),
            matching: session.matching_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeforces::MockCodeforcesApi;
    use crate::handlers::filters::RatingInput;
    use crate::test_utils::sample_state;

    #[tokio::test]
    async fn test_problem_type_sentinel_rules() {
        let state = sample_state(MockCodeforcesApi::new());

        let response = FilterService::toggle_problem_type(&state, "a").await.unwrap();
        assert_eq!(response.problem_types, vec!["A"]);

        let response = FilterService::toggle_problem_type(&state, "C").await.unwrap();
        assert_eq!(response.problem_types, vec!["A", "C"]);

        let response = FilterService::toggle_problem_type(&state, "random").await.unwrap();
        assert_eq!(response.problem_types, vec!["random"]);

        FilterService::toggle_problem_type(&state, "B").await.unwrap();
        let response = FilterService::toggle_problem_type(&state, "B").await.unwrap();
        assert_eq!(response.problem_types, vec!["random"]);
    }

    #[tokio::test]
    async fn test_unknown_values_are_rejected() {
        let state = sample_state(MockCodeforcesApi::new());
        assert!(matches!(
            FilterService::toggle_problem_type(&state, "H").await,
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            FilterService::toggle_contest_type(&state, "div5").await,
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            FilterService::toggle_tag(&state, "  ").await,
            Err(AppError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_contest_type_toggles() {
        let state = sample_state(MockCodeforcesApi::new());
        FilterService::toggle_contest_type(&state, "div2").await.unwrap();
        let response = FilterService::toggle_contest_type(&state, "educational").await.unwrap();
        assert_eq!(response.contest_types, vec!["div2", "educational"]);

        let response = FilterService::toggle_contest_type(&state, "any").await.unwrap();
        assert_eq!(response.contest_types, vec!["any"]);
    }

    #[tokio::test]
    async fn test_rating_bounds_fall_back_to_defaults() {
        let state = sample_state(MockCodeforcesApi::new());
        let response = FilterService::set_rating(
            &state,
            SetRatingRequest {
                min_rating: Some(RatingInput::Text("1400".to_string())),
                max_rating: Some(RatingInput::Text("".to_string())),
            },
        )
        .await;
        assert_eq!((response.min_rating, response.max_rating), (1400, 3500));

        let response = FilterService::set_rating(
            &state,
            SetRatingRequest {
                min_rating: Some(RatingInput::Number(0)),
                max_rating: None,
            },
        )
        .await;
        assert_eq!((response.min_rating, response.max_rating), (800, 3500));
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let state = sample_state(MockCodeforcesApi::new());
        FilterService::toggle_tag(&state, "DP").await.unwrap();
        FilterService::toggle_problem_type(&state, "A").await.unwrap();

        let response = FilterService::reset_filters(&state).await;
        assert!(response.tags.is_empty());
        assert_eq!(response.problem_types, vec!["random"]);
        assert_eq!(response.contest_types, vec!["any"]);
    }

    #[test]
    fn test_options_list_sentinel_first() {
        let options = FilterService::options();
        assert_eq!(options.problem_types[0], "random");
        assert_eq!(options.problem_types.len(), 8);
        assert_eq!(options.contest_types.len(), 6);
        assert!(options.tags.contains(&"dp"));
    }
}
