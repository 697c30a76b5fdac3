//! Handle service

use tracing::{info, warn};

use crate::{
    error::AppResult,
    handlers::handles::HandleStatusResponse,
    picker::SolvedIndex,
    state::AppState,
};

/// Handle service for the solved-status index
pub struct HandleService;

impl HandleService {
    /// Fetch `handle`'s submissions and replace the solved index.
    ///
    /// On failure the previous index stays and the status records the error.
    pub async fn check_handle(state: &AppState, handle: &str) -> AppResult<HandleStatusResponse> {
        let ticket = state.session().write().await.begin_handle_check(handle);
        info!(handle, ?ticket, "Checking handle");

        let outcome = state.codeforces().user_status(handle).await;

        let mut session = state.session().write().await;
        match outcome {
            Ok(submissions) => {
                let index = SolvedIndex::build(&submissions);
                info!(
                    handle,
                    submissions = submissions.len(),
                    solved = index.len(),
                    "Handle loaded"
                );
                session.finish_handle_check(ticket, handle, Ok(index));
                Ok(HandleStatusResponse::from(session.handle_status()))
            }
            Err(e) => {
                warn!(handle, error = %e, "Handle check failed");
                session.finish_handle_check(ticket, handle, Err(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Get the current handle status
    pub async fn status(state: &AppState) -> HandleStatusResponse {
        let session = state.session().read().await;
        HandleStatusResponse::from(session.handle_status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeforces::{CodeforcesError, MockCodeforcesApi};
    use crate::error::AppError;
    use crate::models::ProblemKey;
    use crate::session::HandleStatus;
    use crate::test_utils::{sample_state, sample_submissions};

    #[tokio::test]
    async fn test_check_builds_index() {
        let mut api = MockCodeforcesApi::new();
        api.expect_user_status()
            .withf(|handle| handle == "tourist")
            .returning(|_| Ok(sample_submissions()));
        let state = sample_state(api);

        let response = HandleService::check_handle(&state, "tourist").await.unwrap();
        assert_eq!(
            response.status,
            HandleStatus::Loaded {
                handle: "tourist".to_string(),
                solved: 2
            }
        );
        assert_eq!(response.message.as_deref(), Some("Handle \"tourist\" loaded. (2 solved)"));

        let solved = state.session().read().await.solved();
        assert_eq!(solved.key_strings(), vec!["200-B", "300-C"]);
        assert!(!solved.contains(&ProblemKey::new(100, "A")));
    }

    #[tokio::test]
    async fn test_empty_history_is_a_success() {
        let mut api = MockCodeforcesApi::new();
        api.expect_user_status().returning(|_| Ok(Vec::new()));
        let state = sample_state(api);

        let response = HandleService::check_handle(&state, "newbie").await.unwrap();
        assert_eq!(response.message.as_deref(), Some("Handle \"newbie\" loaded. (0 solved)"));
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_index() {
        let mut api = MockCodeforcesApi::new();
        api.expect_user_status()
            .withf(|handle| handle == "tourist")
            .returning(|_| Ok(sample_submissions()));
        api.expect_user_status()
            .withf(|handle| handle == "nobody_xyz")
            .returning(|_| {
                Err(CodeforcesError::Failed(
                    "handle: User with handle nobody_xyz not found".to_string(),
                ))
            });
        let state = sample_state(api);

        HandleService::check_handle(&state, "tourist").await.unwrap();
        let err = HandleService::check_handle(&state, "nobody_xyz").await.unwrap_err();
        assert!(matches!(err, AppError::Codeforces(_)));

        let status = HandleService::status(&state).await;
        assert_eq!(
            status.message.as_deref(),
            Some("Error: handle: User with handle nobody_xyz not found")
        );
        assert_eq!(state.session().read().await.solved().len(), 2);
    }
}
