//! Catalog service

use tracing::{info, warn};

use crate::{
    codeforces::{CodeforcesApi, CodeforcesError},
    error::AppResult,
    handlers::catalog::{CatalogStatsResponse, RefreshResponse},
    models::{Catalog, ContestNames},
    picker::normalize,
    services::ProblemService,
    session::Session,
    state::AppState,
    utils::{format_date, now_utc},
};

/// Catalog service for fetching and publishing snapshots
pub struct CatalogService;

impl CatalogService {
    /// Fetch problems and contests concurrently and build a snapshot.
    ///
    /// A failed contest list only costs the contest names; a failed
    /// problemset fails the whole fetch.
    pub async fn fetch(api: &dyn CodeforcesApi) -> Result<Catalog, CodeforcesError> {
        let (problemset, contests) = futures::future::join(api.problemset(), api.contests()).await;

        let raw = problemset?;
        let contest_names = match contests {
            Ok(contests) => contests.into_iter().collect(),
            Err(e) => {
                warn!(error = %e, "Contest list unavailable, using placeholder names");
                ContestNames::new()
            }
        };

        let problems = normalize(&raw);
        info!(
            raw = raw.problems.len(),
            kept = problems.len(),
            contests = contest_names.len(),
            "Catalog normalized"
        );

        Ok(Catalog::new(problems, contest_names, now_utc()))
    }

    /// Refresh the catalog and publish it unless a newer refresh already did
    pub async fn refresh(state: &AppState) -> AppResult<RefreshResponse> {
        let ticket = state.session().write().await.begin_refresh();
        info!(?ticket, "Refreshing catalog");

        let outcome = Self::fetch(state.codeforces().as_ref()).await;

        let published = {
            let mut session = state.session().write().await;
            match outcome {
                Ok(catalog) => session.finish_refresh(ticket, Ok(catalog), &mut rand::rng()),
                Err(e) => {
                    warn!(error = %e, "Catalog refresh failed");
                    session.finish_refresh(ticket, Err(e.to_string()), &mut rand::rng());
                    return Err(e.into());
                }
            }
        };

        let (stats, contests) = {
            let session = state.session().read().await;
            (Self::stats_of(&session), session.catalog().contest_names.len())
        };

        Ok(RefreshResponse {
            published,
            contests,
            stats,
            current: ProblemService::current_view(state).await,
        })
    }

    /// Get catalog statistics
    pub async fn stats(state: &AppState) -> CatalogStatsResponse {
        let session = state.session().read().await;
        Self::stats_of(&session)
    }

    fn stats_of(session: &Session) -> CatalogStatsResponse {
        let catalog = session.catalog();
        CatalogStatsResponse {
            total_problems: catalog.problems.len(),
            matching_problems: session.matching_count(),
            last_updated: catalog.last_updated,
            last_updated_label: catalog.last_updated.map(format_date),
            loading: session.is_loading(),
            error: session.last_error().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeforces::MockCodeforcesApi;
    use crate::error::AppError;
    use crate::test_utils::{sample_contests, sample_problemset, sample_state};

    #[tokio::test]
    async fn test_refresh_publishes_and_draws() {
        let mut api = MockCodeforcesApi::new();
        api.expect_problemset().returning(|| Ok(sample_problemset()));
        api.expect_contests().returning(|| Ok(sample_contests()));
        let state = sample_state(api);

        let response = CatalogService::refresh(&state).await.unwrap();

        assert!(response.published);
        assert_eq!(response.stats.total_problems, 3);
        assert_eq!(response.contests, 2);
        assert!(response.stats.last_updated_label.is_some());
        assert!(response.current.is_some());
    }

    #[tokio::test]
    async fn test_contest_failure_degrades_to_placeholders() {
        let mut api = MockCodeforcesApi::new();
        api.expect_problemset().returning(|| Ok(sample_problemset()));
        api.expect_contests()
            .returning(|| Err(CodeforcesError::Failed("contest.list is down".to_string())));
        let state = sample_state(api);

        let response = CatalogService::refresh(&state).await.unwrap();
        assert_eq!(response.contests, 0);
        assert_eq!(response.stats.total_problems, 3);
        assert!(response.current.unwrap().contest.starts_with("Contest "));
    }

    #[tokio::test]
    async fn test_problemset_failure_keeps_previous_snapshot() {
        let mut api = MockCodeforcesApi::new();
        let mut calls = 0;
        api.expect_problemset().returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(sample_problemset())
            } else {
                Err(CodeforcesError::Failed("Call limit exceeded".to_string()))
            }
        });
        api.expect_contests().returning(|| Ok(sample_contests()));
        let state = sample_state(api);

        CatalogService::refresh(&state).await.unwrap();
        let err = CatalogService::refresh(&state).await.unwrap_err();
        assert!(matches!(err, AppError::Codeforces(_)));

        let stats = CatalogService::stats(&state).await;
        assert_eq!(stats.total_problems, 3);
        assert_eq!(stats.error.as_deref(), Some("Call limit exceeded"));
        assert!(!stats.loading);
    }
}
