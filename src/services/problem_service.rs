//! Problem service

use tracing::debug;

use crate::{
    constants::NO_PROBLEMS_MESSAGE,
    handlers::problems::{CurrentProblemResponse, ProblemView, ProblemsListResponse},
    state::AppState,
};

/// Problem service for browsing and drawing
pub struct ProblemService;

impl ProblemService {
    /// List problems matching the current criteria
    pub async fn list_problems(state: &AppState, limit: Option<usize>) -> ProblemsListResponse {
        let (filtered, catalog, solved) = {
            let session = state.session().read().await;
            (session.filtered(), session.catalog(), session.solved())
        };

        let sheet = state.sheet().lock().await;
        let problems = filtered
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|p| ProblemView::new(p, &catalog.contest_names, &solved, sheet.contains(&p.key())))
            .collect();

        ProblemsListResponse {
            problems,
            total: filtered.len(),
        }
    }

    /// View of the current problem, if any
    pub async fn current_view(state: &AppState) -> Option<ProblemView> {
        let (current, catalog, solved) = {
            let session = state.session().read().await;
            (session.current().cloned()?, session.catalog(), session.solved())
        };

        let in_sheet = state.sheet().lock().await.contains(&current.key());
        Some(ProblemView::new(&current, &catalog.contest_names, &solved, in_sheet))
    }

    /// Get the current problem
    pub async fn current_problem(state: &AppState) -> CurrentProblemResponse {
        let problem = Self::current_view(state).await;
        let message = problem.is_none().then(|| NO_PROBLEMS_MESSAGE.to_string());
        CurrentProblemResponse { problem, message }
    }

    /// Draw a new current problem from the filtered set
    pub async fn draw_problem(state: &AppState) -> CurrentProblemResponse {
        {
            let mut session = state.session().write().await;
            let drawn = session.draw(&mut rand::rng()).map(|p| p.key());
            debug!(drawn = ?drawn, "Drew problem");
        }
        Self::current_problem(state).await
    }
}
