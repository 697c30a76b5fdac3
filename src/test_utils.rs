//! Shared fixtures for unit and router tests

use std::path::PathBuf;
use std::sync::Arc;

use crate::codeforces::{MockCodeforcesApi, RawProblem, RawProblemSet, RawProblemStatistics};
use crate::config::{CodeforcesConfig, Config, RedisConfig, ServerConfig, StoreBackend, StoreConfig};
use crate::constants::{DEFAULT_CODEFORCES_API_URL, DEFAULT_SHEET_STORAGE_KEY, DEFAULT_SUBMISSION_COUNT};
use crate::models::{Contest, Submission, Verdict};
use crate::picker::Sheet;
use crate::state::AppState;
use crate::store::{KeyValueStore, MemoryStore};

pub fn sample_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "cfpicker=debug".to_string(),
        },
        redis: RedisConfig {
            url: "redis://localhost:6379".to_string(),
        },
        codeforces: CodeforcesConfig {
            base_url: DEFAULT_CODEFORCES_API_URL.to_string(),
            timeout_secs: None,
            submission_count: DEFAULT_SUBMISSION_COUNT,
        },
        store: StoreConfig {
            backend: StoreBackend::Memory,
            file_path: PathBuf::from("unused.json"),
            sheet_key: DEFAULT_SHEET_STORAGE_KEY.to_string(),
        },
    }
}

pub fn sample_state(api: MockCodeforcesApi) -> AppState {
    sample_state_with_store(api, Arc::new(MemoryStore::new()))
}

pub fn sample_state_with_store(api: MockCodeforcesApi, store: Arc<dyn KeyValueStore>) -> AppState {
    AppState::new(Arc::new(api), store, Sheet::new(), sample_config())
}

fn sample_raw_problem(contest_id: i64, index: &str, rating: i32, tags: &[&str]) -> RawProblem {
    RawProblem {
        contest_id: Some(contest_id),
        index: Some(index.to_string()),
        name: Some(format!("Problem {}{}", contest_id, index)),
        problem_type: Some("PROGRAMMING".to_string()),
        rating: Some(rating),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Three usable problems plus two the normalizer drops
pub fn sample_problemset() -> RawProblemSet {
    RawProblemSet {
        problems: vec![
            sample_raw_problem(100, "A", 1200, &["dp", "greedy"]),
            sample_raw_problem(200, "B", 1500, &["math"]),
            sample_raw_problem(300, "C", 1800, &["DP"]),
            sample_raw_problem(300, "H", 1800, &["dp"]),
            sample_raw_problem(400, "A", 2600, &["dp"]),
        ],
        problem_statistics: vec![RawProblemStatistics {
            contest_id: Some(200),
            index: Some("B".to_string()),
            solved_count: Some(5000),
        }],
    }
}

/// Names for contests 100 and 200; 300 has none
pub fn sample_contests() -> Vec<Contest> {
    vec![
        Contest {
            id: 100,
            name: "Codeforces Round #100 (Div. 2)".to_string(),
        },
        Contest {
            id: 200,
            name: "Educational Codeforces Round 2 (Rated for Div. 2)".to_string(),
        },
    ]
}

/// Accepted on 200-B and 300-C only
pub fn sample_submissions() -> Vec<Submission> {
    let submission = |contest_id: i64, index: &str, verdict: Verdict| Submission {
        contest_id,
        index: index.to_string(),
        verdict: Some(verdict),
    };

    vec![
        submission(200, "B", Verdict::Ok),
        submission(200, "B", Verdict::WrongAnswer),
        submission(300, "C", Verdict::Ok),
        submission(100, "A", Verdict::WrongAnswer),
    ]
}
