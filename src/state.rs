//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::codeforces::CodeforcesApi;
use crate::config::Config;
use crate::picker::Sheet;
use crate::session::Session;
use crate::store::KeyValueStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Remote catalog and submission source
    codeforces: Arc<dyn CodeforcesApi>,

    /// Persistent store for the sheet
    store: Arc<dyn KeyValueStore>,

    /// Catalog snapshot, criteria, current problem, solved index
    session: RwLock<Session>,

    /// The user's sheet; held across its own persistence write
    sheet: Mutex<Sheet>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        codeforces: Arc<dyn CodeforcesApi>,
        store: Arc<dyn KeyValueStore>,
        sheet: Sheet,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                codeforces,
                store,
                session: RwLock::new(Session::new()),
                sheet: Mutex::new(sheet),
                config,
            }),
        }
    }

    /// Get a handle to the Codeforces client
    pub fn codeforces(&self) -> Arc<dyn CodeforcesApi> {
        Arc::clone(&self.inner.codeforces)
    }

    /// Get a reference to the sheet store
    pub fn store(&self) -> &dyn KeyValueStore {
        self.inner.store.as_ref()
    }

    pub fn session(&self) -> &RwLock<Session> {
        &self.inner.session
    }

    pub fn sheet(&self) -> &Mutex<Sheet> {
        &self.inner.sheet
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Key the sheet is persisted under
    pub fn sheet_key(&self) -> &str {
        &self.inner.config.store.sheet_key
    }
}
