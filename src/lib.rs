//! cfpicker - Codeforces practice problem picker
//!
//! This library pulls the Codeforces problem catalog, narrows it down with
//! composable filters, draws random practice problems, tracks which ones a
//! handle has already solved and keeps a persistent practice sheet.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Orchestration of fetches, session updates and persistence
//! - **Picker**: The pure selection engine (normalize, filter, draw, sheet rules)
//! - **Session**: Published catalog snapshot and per-user picker state
//! - **Codeforces / Store**: Adapters behind traits
//! - **Models**: Domain models

pub mod codeforces;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod picker;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
