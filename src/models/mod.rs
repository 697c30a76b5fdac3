//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod catalog;
pub mod contest;
pub mod criteria;
pub mod problem;
pub mod sheet;
pub mod submission;

pub use catalog::*;
pub use contest::*;
pub use criteria::*;
pub use problem::*;
pub use sheet::*;
pub use submission::*;
