//! Utility functions

pub mod time;
pub mod validation;

pub use time::{format_date, now_utc, parse_datetime};
pub use validation::{parse_rating, validate_handle};
