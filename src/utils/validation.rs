//! Input validation utilities

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::constants::{sentinels, PROBLEM_INDICES};

/// Codeforces handle alphabet
static HANDLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("handle regex is valid"));

/// Validate handle syntax (length is checked by the request DTO)
pub fn validate_handle(handle: &str) -> Result<(), ValidationError> {
    if !HANDLE_REGEX.is_match(handle) {
        return Err(ValidationError::new("handle").with_message(Cow::Borrowed(
            "Handle can only contain letters, numbers, underscores, hyphens and dots",
        )));
    }
    Ok(())
}

/// Read a rating bound the way a number input is read: leading integer
/// prefix, anything unreadable or zero falls back to `default`.
pub fn parse_rating(input: &str, default: i32) -> i32 {
    let s = input.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i32>() {
        Ok(0) | Err(_) => default,
        Ok(n) => sign * n,
    }
}

/// A problem index the filter knows about
pub fn is_problem_index(value: &str) -> bool {
    PROBLEM_INDICES.contains(&value)
}

/// Whether `value` names the "any index" choice
pub fn is_any_problem_type(value: &str) -> bool {
    value.eq_ignore_ascii_case(sentinels::ANY_PROBLEM_TYPE)
}

/// Whether `value` names the "any contest" choice
pub fn is_any_contest_type(value: &str) -> bool {
    value.eq_ignore_ascii_case(sentinels::ANY_CONTEST_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_handle() {
        assert!(validate_handle("tourist").is_ok());
        assert!(validate_handle("Um_nik").is_ok());
        assert!(validate_handle("a.b-c").is_ok());
        assert!(validate_handle("bad handle").is_err());
        assert!(validate_handle("semi;colon").is_err());
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("1200", 800), 1200);
        assert_eq!(parse_rating("  1500abc", 800), 1500);
        assert_eq!(parse_rating("abc", 800), 800);
        assert_eq!(parse_rating("", 3500), 3500);
        assert_eq!(parse_rating("0", 3500), 3500);
        assert_eq!(parse_rating("-100", 800), -100);
    }

    #[test]
    fn test_problem_type_values() {
        assert!(is_problem_index("A"));
        assert!(is_problem_index("G"));
        assert!(!is_problem_index("H"));
        assert!(!is_problem_index("a"));
        assert!(is_any_problem_type("random"));
        assert!(is_any_contest_type("ANY"));
    }
}
