//! Contest name shortening

use crate::constants::CONTEST_NAME_PLACEHOLDER_PREFIX;
use crate::models::ContestNames;

const ROUND_PREFIX: &str = "Codeforces Round #";
const LONG_NAME_THRESHOLD: usize = 30;

/// Shorten a raw contest name for display. The first matching rule applies
/// and each replacement touches only the first occurrence.
pub fn format_contest_name(name: &str) -> String {
    if name.contains("Educational Codeforces Round") {
        return name.replacen("Educational Codeforces Round", "Edu. Round", 1);
    }
    if name.contains(ROUND_PREFIX) && name.contains("(Div. 2)") {
        return name
            .replacen(ROUND_PREFIX, "Round #", 1)
            .replacen(" (Div. 2)", "", 1);
    }
    if name.contains(ROUND_PREFIX) && name.contains("(Div. 1 + Div. 2)") {
        return name
            .replacen(ROUND_PREFIX, "Round #", 1)
            .replacen(" (Div. 1 + Div. 2)", "", 1);
    }
    if name.contains("Codeforces Global Round") {
        return name.replacen("Codeforces Global Round", "Global Round", 1);
    }
    if name.chars().count() > LONG_NAME_THRESHOLD {
        return name.replacen(ROUND_PREFIX, "CF #", 1);
    }
    name.to_string()
}

/// Raw name of a contest, or the `"Contest {id}"` placeholder
pub fn raw_name(contest_id: i64, names: &ContestNames) -> String {
    names
        .get(contest_id)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} {}", CONTEST_NAME_PLACEHOLDER_PREFIX, contest_id))
}

/// Formatted display name of a contest
pub fn display_name(contest_id: i64, names: &ContestNames) -> String {
    format_contest_name(&raw_name(contest_id, names))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_educational() {
        assert_eq!(
            format_contest_name("Educational Codeforces Round 150 (Rated for Div. 2)"),
            "Edu. Round 150 (Rated for Div. 2)"
        );
    }

    #[test]
    fn test_div2_round() {
        assert_eq!(format_contest_name("Codeforces Round #799 (Div. 2)"), "Round #799");
    }

    #[test]
    fn test_combined_round() {
        assert_eq!(
            format_contest_name("Codeforces Round #800 (Div. 1 + Div. 2)"),
            "Round #800"
        );
    }

    #[test]
    fn test_global_round() {
        assert_eq!(format_contest_name("Codeforces Global Round 23"), "Global Round 23");
    }

    #[test]
    fn test_long_names_get_cf_prefix() {
        let name = "Codeforces Round #745 (Div. 1) and some extra";
        assert_eq!(format_contest_name(name), "CF #745 (Div. 1) and some extra");
    }

    #[test]
    fn test_short_names_unchanged() {
        assert_eq!(format_contest_name("Codeforces Round #745 (Div. 1)"), "Codeforces Round #745 (Div. 1)");
        assert_eq!(format_contest_name("Contest 42"), "Contest 42");
    }

    #[test]
    fn test_rounds_without_hash_fall_through() {
        // Newer names drop the '#', so only the length rule can apply
        let name = "Codeforces Round 900 (Div. 2)";
        assert_eq!(format_contest_name(name), name);
    }

    #[test]
    fn test_only_first_occurrence_is_replaced() {
        assert_eq!(
            format_contest_name("Codeforces Global Round / Codeforces Global Round"),
            "Global Round / Codeforces Global Round"
        );
    }

    #[test]
    fn test_placeholder_for_unknown_contest() {
        let mut names = ContestNames::new();
        names.insert(1, "Codeforces Round #1 (Div. 2)");
        assert_eq!(display_name(1, &names), "Round #1");
        assert_eq!(display_name(7, &names), "Contest 7");
        assert_eq!(raw_name(7, &names), "Contest 7");
    }
}
