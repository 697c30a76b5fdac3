//! Filter evaluation
//!
//! A problem passes when every criterion admits it. Multi-choice criteria
//! are any-of within themselves.

use crate::models::{ContestNames, FilterCriteria, Problem};

/// Problems of `problems` admitted by `criteria`, in catalog order
pub fn filter_problems(
    problems: &[Problem],
    criteria: &FilterCriteria,
    contest_names: &ContestNames,
) -> Vec<Problem> {
    problems
        .iter()
        .filter(|p| matches(p, criteria, contest_names))
        .cloned()
        .collect()
}

/// Number of problems admitted by `criteria`
pub fn count_matching(problems: &[Problem], criteria: &FilterCriteria, contest_names: &ContestNames) -> usize {
    problems
        .iter()
        .filter(|p| matches(p, criteria, contest_names))
        .count()
}

pub fn matches(problem: &Problem, criteria: &FilterCriteria, contest_names: &ContestNames) -> bool {
    matches_problem_type(problem, criteria)
        && matches_rating(problem, criteria)
        && matches_contest_type(problem, criteria, contest_names)
        && matches_tags(problem, criteria)
}

fn matches_problem_type(problem: &Problem, criteria: &FilterCriteria) -> bool {
    criteria.problem_types.admits(|index| *index == problem.index)
}

/// Inclusive range; unrated problems never match
fn matches_rating(problem: &Problem, criteria: &FilterCriteria) -> bool {
    problem
        .rating
        .is_some_and(|r| r >= criteria.min_rating && r <= criteria.max_rating)
}

/// Matched against the raw contest name; an unknown contest has an empty name
fn matches_contest_type(problem: &Problem, criteria: &FilterCriteria, contest_names: &ContestNames) -> bool {
    if criteria.contest_types.is_all() {
        return true;
    }
    let name = contest_names.get(problem.contest_id).unwrap_or_default();
    criteria.contest_types.admits(|t| t.matches(name))
}

fn matches_tags(problem: &Problem, criteria: &FilterCriteria) -> bool {
    criteria.tags.is_empty() || criteria.tags.iter().any(|tag| problem.has_tag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContestType, ProblemType, Selection};

    fn sample_problem(contest_id: i64, index: &str, rating: Option<i32>, tags: &[&str]) -> Problem {
        Problem {
            contest_id,
            index: index.to_string(),
            name: format!("Problem {}{}", contest_id, index),
            rating,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            solved_count: 0,
            problem_type: ProblemType::Programming,
        }
    }

    fn sample_catalog() -> (Vec<Problem>, ContestNames) {
        let problems = vec![
            sample_problem(1, "A", Some(800), &["implementation"]),
            sample_problem(1, "B", Some(1200), &["dp", "greedy"]),
            sample_problem(2, "A", Some(1000), &["math"]),
            sample_problem(2, "C", Some(1700), &["graphs"]),
            sample_problem(3, "D", Some(2100), &["dp"]),
            sample_problem(4, "A", None, &[]),
        ];

        let mut names = ContestNames::new();
        names.insert(1, "Codeforces Round #1 (Div. 2)");
        names.insert(2, "Educational Codeforces Round 2 (Rated for Div. 2)");
        names.insert(3, "Codeforces Global Round 3");
        (problems, names)
    }

    fn keys(problems: &[Problem]) -> Vec<String> {
        problems.iter().map(|p| p.key().to_string()).collect()
    }

    #[test]
    fn test_default_criteria_is_rating_bounded_set() {
        let (problems, names) = sample_catalog();
        let result = filter_problems(&problems, &FilterCriteria::default(), &names);
        assert_eq!(keys(&result), vec!["1-A", "1-B", "2-A", "2-C", "3-D"]);
    }

    #[test]
    fn test_result_is_subset_in_catalog_order() {
        let (problems, names) = sample_catalog();
        let mut criteria = FilterCriteria::default();
        criteria.toggle_tag("dp");
        criteria.problem_types.toggle("D".to_string());
        criteria.problem_types.toggle("B".to_string());

        let result = filter_problems(&problems, &criteria, &names);
        assert!(result.iter().all(|p| problems.contains(p)));
        assert_eq!(keys(&result), vec!["1-B", "3-D"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let (problems, names) = sample_catalog();
        let criteria = FilterCriteria {
            min_rating: 2000,
            max_rating: 1000,
            ..FilterCriteria::default()
        };
        assert!(filter_problems(&problems, &criteria, &names).is_empty());
    }

    #[test]
    fn test_rating_bounds_are_inclusive() {
        let (problems, names) = sample_catalog();
        let criteria = FilterCriteria {
            min_rating: 1000,
            max_rating: 1200,
            ..FilterCriteria::default()
        };
        assert_eq!(keys(&filter_problems(&problems, &criteria, &names)), vec!["1-B", "2-A"]);
    }

    #[test]
    fn test_contest_type_uses_raw_names() {
        let (problems, names) = sample_catalog();

        let mut criteria = FilterCriteria::default();
        criteria.contest_types = Selection::only(ContestType::Div2);
        // Educational names say "(Rated for Div. 2)", which is not the div2 marker
        assert_eq!(keys(&filter_problems(&problems, &criteria, &names)), vec!["1-A", "1-B"]);

        criteria.contest_types.toggle(ContestType::Global);
        assert_eq!(
            keys(&filter_problems(&problems, &criteria, &names)),
            vec!["1-A", "1-B", "3-D"]
        );
    }

    #[test]
    fn test_unknown_contest_never_matches_a_concrete_type() {
        let problems = vec![sample_problem(99, "A", Some(900), &[])];
        let mut criteria = FilterCriteria::default();
        criteria.contest_types = Selection::only(ContestType::Div2);
        assert!(filter_problems(&problems, &criteria, &ContestNames::new()).is_empty());
    }

    #[test]
    fn test_tags_are_any_of_and_case_insensitive() {
        let (problems, names) = sample_catalog();
        let mut criteria = FilterCriteria::default();
        criteria.toggle_tag("GRAPHS");
        criteria.toggle_tag("math");
        assert_eq!(keys(&filter_problems(&problems, &criteria, &names)), vec!["2-A", "2-C"]);
        assert_eq!(count_matching(&problems, &criteria, &names), 2);
    }
}
