//! Catalog normalization

use std::collections::{HashMap, HashSet};

use crate::codeforces::{RawProblem, RawProblemSet};
use crate::constants::{MAX_CATALOG_RATING, PROBLEM_INDICES};
use crate::models::{Problem, ProblemKey, ProblemType};

/// Build the catalog's `Problem` set from a raw problemset response.
///
/// Kept: programming problems with an index in A..=G and a rating of at most
/// 2400. Entries missing an id, index or name are dropped. The first entry
/// for a key wins.
pub fn normalize(raw: &RawProblemSet) -> Vec<Problem> {
    let solved_counts = solved_counts(raw);
    let mut seen = HashSet::new();

    raw.problems
        .iter()
        .filter_map(|p| to_problem(p, &solved_counts))
        .filter(|p| seen.insert(p.key()))
        .collect()
}

/// Solved counts by key; a later statistic for the same key replaces an
/// earlier one.
fn solved_counts(raw: &RawProblemSet) -> HashMap<ProblemKey, u64> {
    raw.problem_statistics
        .iter()
        .filter_map(|s| {
            let key = ProblemKey::new(s.contest_id?, s.index.clone()?);
            Some((key, s.solved_count.unwrap_or(0)))
        })
        .collect()
}

fn to_problem(raw: &RawProblem, solved_counts: &HashMap<ProblemKey, u64>) -> Option<Problem> {
    let problem_type = ProblemType::from_str(raw.problem_type.as_deref()?)?;
    if problem_type != ProblemType::Programming {
        return None;
    }

    let index = raw.index.as_deref()?;
    if !PROBLEM_INDICES.contains(&index) {
        return None;
    }

    let rating = raw.rating?;
    if rating > MAX_CATALOG_RATING {
        return None;
    }

    let contest_id = raw.contest_id?;
    let name = raw.name.clone()?;
    let key = ProblemKey::new(contest_id, index);

    Some(Problem {
        contest_id,
        index: index.to_string(),
        name,
        rating: Some(rating),
        tags: normalize_tags(&raw.tags),
        solved_count: solved_counts.get(&key).copied().unwrap_or(0),
        problem_type,
    })
}

/// Lowercase, drop blanks and repeats; source order is kept
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}
