//! Filter criteria model

use std::collections::BTreeSet;

use super::ContestType;
use crate::constants::{DEFAULT_MAX_RATING, DEFAULT_MIN_RATING};

/// A multi-choice filter that is either unconstrained or limited to a
/// non-empty set of concrete values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Ord> {
    All,
    OneOrMoreOf(BTreeSet<T>),
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Ord + Clone> Selection<T> {
    /// Limit to exactly one value
    pub fn only(value: T) -> Self {
        Self::OneOrMoreOf(BTreeSet::from([value]))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Flip membership of `value`. Adding a value leaves `All`; removing the
    /// last one returns to `All`.
    pub fn toggle(&mut self, value: T) {
        *self = match std::mem::take(self) {
            Self::All => Self::only(value),
            Self::OneOrMoreOf(mut values) => {
                if !values.remove(&value) {
                    values.insert(value);
                }
                if values.is_empty() {
                    Self::All
                } else {
                    Self::OneOrMoreOf(values)
                }
            }
        };
    }

    /// Drop every concrete value
    pub fn select_all(&mut self) {
        *self = Self::All;
    }

    /// `All` admits everything; otherwise at least one selected value must
    /// satisfy `pred`.
    pub fn admits(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        match self {
            Self::All => true,
            Self::OneOrMoreOf(values) => values.iter().any(|v| pred(v)),
        }
    }

    /// Selected concrete values (empty for `All`)
    pub fn values(&self) -> Vec<T> {
        match self {
            Self::All => Vec::new(),
            Self::OneOrMoreOf(values) => values.iter().cloned().collect(),
        }
    }
}

/// The active query over the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Problem index letters
    pub problem_types: Selection<String>,
    pub contest_types: Selection<ContestType>,
    pub min_rating: i32,
    pub max_rating: i32,
    /// Lowercase tags; empty means no tag constraint
    pub tags: BTreeSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            problem_types: Selection::All,
            contest_types: Selection::All,
            min_rating: DEFAULT_MIN_RATING,
            max_rating: DEFAULT_MAX_RATING,
            tags: BTreeSet::new(),
        }
    }
}

impl FilterCriteria {
    /// Flip a tag in or out of the selection
    pub fn toggle_tag(&mut self, tag: &str) {
        let tag = tag.trim().to_lowercase();
        if !self.tags.remove(&tag) {
            self.tags.insert(tag);
        }
    }
}
