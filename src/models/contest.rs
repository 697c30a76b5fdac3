//! Contest model

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::contest_types;

/// A contest from the contest list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: i64,
    pub name: String,
}

/// Raw contest names keyed by contest id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContestNames(HashMap<i64, String>);

impl ContestNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw name of a contest, if the contest list had it
    pub fn get(&self, contest_id: i64) -> Option<&str> {
        self.0.get(&contest_id).map(String::as_str)
    }

    pub fn insert(&mut self, contest_id: i64, name: impl Into<String>) {
        self.0.insert(contest_id, name.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Contest> for ContestNames {
    fn from_iter<I: IntoIterator<Item = Contest>>(iter: I) -> Self {
        Self(iter.into_iter().map(|c| (c.id, c.name)).collect())
    }
}

/// Contest categories that can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContestType {
    #[serde(rename = "div2")]
    Div2,
    #[serde(rename = "div3")]
    Div3,
    #[serde(rename = "div4")]
    Div4,
    #[serde(rename = "educational")]
    Educational,
    #[serde(rename = "global")]
    Global,
    #[serde(rename = "div1+div2")]
    Div1Div2,
}

impl ContestType {
    pub const ALL: [ContestType; 6] = [
        Self::Div2,
        Self::Div3,
        Self::Div4,
        Self::Educational,
        Self::Global,
        Self::Div1Div2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Div2 => contest_types::DIV2,
            Self::Div3 => contest_types::DIV3,
            Self::Div4 => contest_types::DIV4,
            Self::Educational => contest_types::EDUCATIONAL,
            Self::Global => contest_types::GLOBAL,
            Self::Div1Div2 => contest_types::DIV1_DIV2,
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Div2 => "Div 2",
            Self::Div3 => "Div 3",
            Self::Div4 => "Div 4",
            Self::Educational => "Educational",
            Self::Global => "Global Round",
            Self::Div1Div2 => "Div 1 + Div 2",
        }
    }

    /// Lowercase substring a contest name must contain to be of this type
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Div2 => "(div. 2)",
            Self::Div3 => "(div. 3)",
            Self::Div4 => "(div. 4)",
            Self::Educational => "educational",
            Self::Global => "global round",
            Self::Div1Div2 => "(div. 1 + div. 2)",
        }
    }

    /// Whether a contest name belongs to this type (case-insensitive)
    pub fn matches(&self, contest_name: &str) -> bool {
        contest_name.to_lowercase().contains(self.marker())
    }
}

impl fmt::Display for ContestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown contest type '{}'", s))
    }
}
