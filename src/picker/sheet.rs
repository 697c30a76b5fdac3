//! Sheet collection rules
//!
//! Insertion-ordered and unique by problem key. Persistence is layered on
//! top by the sheet service.

use chrono::{DateTime, Utc};

use crate::models::{Problem, ProblemKey, SheetEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    entries: Vec<SheetEntry>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted entries, dropping later duplicates
    pub fn from_entries(entries: Vec<SheetEntry>) -> Self {
        let mut sheet = Self::new();
        for entry in entries {
            if !sheet.contains(&entry.key()) {
                sheet.entries.push(entry);
            }
        }
        sheet
    }

    /// Append `problem` unless its key is already present. Returns whether
    /// the sheet changed.
    pub fn add(&mut self, problem: Problem, added_at: DateTime<Utc>) -> bool {
        if self.contains(&problem.key()) {
            return false;
        }
        self.entries.push(SheetEntry::new(problem, added_at));
        true
    }

    /// Drop the entry for `key`. Returns the removed entry and its position.
    pub fn remove(&mut self, key: &ProblemKey) -> Option<(usize, SheetEntry)> {
        let position = self.entries.iter().position(|e| &e.key() == key)?;
        Some((position, self.entries.remove(position)))
    }

    /// Put a removed entry back where it was
    pub fn restore(&mut self, position: usize, entry: SheetEntry) {
        let position = position.min(self.entries.len());
        self.entries.insert(position, entry);
    }

    /// Undo the most recent `add`
    pub fn pop(&mut self) -> Option<SheetEntry> {
        self.entries.pop()
    }

    pub fn contains(&self, key: &ProblemKey) -> bool {
        self.entries.iter().any(|e| &e.key() == key)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[SheetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
