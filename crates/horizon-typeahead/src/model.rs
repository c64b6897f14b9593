//! Static candidate lists for auto mode.
//!
//! In auto mode the controller owns the filtering: every text change runs a
//! literal prefix match over a [`CandidateListModel`] the host supplied up
//! front. Matching preserves source order and never sorts.

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::error::Result;

/// Controls how prefix matching handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g., "Ap" won't match "apple").
    CaseSensitive,
    /// Case-insensitive matching (e.g., "Ap" will match "apple").
    #[default]
    CaseInsensitive,
}

/// An ordered, fully available list of candidates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateListModel {
    items: Vec<Candidate>,
}

impl CandidateListModel {
    /// Create a new list model with the given items.
    pub fn new(items: Vec<Candidate>) -> Self {
        Self { items }
    }

    /// Create an empty list model.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Parse a JSON array of strings and/or `{ "value": ... }` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<Candidate> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    /// Get a reference to the items.
    pub fn items(&self) -> &[Candidate] {
        &self.items
    }

    /// Replace all items.
    pub fn set_items(&mut self, items: Vec<Candidate>) {
        self.items = items;
    }

    /// Add an item to the end of the list.
    pub fn add_item(&mut self, item: impl Into<Candidate>) {
        self.items.push(item.into());
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of items before filtering.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose match text starts with `prefix`, in source order.
    ///
    /// An empty prefix matches nothing: the suggestion list only opens once
    /// the user has typed something. Items without a usable value never match.
    pub fn matches(&self, prefix: &str, case_sensitivity: CaseSensitivity) -> Vec<Candidate> {
        if prefix.is_empty() {
            return Vec::new();
        }

        match case_sensitivity {
            CaseSensitivity::CaseSensitive => self
                .items
                .iter()
                .filter(|item| item.match_text().is_some_and(|text| text.starts_with(prefix)))
                .cloned()
                .collect(),
            CaseSensitivity::CaseInsensitive => {
                let prefix_lower = prefix.to_lowercase();
                self.items
                    .iter()
                    .filter(|item| {
                        item.match_text()
                            .is_some_and(|text| text.to_lowercase().starts_with(&prefix_lower))
                    })
                    .cloned()
                    .collect()
            }
        }
    }
}

impl From<Vec<Candidate>> for CandidateListModel {
    fn from(items: Vec<Candidate>) -> Self {
        Self::new(items)
    }
}

impl From<Vec<String>> for CandidateListModel {
    fn from(items: Vec<String>) -> Self {
        Self::new(items.into_iter().map(Candidate::Text).collect())
    }
}

impl From<Vec<&str>> for CandidateListModel {
    fn from(items: Vec<&str>) -> Self {
        Self::new(items.into_iter().map(Candidate::from).collect())
    }
}
