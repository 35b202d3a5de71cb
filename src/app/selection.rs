//! The user's current filter choices for one screen.
//!
//! A [`FilterSelection`] holds plain values (the search box text and one
//! selected value per categorical axis), not predicates. The screen turns it
//! into a fresh set of criteria every time the pipeline runs, so a new choice
//! always replaces the old one instead of accumulating.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Search text plus the selected value of each categorical filter axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Raw search box contents.
    #[serde(default)]
    pub search: String,

    /// Selected value per axis name. Axes without an entry match everything.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl FilterSelection {
    /// Sets or clears the value for `axis`.
    ///
    /// `None` and the empty string both mean "All", which removes the entry.
    /// Returns `true` when the selection changed.
    pub fn set(&mut self, axis: &str, value: Option<&str>) -> bool {
        match value.filter(|v| !v.is_empty()) {
            Some(value) => {
                if self.values.get(axis).is_some_and(|current| current == value) {
                    return false;
                }
                self.values.insert(axis.to_string(), value.to_string());
                true
            }
            None => self.values.remove(axis).is_some(),
        }
    }

    /// Returns the selected value for `axis`, `None` meaning "All".
    #[must_use]
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values.get(axis).map(String::as_str)
    }

    /// Replaces the search text. Returns `true` when it changed.
    pub fn set_search(&mut self, term: &str) -> bool {
        if self.search == term {
            return false;
        }
        self.search = term.to_string();
        true
    }

    /// Returns `true` when nothing is filtered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.values.is_empty()
    }

    /// Resets every axis and the search text.
    pub fn clear(&mut self) {
        self.search.clear();
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_axis() {
        let mut selection = FilterSelection::default();
        assert!(selection.set("status", Some("approved")));
        assert_eq!(selection.get("status"), Some("approved"));
        assert!(!selection.set("status", Some("approved")));
        assert!(selection.set("status", None));
        assert_eq!(selection.get("status"), None);
        assert!(!selection.set("status", Some("")));
    }

    #[test]
    fn test_whitespace_search_is_empty() {
        let mut selection = FilterSelection::default();
        assert!(selection.set_search("  "));
        assert!(selection.is_empty());
        assert!(selection.set_search("ada"));
        assert!(!selection.is_empty());
        selection.clear();
        assert!(selection.is_empty());
    }
}
