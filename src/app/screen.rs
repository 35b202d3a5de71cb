//! Per-screen wiring of record fields into the engine.
//!
//! Every list screen used to re-derive its own filter and sort closures on each
//! render. A [`Screen`] captures that wiring once: which fields the search box
//! looks at, which categorical axes exist, which fields the sort modes use and
//! which field identifies a record. The coordinator asks the screen for fresh
//! criteria whenever the selection changes.
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::{FilterSelection, Screen};
//! use rosterview::engine::{Accessor, SortAccessors};
//!
//! struct Row { id: String, name: Option<String>, status: Option<String>, at: Option<String> }
//!
//! let screen = Screen::new(
//!     "rows",
//!     Accessor::new(|r: &Row| Some(r.id.as_str())),
//!     SortAccessors {
//!         date: Accessor::new(|r: &Row| r.at.as_deref()),
//!         text: Accessor::new(|r: &Row| r.name.as_deref()),
//!     },
//! )
//! .search_in(Accessor::new(|r: &Row| r.name.as_deref()))
//! .axis("status", Accessor::new(|r: &Row| r.status.as_deref()));
//!
//! let mut selection = FilterSelection::default();
//! selection.set("status", Some("approved"));
//! assert_eq!(screen.criteria(&selection).len(), 2);
//! ```

use crate::engine::filter::{Accessor, Criterion};
use crate::engine::sort::SortAccessors;
use super::selection::FilterSelection;
use serde::{Deserialize, Serialize};

/// How the search box text is matched against the searched fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStyle {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Skim fuzzy match, every token must hit.
    Fuzzy,
}

/// Field accessors and filter axes for one list screen.
#[derive(Debug)]
pub struct Screen<R> {
    name: String,
    key: Accessor<R>,
    sort: SortAccessors<R>,
    search_fields: Vec<Accessor<R>>,
    search_style: SearchStyle,
    axes: Vec<(String, Accessor<R>)>,
}

impl<R> Clone for Screen<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            key: self.key.clone(),
            sort: self.sort.clone(),
            search_fields: self.search_fields.clone(),
            search_style: self.search_style,
            axes: self.axes.clone(),
        }
    }
}

impl<R> Screen<R> {
    /// Creates a screen with a record key and sort fields, no search fields
    /// and no axes.
    pub fn new(name: impl Into<String>, key: Accessor<R>, sort: SortAccessors<R>) -> Self {
        Self {
            name: name.into(),
            key,
            sort,
            search_fields: Vec::new(),
            search_style: SearchStyle::Substring,
            axes: Vec::new(),
        }
    }

    /// Adds a field the search box matches against.
    #[must_use]
    pub fn search_in(mut self, field: Accessor<R>) -> Self {
        self.search_fields.push(field);
        self
    }

    /// Switches the search box to the given matching style.
    #[must_use]
    pub const fn search_style(mut self, style: SearchStyle) -> Self {
        self.search_style = style;
        self
    }

    /// Adds a categorical filter axis compared by equality.
    #[must_use]
    pub fn axis(mut self, name: impl Into<String>, field: Accessor<R>) -> Self {
        self.axes.push((name.into(), field));
        self
    }

    /// Screen name used in log fields.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accessor for the field that uniquely identifies a record.
    #[must_use]
    pub const fn key(&self) -> &Accessor<R> {
        &self.key
    }

    /// Date and text fields behind the sort modes.
    #[must_use]
    pub const fn sort_accessors(&self) -> &SortAccessors<R> {
        &self.sort
    }

    /// Names of the categorical axes, in declaration order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|(name, _)| name.as_str())
    }

    /// Returns `true` when `axis` is declared on this screen.
    #[must_use]
    pub fn has_axis(&self, axis: &str) -> bool {
        self.axes.iter().any(|(name, _)| name == axis)
    }
}

impl<R: 'static> Screen<R> {
    /// Builds the criteria for `selection`: one search criterion plus one
    /// equality criterion per declared axis.
    ///
    /// Selected values for axes the screen does not declare are ignored.
    #[must_use]
    pub fn criteria(&self, selection: &FilterSelection) -> Vec<Criterion<R>> {
        let mut criteria = Vec::with_capacity(self.axes.len() + 1);

        criteria.push(match self.search_style {
            SearchStyle::Substring => Criterion::text_search(&selection.search, &self.search_fields),
            SearchStyle::Fuzzy => Criterion::fuzzy(&selection.search, &self.search_fields),
        });

        for (name, field) in &self.axes {
            criteria.push(Criterion::equals(field.clone(), selection.get(name)));
        }

        criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: &'static str,
        name: &'static str,
        city: Option<&'static str>,
    }

    fn screen() -> Screen<Row> {
        Screen::new(
            "rows",
            Accessor::new(|r: &Row| Some(r.id)),
            SortAccessors {
                date: Accessor::new(|_: &Row| None),
                text: Accessor::new(|r: &Row| Some(r.name)),
            },
        )
        .search_in(Accessor::new(|r: &Row| Some(r.name)))
        .axis("city", Accessor::new(|r: &Row| r.city))
    }

    #[test]
    fn test_empty_selection_matches_everything() {
        let criteria = screen().criteria(&FilterSelection::default());
        assert!(criteria.iter().all(Criterion::matches_everything));
    }

    #[test]
    fn test_undeclared_axis_is_ignored() {
        let mut selection = FilterSelection::default();
        selection.set("country", Some("NL"));
        let criteria = screen().criteria(&selection);
        assert!(criteria.iter().all(Criterion::matches_everything));
        assert!(!screen().has_axis("country"));
    }

    #[test]
    fn test_axis_criterion_filters() {
        let rows = vec![
            Row { id: "1", name: "Ada", city: Some("London") },
            Row { id: "2", name: "Alan", city: None },
        ];
        let mut selection = FilterSelection::default();
        selection.set("city", Some("London"));
        let criteria = screen().criteria(&selection);
        let kept = crate::engine::filter::apply(&rows, &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "1");
    }

    #[test]
    fn test_fuzzy_style() {
        let rows = vec![
            Row { id: "1", name: "Ada Lovelace", city: None },
            Row { id: "2", name: "Alan Turing", city: None },
        ];
        let screen = screen().search_style(SearchStyle::Fuzzy);
        let mut selection = FilterSelection::default();
        selection.set_search("alvc");
        let kept = crate::engine::filter::apply(&rows, &screen.criteria(&selection));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "1");
    }
}
