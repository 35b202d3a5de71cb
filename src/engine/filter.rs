//! Predicate criteria and the filter stage of the pipeline.
//!
//! A [`Criterion`] is a boolean test over one record. Screens build a fresh set
//! of criteria from the current filter selection on every interaction, and
//! [`apply`] keeps the records that pass all of them (logical AND), in input
//! order.
//!
//! # Criterion shapes
//!
//! - **Categorical equality** ([`Criterion::equals`]): a field must equal a
//!   selected value. A `None` or empty selection is the "match all" sentinel
//!   (for example an "All Status" dropdown entry). A record missing the field
//!   never matches a concrete selection.
//! - **Free-text search** ([`Criterion::text_search`]): case-insensitive
//!   substring match, passing if ANY of the searched fields contains the term.
//!   Missing fields read as the empty string.
//! - **Fuzzy search** ([`Criterion::fuzzy`]): every whitespace-separated token
//!   must fuzzy-match at least one searched field.
//!
//! # Example
//!
//! ```rust
//! use rosterview::engine::filter::{apply, Accessor, Criterion};
//!
//! struct Row { name: Option<String>, status: Option<String> }
//!
//! let rows = vec![
//!     Row { name: Some("Ada".into()), status: Some("approved".into()) },
//!     Row { name: Some("Grace".into()), status: None },
//! ];
//! let name = Accessor::new(|r: &Row| r.name.as_deref());
//! let status = Accessor::new(|r: &Row| r.status.as_deref());
//!
//! let criteria = vec![
//!     Criterion::text_search("a", &[name]),
//!     Criterion::equals(status, Some("approved")),
//! ];
//! let kept = apply(&rows, &criteria);
//! assert_eq!(kept.len(), 1);
//! ```

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::fmt;
use std::sync::Arc;

/// Reads one string-valued field out of a record.
///
/// Accessors are how screens tell the engine about their record shape; the
/// engine never inspects fields by name. Cloning an accessor is cheap.
pub struct Accessor<R>(Arc<dyn Fn(&R) -> Option<&str>>);

impl<R> Accessor<R> {
    /// Wraps a field-reading closure.
    pub fn new<F>(read: F) -> Self
    where
        F: Fn(&R) -> Option<&str> + 'static,
    {
        Self(Arc::new(read))
    }

    /// Reads the field from `record`, `None` when the record has no value.
    #[must_use]
    pub fn get<'a>(&self, record: &'a R) -> Option<&'a str> {
        (self.0)(record)
    }
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accessor")
    }
}

/// A single boolean test applied to a record to decide inclusion.
pub struct Criterion<R> {
    label: String,
    matches_everything: bool,
    test: Arc<dyn Fn(&R) -> bool>,
}

impl<R: 'static> Criterion<R> {
    /// Builds a criterion from an arbitrary predicate.
    pub fn new<F>(label: impl Into<String>, test: F) -> Self
    where
        F: Fn(&R) -> bool + 'static,
    {
        Self {
            label: label.into(),
            matches_everything: false,
            test: Arc::new(test),
        }
    }

    /// A criterion every record passes.
    #[must_use]
    pub fn match_all(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            matches_everything: true,
            test: Arc::new(|_| true),
        }
    }

    /// Categorical equality against `target`.
    ///
    /// `None` and the empty string are the match-all sentinel. Otherwise a
    /// record passes only when the field is present and equal to `target`.
    #[must_use]
    pub fn equals(field: Accessor<R>, target: Option<&str>) -> Self {
        let Some(target) = target.filter(|t| !t.is_empty()) else {
            return Self::match_all("equals(*)");
        };
        let target = target.to_string();
        Self::new(format!("equals({target})"), move |record| {
            field.get(record).is_some_and(|value| value == target)
        })
    }

    /// Case-insensitive substring search across `fields`.
    ///
    /// The term is trimmed and lower-cased once. An empty term matches every
    /// record; otherwise a record passes when ANY field contains the term.
    #[must_use]
    pub fn text_search(term: &str, fields: &[Accessor<R>]) -> Self {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Self::match_all("search(*)");
        }
        let fields = fields.to_vec();
        Self::new(format!("search({needle})"), move |record| {
            fields.iter().any(|field| {
                field
                    .get(record)
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle)
            })
        })
    }

    /// Fuzzy search across `fields` using the skim scoring algorithm.
    ///
    /// The query is split on whitespace and lower-cased; every token must
    /// fuzzy-match at least one field. An empty query matches every record.
    #[must_use]
    pub fn fuzzy(query: &str, fields: &[Accessor<R>]) -> Self {
        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return Self::match_all("fuzzy(*)");
        }
        let label = format!("fuzzy({})", tokens.join(" "));
        let fields = fields.to_vec();
        let matcher = SkimMatcherV2::default();
        Self::new(label, move |record| {
            let haystacks: Vec<String> = fields
                .iter()
                .map(|field| field.get(record).unwrap_or_default().to_lowercase())
                .collect();
            tokens.iter().all(|token| {
                haystacks
                    .iter()
                    .any(|haystack| matcher.fuzzy_match(haystack, token).is_some())
            })
        })
    }
}

impl<R> Criterion<R> {
    /// Evaluates the criterion against one record.
    #[must_use]
    pub fn test(&self, record: &R) -> bool {
        (self.test)(record)
    }

    /// Returns `true` when the criterion cannot exclude anything.
    #[must_use]
    pub const fn matches_everything(&self) -> bool {
        self.matches_everything
    }

    /// Short description used in trace output.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<R> Clone for Criterion<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            matches_everything: self.matches_everything,
            test: Arc::clone(&self.test),
        }
    }
}

impl<R> fmt::Debug for Criterion<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criterion")
            .field("label", &self.label)
            .field("matches_everything", &self.matches_everything)
            .finish_non_exhaustive()
    }
}

/// Keeps the records that pass every criterion, preserving input order.
///
/// Zero criteria (or only match-all criteria) is the identity filter. The
/// input is never modified; the result borrows from it.
#[must_use]
pub fn apply<'a, R>(records: &'a [R], criteria: &[Criterion<R>]) -> Vec<&'a R> {
    positions(records, criteria).into_iter().map(|i| &records[i]).collect()
}

/// Like [`apply`], but returns the indices of the kept records.
#[must_use]
pub fn positions<R>(records: &[R], criteria: &[Criterion<R>]) -> Vec<usize> {
    let active: Vec<&Criterion<R>> = criteria
        .iter()
        .filter(|criterion| !criterion.matches_everything())
        .collect();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| active.iter().all(|criterion| criterion.test(record)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: Option<String>,
        email: Option<String>,
        status: Option<String>,
    }

    fn row(name: &str, email: Option<&str>, status: Option<&str>) -> Row {
        Row {
            name: Some(name.to_string()),
            email: email.map(String::from),
            status: status.map(String::from),
        }
    }

    fn name() -> Accessor<Row> {
        Accessor::new(|r: &Row| r.name.as_deref())
    }

    fn email() -> Accessor<Row> {
        Accessor::new(|r: &Row| r.email.as_deref())
    }

    fn status() -> Accessor<Row> {
        Accessor::new(|r: &Row| r.status.as_deref())
    }

    fn rows() -> Vec<Row> {
        vec![
            row("Ada Lovelace", Some("ada@example.com"), Some("approved")),
            row("Grace Hopper", None, Some("pending")),
            row("Alan Turing", Some("alan@example.com"), None),
        ]
    }

    fn names(kept: &[&Row]) -> Vec<String> {
        kept.iter().filter_map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_no_criteria_is_identity() {
        let rows = rows();
        let kept = apply(&rows, &[]);
        assert_eq!(kept.len(), rows.len());
        assert!(kept.iter().zip(rows.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_text_search_is_case_insensitive_any_field() {
        let rows = rows();
        let kept = apply(&rows, &[Criterion::text_search("ALAN@", &[name(), email()])]);
        assert_eq!(names(&kept), vec!["Alan Turing"]);

        let kept = apply(&rows, &[Criterion::text_search("hopper", &[name(), email()])]);
        assert_eq!(names(&kept), vec!["Grace Hopper"]);
    }

    #[test]
    fn test_empty_search_term_matches_all() {
        let rows = rows();
        let criterion = Criterion::text_search("   ", &[name()]);
        assert!(criterion.matches_everything());
        assert_eq!(apply(&rows, &[criterion]).len(), 3);
    }

    #[test]
    fn test_missing_field_is_empty_for_search() {
        let rows = rows();
        let kept = apply(&rows, &[Criterion::text_search("example", &[email()])]);
        assert_eq!(names(&kept), vec!["Ada Lovelace", "Alan Turing"]);
    }

    #[test]
    fn test_equals_excludes_missing_field() {
        let rows = rows();
        let kept = apply(&rows, &[Criterion::equals(status(), Some("pending"))]);
        assert_eq!(names(&kept), vec!["Grace Hopper"]);
    }

    #[test]
    fn test_equals_sentinel_matches_missing_field() {
        let rows = rows();
        assert_eq!(apply(&rows, &[Criterion::equals(status(), None)]).len(), 3);
        assert_eq!(apply(&rows, &[Criterion::equals(status(), Some(""))]).len(), 3);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let rows = rows();
        let criteria = vec![
            Criterion::text_search("a", &[name()]),
            Criterion::equals(status(), Some("approved")),
        ];
        assert_eq!(names(&apply(&rows, &criteria)), vec!["Ada Lovelace"]);
    }

    #[test]
    fn test_fuzzy_requires_every_token() {
        let rows = rows();
        let kept = apply(&rows, &[Criterion::fuzzy("grc hpr", &[name()])]);
        assert_eq!(names(&kept), vec!["Grace Hopper"]);

        let kept = apply(&rows, &[Criterion::fuzzy("grc zzz", &[name()])]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_custom_predicate() {
        let rows = rows();
        let has_email = Criterion::new("has_email", |r: &Row| r.email.is_some());
        assert_eq!(apply(&rows, &[has_email]).len(), 2);
    }

    #[test]
    fn test_positions_index_into_input() {
        let rows = rows();
        assert_eq!(positions(&rows, &[Criterion::text_search("example", &[email()])]), vec![0, 2]);
        assert_eq!(positions(&rows, &[]), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let rows = rows();
        let before = rows.clone();
        let _ = apply(&rows, &[Criterion::equals(status(), Some("approved"))]);
        assert_eq!(rows, before);
    }
}
