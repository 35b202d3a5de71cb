//! Named sort modes and the stable sort stage of the pipeline.
//!
//! Screens offer four sort orders: newest and oldest compare a date field,
//! A-Z and Z-A compare a text field. Sorting is always stable, so records the
//! comparator considers equal keep the order the filter stage produced.
//! Keys are computed once per record (`sort_by_cached_key`) because date
//! parsing and collation keys are not free.

use super::filter::Accessor;
use crate::domain::timestamp;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort order selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Date field, most recent first.
    #[default]
    #[serde(rename = "newest")]
    Newest,
    /// Date field, earliest first.
    #[serde(rename = "oldest")]
    Oldest,
    /// Text field, collated ascending.
    #[serde(rename = "a-z")]
    AToZ,
    /// Text field, collated descending.
    #[serde(rename = "z-a")]
    ZToA,
}

impl SortMode {
    /// All modes in the order they appear in a sort dropdown.
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::AToZ, Self::ZToA];

    /// The wire name of the mode (`newest`, `oldest`, `a-z`, `z-a`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::AToZ => "a-z",
            Self::ZToA => "z-a",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "a-z" | "az" => Ok(Self::AToZ),
            "z-a" | "za" => Ok(Self::ZToA),
            other => Err(format!("unknown sort mode: {other}")),
        }
    }
}

/// The fields a screen sorts by.
#[derive(Debug)]
pub struct SortAccessors<R> {
    /// Date-valued field used by [`SortMode::Newest`] and [`SortMode::Oldest`].
    pub date: Accessor<R>,
    /// Text-valued field used by [`SortMode::AToZ`] and [`SortMode::ZToA`].
    pub text: Accessor<R>,
}

impl<R> Clone for SortAccessors<R> {
    fn clone(&self) -> Self {
        Self {
            date: self.date.clone(),
            text: self.text.clone(),
        }
    }
}

/// Collation key approximating locale-aware string ordering.
///
/// Three levels, compared in order:
/// - primary: the text with accents stripped and lowercased, so `Émile`
///   sorts next to `Emile` rather than after `z`
/// - secondary: the lowercased text with accents kept, unaccented first
/// - tertiary: per-character case, lower-case before upper-case
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: Vec<bool>,
}

impl CollationKey {
    /// Builds the key for `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let decomposed: String = text.nfd().collect();
        Self {
            primary: decomposed
                .chars()
                .filter(|c| !is_combining_mark(*c))
                .flat_map(char::to_lowercase)
                .collect(),
            secondary: decomposed.to_lowercase(),
            tertiary: text.chars().map(char::is_uppercase).collect(),
        }
    }
}

/// Returns a new sequence ordered by `mode`.
///
/// Missing or unparsable dates rank as the earliest instant, missing text as
/// the empty string. The input is left untouched.
#[must_use]
pub fn apply<'a, R>(records: &[&'a R], mode: SortMode, accessors: &SortAccessors<R>) -> Vec<&'a R> {
    let mut sorted = records.to_vec();
    sort_in_place(&mut sorted, mode, accessors, |record| *record);
    sorted
}

/// Orders `positions` (indices into `records`) by `mode`.
///
/// Same ordering as [`apply`]; used where the caller keeps indices instead of
/// references.
pub fn order<R>(records: &[R], positions: &mut [usize], mode: SortMode, accessors: &SortAccessors<R>) {
    sort_in_place(positions, mode, accessors, |&i| &records[i]);
}

fn sort_in_place<'r, T, R: 'r>(
    items: &mut [T],
    mode: SortMode,
    accessors: &SortAccessors<R>,
    record: impl Fn(&T) -> &'r R,
) {
    let date = |item: &T| timestamp::sort_key(accessors.date.get(record(item)));
    let text = |item: &T| CollationKey::new(accessors.text.get(record(item)).unwrap_or_default());

    match mode {
        SortMode::Newest => items.sort_by_cached_key(|item| Reverse(date(item))),
        SortMode::Oldest => items.sort_by_cached_key(date),
        SortMode::AToZ => items.sort_by_cached_key(text),
        SortMode::ZToA => items.sort_by_cached_key(|item| Reverse(text(item))),
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn mode() -> impl Strategy<Value = SortMode> {
        prop_oneof![
            Just(SortMode::Newest),
            Just(SortMode::Oldest),
            Just(SortMode::AToZ),
            Just(SortMode::ZToA),
        ]
    }

    proptest! {
        /// Property: sorting twice with the same mode equals sorting once.
        #[test]
        fn sort_is_idempotent(
            values in proptest::collection::vec(("[a-cA-C]{0,3}", "(2024-0[1-3]-0[1-3])?"), 0..40),
            mode in mode()
        ) {
            let accessors = SortAccessors {
                date: Accessor::new(|r: &(String, String)| Some(r.1.as_str())),
                text: Accessor::new(|r: &(String, String)| Some(r.0.as_str())),
            };
            let refs: Vec<&(String, String)> = values.iter().collect();
            let once = apply(&refs, mode, &accessors);
            let twice = apply(&once, mode, &accessors);
            prop_assert_eq!(once, twice);
        }

        /// Property: records with equal keys keep their input order.
        #[test]
        fn sort_is_stable(keys in proptest::collection::vec(0u8..4, 0..50)) {
            let values: Vec<(usize, String)> = keys
                .iter()
                .enumerate()
                .map(|(i, k)| (i, format!("2024-01-0{}", k + 1)))
                .collect();
            let accessors = SortAccessors {
                date: Accessor::new(|r: &(usize, String)| Some(r.1.as_str())),
                text: Accessor::new(|r: &(usize, String)| Some(r.1.as_str())),
            };
            let refs: Vec<&(usize, String)> = values.iter().collect();
            let sorted = apply(&refs, SortMode::Newest, &accessors);
            for pair in sorted.windows(2) {
                if pair[0].1 == pair[1].1 {
                    prop_assert!(pair[0].0 < pair[1].0);
                }
            }
        }
    }
}
