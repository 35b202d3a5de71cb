//! Rosterview: a client-side engine for filtered, sorted, paginated tables.
//!
//! Rosterview powers the list screens of a recruitment platform (assistants,
//! job applications, followed candidates and companies, a job seeker's
//! applied and saved jobs):
//! - Free-text search across several fields plus categorical filter axes
//! - Newest/oldest and A→Z/Z→A ordering with stable ties
//! - 1-based pagination with clamping and a fixed-width page strip
//! - Optimistic removal with rollback when the remote side fails
//! - An application-scoped image preview hub

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation (host application, not this crate)    │  ← Widgets, fetches
//! └─────────────────────────────────────────────────────┘
//!                        │ Event            ▲ TableView + Actions
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← View state
//! │  - Event handling                                   │  ← Page reset rules
//! │  - Optimistic mutation ledger                       │
//! │  - Preview hub                                      │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Engine        │   │ Screens       │   │ UI            │
//! │ (engine/)     │   │ (screens)     │   │ (ui/)         │
//! │ - Filter      │   │ - Accessors   │   │ - View model  │
//! │ - Sort        │   │ - Axes        │   │ - Page strip  │
//! │ - Paginate    │   │ - JSON decode │   │               │
//! │ - Window      │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Record types, timestamps, error types            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: View state coordinator with event/action model
//! - [`domain`]: Records, timestamp parsing and errors
//! - [`engine`]: Pure filter, sort, paginate and window stages
//! - [`screens`]: Preset screen definitions and collection decoding
//! - [`ui`]: Table view model and text page strip
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! page_size = 25
//! window_size = 5
//! page_size_options = [10, 25, 50, 100]
//! default_sort = "newest"
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rosterview::domain::Assistant;
//! use rosterview::{handle_event, initialize, screens, Config, Event, SortMode};
//!
//! let mut view = initialize(&Config::default(), screens::assistants());
//!
//! let records: Vec<Assistant> = screens::decode_collection(
//!     r#"[{"id": "1", "name": "Ada", "createdAt": "2024-03-01"},
//!         {"id": "2", "name": "Bob", "createdAt": "2024-04-01"}]"#,
//! )?;
//! handle_event(&mut view, &Event::CollectionLoaded(records))?;
//! handle_event(&mut view, &Event::SetSort(SortMode::AToZ))?;
//!
//! let table = view.view();
//! assert_eq!(table.page_items[0].id, "1");
//! assert_eq!(table.range_label(), "Showing 1–2 of 2");
//! # Ok::<(), rosterview::RosterError>(())
//! ```

pub mod app;
pub mod domain;
pub mod engine;
pub mod screens;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, FilterSelection, PreviewHub, Screen, ViewStateCoordinator};
pub use domain::{Result, RosterError};
pub use engine::{PageToken, SortMode};
pub use ui::TableView;

use engine::paginate::DEFAULT_PAGE_SIZE;
use engine::window::{DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Table configuration shared by every screen.
///
/// Loaded from a string map handed over by the host ([`Config::from_map`])
/// or from a TOML file ([`Config::from_file`]). Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial rows per page. Default: 10
    pub page_size: usize,

    /// Maximum number of numbered buttons in the page strip, 1 to 99.
    /// Default: 5
    pub window_size: usize,

    /// Choices offered by the page size dropdown. Default: `[10, 25, 50, 100]`
    ///
    /// `page_size` need not be listed; the dropdown always offers the size in
    /// use (see [`ViewStateCoordinator::page_size_options`]).
    pub page_size_options: Vec<usize>,

    /// Sort mode on first load and after a tab switch. Default: `newest`
    pub default_sort: SortMode,

    /// Level for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_sort: SortMode::default(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// # Parsing Rules
    ///
    /// - `page_size`: positive integer (falls back to default)
    /// - `window_size`: integer from 1 to 99 (falls back to default)
    /// - `page_size_options`: comma-separated positive integers (falls back to
    ///   default when none parse)
    /// - `default_sort`: `newest`, `oldest`, `a-z` or `z-a` (falls back to `newest`)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use rosterview::{Config, SortMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "25".to_string());
    /// map.insert("page_size_options".to_string(), "25, 50".to_string());
    /// map.insert("default_sort".to_string(), "a-z".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 25);
    /// assert_eq!(config.page_size_options, vec![25, 50]);
    /// assert_eq!(config.default_sort, SortMode::AToZ);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let in_range = |key: &str, max: usize, fallback: usize| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|n| (1..=max).contains(n))
                .unwrap_or(fallback)
        };

        let page_size_options = config
            .get("page_size_options")
            .map(|s| {
                s.split(',')
                    .filter_map(|n| n.trim().parse::<usize>().ok())
                    .filter(|n| *n > 0)
                    .collect::<Vec<_>>()
            })
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.page_size_options);

        let default_sort = config
            .get("default_sort")
            .and_then(|s| {
                s.parse::<SortMode>()
                    .map_err(|e| tracing::warn!(error = %e, "ignoring default_sort"))
                    .ok()
            })
            .unwrap_or(defaults.default_sort);

        Self {
            page_size: in_range("page_size", usize::MAX, defaults.page_size),
            window_size: in_range("window_size", MAX_WINDOW_SIZE, defaults.window_size),
            page_size_options,
            default_sort,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// - [`RosterError::Toml`] if the text is not valid TOML or a value has
    ///   the wrong type
    /// - [`RosterError::Config`] if a size is zero, `window_size` exceeds 99
    ///   or no page size options are given
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading configuration file");
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(RosterError::Config("page_size must be at least 1".to_string()));
        }
        if !(1..=MAX_WINDOW_SIZE).contains(&self.window_size) {
            return Err(RosterError::Config(format!(
                "window_size must be between 1 and {MAX_WINDOW_SIZE}"
            )));
        }
        if self.page_size_options.is_empty() || self.page_size_options.contains(&0) {
            return Err(RosterError::Config(
                "page_size_options must list positive sizes".to_string(),
            ));
        }
        Ok(())
    }
}

/// Creates the view state for one screen.
///
/// The coordinator starts with an empty collection on page 1, sorted by
/// `config.default_sort`, showing `config.page_size` rows per page. The host
/// fetches the collection and feeds it in with
/// [`Event::CollectionLoaded`](app::Event::CollectionLoaded).
///
/// # Example
///
/// ```rust
/// use rosterview::{initialize, screens, Config, SortMode};
///
/// let config = Config {
///     page_size: 25,
///     default_sort: SortMode::ZToA,
///     ..Default::default()
/// };
///
/// let view = initialize(&config, screens::my_jobs());
/// assert_eq!(view.items_per_page(), 25);
/// assert_eq!(view.sort_mode(), SortMode::ZToA);
/// ```
pub fn initialize<R: Clone + 'static>(config: &Config, screen: Screen<R>) -> ViewStateCoordinator<R> {
    tracing::debug!(screen = %screen.name(), "initializing rosterview screen");
    ViewStateCoordinator::new(screen, config)
}
