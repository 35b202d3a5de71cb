//! View model types representing renderable table state.
//!
//! This module defines the immutable output of a
//! [`ViewStateCoordinator`](crate::app::ViewStateCoordinator): the rows of the
//! current page, the numbers behind the "Showing X–Y of Z" label and the
//! pagination strip tokens. View models contain no business logic, only
//! display-ready data.
//!
//! # Example
//!
//! ```rust
//! use rosterview::engine::PageToken;
//! use rosterview::ui::TableView;
//!
//! let view = TableView {
//!     page_items: vec!["ada", "grace"],
//!     start_item: 11,
//!     end_item: 12,
//!     total_filtered: 12,
//!     current_page: 2,
//!     total_pages: 2,
//!     page_window: vec![PageToken::Page(1), PageToken::Page(2)],
//!     items_per_page: 10,
//!     page_size_options: vec![10, 25],
//! };
//! assert_eq!(view.range_label(), "Showing 11–12 of 12");
//! ```

use crate::engine::window::PageToken;
use serde::Serialize;

/// Complete table view model for one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView<R> {
    /// Records on the current page, in display order.
    pub page_items: Vec<R>,

    /// 1-based number of the first row shown, 0 when the page is empty.
    pub start_item: usize,

    /// 1-based number of the last row shown, 0 when the page is empty.
    pub end_item: usize,

    /// Number of records passing the current filter.
    pub total_filtered: usize,

    /// 1-based page being shown.
    pub current_page: usize,

    /// Always at least 1, even with no results.
    pub total_pages: usize,

    /// Tokens for the pagination strip.
    pub page_window: Vec<PageToken>,

    /// Rows per page, the selected entry of the page size dropdown.
    pub items_per_page: usize,

    /// Entries of the page size dropdown, ascending. Always contains
    /// `items_per_page`.
    pub page_size_options: Vec<usize>,
}

impl<R> TableView<R> {
    /// Text for the "showing" label under the table.
    #[must_use]
    pub fn range_label(&self) -> String {
        format!(
            "Showing {}–{} of {}",
            self.start_item, self.end_item, self.total_filtered
        )
    }

    /// Returns `true` when there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.page_items.is_empty()
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
