//! View state coordination and view model computation.
//!
//! This module defines [`ViewStateCoordinator`], the single source of truth for
//! one list screen: the record collection, the filter selection, the sort
//! mode and the pagination state. Every mutation goes through a setter that
//! re-establishes the page invariants before returning.
//!
//! # Invariants
//!
//! After every setter:
//! - `total_pages = max(1, ceil(filtered_count / items_per_page))`
//! - `1 <= current_page <= total_pages`
//! - changing the filter, the sort mode or the page size puts the user back
//!   on page 1
//! - replacing the collection keeps the current page when it is still valid
//!   and clamps it otherwise
//!
//! # Memoization
//!
//! The filtered and sorted sequence is cached as indices into the collection
//! and only rebuilt when the selection, the sort mode or the collection
//! changes. Page and page-size changes slice the cached indices directly;
//! only the records on the visible page are cloned into the view.
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::ViewStateCoordinator;
//! use rosterview::screens;
//! use rosterview::Config;
//!
//! let mut view = ViewStateCoordinator::new(screens::assistants(), &Config::default());
//! view.replace_collection(vec![]);
//! view.set_search("ada");
//! let table = view.view();
//! assert_eq!(table.total_pages, 1);
//! assert_eq!(table.current_page, 1);
//! ```

use super::optimistic::{MutationId, MutationLedger, PendingMutation};
use super::screen::Screen;
use super::selection::FilterSelection;
use crate::domain::error::{Result, RosterError};
use crate::engine::paginate::{self, PaginationState};
use crate::engine::sort::SortMode;
use crate::engine::{filter, sort, window};
use crate::ui::viewmodel::TableView;
use crate::Config;

/// Owns filter, sort and pagination state for one screen.
#[derive(Debug, Clone)]
pub struct ViewStateCoordinator<R> {
    screen: Screen<R>,

    /// Collection as supplied by the fetch layer (or optimistically edited).
    records: Vec<R>,

    /// Indices into `records`, filtered and sorted, rebuilt by `recompute()`.
    visible: Vec<usize>,

    selection: FilterSelection,
    sort_mode: SortMode,
    default_sort: SortMode,
    pagination: PaginationState,
    window_size: usize,
    page_size_options: Vec<usize>,

    /// Name of the active tab (applied/saved, followers/following).
    context: Option<String>,

    mutations: MutationLedger<R>,

    /// Incremented every time the filter and sort stages run.
    revision: u64,
}

impl<R: Clone + 'static> ViewStateCoordinator<R> {
    /// Creates a coordinator with an empty collection.
    ///
    /// Page size, window size and initial sort mode come from `config`.
    #[must_use]
    pub fn new(screen: Screen<R>, config: &Config) -> Self {
        tracing::debug!(
            screen = %screen.name(),
            page_size = config.page_size,
            sort_mode = %config.default_sort,
            "creating view state"
        );

        Self {
            screen,
            records: Vec::new(),
            visible: Vec::new(),
            selection: FilterSelection::default(),
            sort_mode: config.default_sort,
            default_sort: config.default_sort,
            pagination: PaginationState::new(1, config.page_size),
            window_size: config.window_size.clamp(1, window::MAX_WINDOW_SIZE),
            page_size_options: config.page_size_options.clone(),
            context: None,
            mutations: MutationLedger::default(),
            revision: 0,
        }
    }

    /// Sets the value of a categorical filter axis and returns to page 1.
    ///
    /// `None` or an empty value selects "All" for that axis.
    pub fn set_filter(&mut self, axis: &str, value: Option<&str>) {
        if !self.screen.has_axis(axis) {
            tracing::warn!(screen = %self.screen.name(), axis = %axis, "filter set on undeclared axis");
        }
        if self.selection.set(axis, value) {
            self.recompute();
        }
        self.reset_page();
    }

    /// Replaces the search text and returns to page 1.
    pub fn set_search(&mut self, term: &str) {
        tracing::trace!(term = %term, "search updated");
        if self.selection.set_search(term) {
            self.recompute();
        }
        self.reset_page();
    }

    /// Clears the search text and every axis, returning to page 1.
    pub fn clear_filters(&mut self) {
        if !self.selection.is_empty() || !self.selection.search.is_empty() {
            self.selection.clear();
            self.recompute();
        }
        self.reset_page();
    }

    /// Changes the sort mode and returns to page 1.
    pub fn set_sort(&mut self, mode: SortMode) {
        if self.sort_mode != mode {
            self.sort_mode = mode;
            self.recompute();
        }
        self.reset_page();
    }

    /// Changes the page size and returns to page 1.
    ///
    /// Values below 1 are raised to 1. The cached filter and sort result is
    /// reused.
    pub fn set_items_per_page(&mut self, requested: i64) {
        let per_page = paginate::normalize_page_size(requested);
        if i64::try_from(per_page).ok() != Some(requested) {
            tracing::warn!(requested, normalized = per_page, "page size normalized");
        }
        self.pagination.items_per_page = per_page;
        self.reset_page();
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    ///
    /// Returns the page actually selected.
    pub fn set_current_page(&mut self, page: i64) -> usize {
        let requested = usize::try_from(page).unwrap_or(0);
        let clamped = paginate::clamp_page(requested, self.total_pages());
        if i64::try_from(clamped).ok() != Some(page) {
            tracing::warn!(requested = page, clamped, "page out of range, clamped");
        }
        self.pagination.current_page = clamped;
        clamped
    }

    /// Moves one page forward, staying on the last page.
    pub fn next_page(&mut self) -> usize {
        let next = (self.pagination.current_page + 1).min(self.total_pages());
        self.pagination.current_page = next;
        next
    }

    /// Moves one page back, staying on the first page.
    pub fn previous_page(&mut self) -> usize {
        let previous = self.pagination.current_page.saturating_sub(1).max(1);
        self.pagination.current_page = previous;
        previous
    }

    /// Installs a freshly fetched collection.
    ///
    /// The filter, sort mode and current page are kept; the page is clamped if
    /// the collection shrank below it. A pending optimistic mutation is
    /// dropped: its snapshot predates the fetched data, and rolling back to it
    /// would discard the fresher collection.
    pub fn replace_collection(&mut self, records: Vec<R>) {
        tracing::debug!(
            screen = %self.screen.name(),
            previous = self.records.len(),
            incoming = records.len(),
            "collection replaced"
        );
        if let Some(dropped) = self.mutations.discard() {
            tracing::warn!(mutation = %dropped, "pending mutation dropped, superseded by fetched collection");
        }
        self.records = records;
        self.recompute();
        self.clamp_page();
    }

    /// Switches to another tab of the same screen.
    ///
    /// Clears the filter, restores the default sort mode, returns to page 1
    /// and empties the collection until the new tab's data arrives. The page
    /// size is kept. A pending optimistic mutation is dropped, since its
    /// snapshot belongs to the previous tab.
    pub fn switch_context(&mut self, context: impl Into<String>) {
        let context = context.into();
        tracing::debug!(
            screen = %self.screen.name(),
            from = ?self.context,
            to = %context,
            "switching context"
        );

        if let Some(dropped) = self.mutations.discard() {
            tracing::warn!(mutation = %dropped, "pending mutation dropped on context switch");
        }

        self.context = Some(context);
        self.selection.clear();
        self.sort_mode = self.default_sort;
        self.records.clear();
        self.recompute();
        self.reset_page();
    }

    /// Applies a local transform to the collection and remembers how to undo it.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::MutationInFlight`] if another mutation has not
    /// been confirmed or rolled back yet.
    pub fn begin_optimistic<F>(&mut self, label: impl Into<String>, transform: F) -> Result<MutationId>
    where
        F: FnOnce(&mut Vec<R>),
    {
        let label = label.into();
        let id = self.mutations.begin(label.as_str(), &self.records)?;

        transform(&mut self.records);
        tracing::debug!(mutation = %id, label = %label, remaining = self.records.len(), "optimistic update applied");

        self.recompute();
        self.clamp_page();
        Ok(id)
    }

    /// Optimistically removes the record whose key is `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownRecord`] if no record has that key, or
    /// [`RosterError::MutationInFlight`] if another mutation is pending.
    pub fn remove_optimistic(&mut self, key: &str) -> Result<MutationId> {
        let field = self.screen.key().clone();
        if !self.records.iter().any(|record| field.get(record) == Some(key)) {
            return Err(RosterError::UnknownRecord(key.to_string()));
        }

        self.begin_optimistic(format!("remove({key})"), |records| {
            records.retain(|record| field.get(record) != Some(key));
        })
    }

    /// Restores the collection captured when mutation `id` began.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownMutation`] if `id` is not pending.
    pub fn rollback(&mut self, id: MutationId) -> Result<()> {
        let PendingMutation { label, snapshot, .. } = self.mutations.take(id)?;
        tracing::debug!(mutation = %id, label = %label, "rolling back optimistic update");
        self.records = snapshot;
        self.recompute();
        self.clamp_page();
        Ok(())
    }

    /// Marks mutation `id` as accepted remotely, dropping its snapshot.
    ///
    /// The optimistic collection stays in place until the refetched one is
    /// installed with [`replace_collection`](Self::replace_collection).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownMutation`] if `id` is not pending.
    pub fn confirm(&mut self, id: MutationId) -> Result<()> {
        let pending = self.mutations.take(id)?;
        tracing::debug!(mutation = %id, label = %pending.label, "optimistic update confirmed");
        Ok(())
    }

    /// Confirms mutation `id` and installs the authoritative collection.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownMutation`] if `id` is not pending.
    pub fn reconcile(&mut self, id: MutationId, fresh: Vec<R>) -> Result<()> {
        self.confirm(id)?;
        self.replace_collection(fresh);
        Ok(())
    }

    /// Computes the renderable table for the current page.
    #[must_use]
    pub fn view(&self) -> TableView<R> {
        let page = paginate::paginate(&self.visible, self.pagination);

        TableView {
            page_items: page
                .items
                .iter()
                .filter_map(|&i| self.records.get(i).cloned())
                .collect(),
            start_item: page.start_item,
            end_item: page.end_item,
            total_filtered: self.visible.len(),
            current_page: self.pagination.current_page,
            total_pages: page.total_pages,
            page_window: window::window(self.pagination.current_page, page.total_pages, self.window_size),
            items_per_page: self.pagination.items_per_page,
            page_size_options: self.page_size_options(),
        }
    }

    /// Runs the filter and sort stages over the collection.
    fn recompute(&mut self) {
        let _span = tracing::debug_span!("recompute",
            screen = %self.screen.name(),
            total_records = self.records.len(),
            sort_mode = %self.sort_mode
        ).entered();

        let criteria = self.screen.criteria(&self.selection);
        let mut positions = filter::positions(&self.records, &criteria);
        sort::order(&self.records, &mut positions, self.sort_mode, self.screen.sort_accessors());
        self.visible = positions;
        self.revision += 1;

        tracing::debug!(filtered_count = self.visible.len(), "pipeline recomputed");
    }
}

impl<R> ViewStateCoordinator<R> {
    /// Page count for the current filter, at least 1.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.visible.len(), self.pagination.items_per_page)
    }

    /// 1-based current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    /// Rows per page.
    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.pagination.items_per_page
    }

    /// Active sort mode.
    #[must_use]
    pub const fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Current search text and axis values.
    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Active tab, `None` before the first switch.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// The screen definition this coordinator was built with.
    #[must_use]
    pub const fn screen(&self) -> &Screen<R> {
        &self.screen
    }

    /// The unfiltered collection.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Choices for the page size dropdown, ascending, including the current
    /// page size even when it was set to a value outside the configured list.
    #[must_use]
    pub fn page_size_options(&self) -> Vec<usize> {
        let mut options = self.page_size_options.clone();
        options.push(self.pagination.items_per_page);
        options.sort_unstable();
        options.dedup();
        options
    }

    /// Number of records passing the current filter.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.visible.len()
    }

    /// Id of the in-flight optimistic mutation, if any.
    #[must_use]
    pub fn pending_mutation(&self) -> Option<MutationId> {
        self.mutations.pending().map(|pending| pending.id)
    }

    /// Number of times the filter and sort stages have run.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn reset_page(&mut self) {
        self.pagination.current_page = 1;
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        let clamped = paginate::clamp_page(self.pagination.current_page, total);
        if clamped != self.pagination.current_page {
            tracing::warn!(
                previous = self.pagination.current_page,
                clamped,
                total_pages = total,
                "current page out of range after collection change"
            );
            self.pagination.current_page = clamped;
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::engine::filter::Accessor;
    use crate::engine::sort::SortAccessors;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Search(String),
        Filter(Option<String>),
        Sort(SortMode),
        PageSize(i64),
        Page(i64),
        Next,
        Replace(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-c]{0,2}".prop_map(Op::Search),
            proptest::option::of("[ab]").prop_map(Op::Filter),
            prop_oneof![
                Just(SortMode::Newest),
                Just(SortMode::Oldest),
                Just(SortMode::AToZ),
                Just(SortMode::ZToA),
            ]
            .prop_map(Op::Sort),
            (-3i64..30).prop_map(Op::PageSize),
            (-5i64..50).prop_map(Op::Page),
            Just(Op::Next),
            (0usize..120).prop_map(Op::Replace),
        ]
    }

    fn screen() -> Screen<(String, String)> {
        Screen::new(
            "pairs",
            Accessor::new(|r: &(String, String)| Some(r.0.as_str())),
            SortAccessors {
                date: Accessor::new(|_: &(String, String)| None),
                text: Accessor::new(|r: &(String, String)| Some(r.0.as_str())),
            },
        )
        .search_in(Accessor::new(|r: &(String, String)| Some(r.0.as_str())))
        .axis("kind", Accessor::new(|r: &(String, String)| Some(r.1.as_str())))
    }

    fn collection(n: usize) -> Vec<(String, String)> {
        let letters = ["a", "b", "c"];
        (0..n)
            .map(|i| (format!("{}{}", letters[i % 3], letters[(i / 3) % 3]), letters[i % 2].to_string()))
            .collect()
    }

    proptest! {
        /// Property: the current page is always within [1, total_pages], and
        /// filter/sort/page-size changes always land on page 1.
        #[test]
        fn page_always_in_bounds(initial in 0usize..120, ops in proptest::collection::vec(op(), 0..25)) {
            let mut view = ViewStateCoordinator::new(screen(), &Config::default());
            view.replace_collection(collection(initial));

            for op in ops {
                let resets = matches!(op, Op::Search(_) | Op::Filter(_) | Op::Sort(_) | Op::PageSize(_));
                match op {
                    Op::Search(term) => view.set_search(&term),
                    Op::Filter(value) => view.set_filter("kind", value.as_deref()),
                    Op::Sort(mode) => view.set_sort(mode),
                    Op::PageSize(n) => view.set_items_per_page(n),
                    Op::Page(p) => { view.set_current_page(p); }
                    Op::Next => { view.next_page(); }
                    Op::Replace(n) => view.replace_collection(collection(n)),
                }

                if resets {
                    prop_assert_eq!(view.current_page(), 1);
                }
                let table = view.view();
                prop_assert!(table.current_page >= 1);
                prop_assert!(table.current_page <= table.total_pages);
                prop_assert_eq!(
                    table.total_pages,
                    std::cmp::max(1, table.total_filtered.div_ceil(view.items_per_page()))
                );
            }
        }
    }
}
