//! Page slicing and page bound arithmetic.

use serde::{Deserialize, Serialize};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page and page size of one table.
///
/// Both fields are 1-based counts and never zero once constructed through
/// [`PaginationState::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl PaginationState {
    /// Creates a state, raising zero values to 1.
    #[must_use]
    pub fn new(current_page: usize, items_per_page: usize) -> Self {
        Self {
            current_page: current_page.max(1),
            items_per_page: items_per_page.max(1),
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Normalizes a user-supplied page size: anything below 1 becomes 1.
///
/// # Examples
///
/// ```
/// use rosterview::engine::paginate::normalize_page_size;
///
/// assert_eq!(normalize_page_size(25), 25);
/// assert_eq!(normalize_page_size(0), 1);
/// assert_eq!(normalize_page_size(-3), 1);
/// ```
#[must_use]
pub fn normalize_page_size(requested: i64) -> usize {
    usize::try_from(requested).unwrap_or(0).max(1)
}

/// Number of pages needed for `count` items: `max(1, ceil(count / per_page))`.
#[must_use]
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    count.div_ceil(items_per_page.max(1)).max(1)
}

/// Clamps `page` into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// One page of results plus the numbers needed to describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on the current page.
    pub items: Vec<T>,
    pub total_pages: usize,
    /// Zero-based offset of the first item on the page.
    pub start_index: usize,
    /// Exclusive end offset, `start_index + items_per_page`. Not clamped to
    /// the collection length.
    pub end_index: usize,
    /// 1-based number of the first displayed item, 0 when nothing is shown.
    pub start_item: usize,
    /// 1-based number of the last displayed item, 0 when nothing is shown.
    pub end_item: usize,
}

/// Slices `records` into the page described by `state`.
///
/// Never panics: a page past the end produces an empty slice rather than an
/// out-of-range index, and zero values in `state` are treated as 1.
///
/// # Examples
///
/// ```
/// use rosterview::engine::paginate::{paginate, PaginationState};
///
/// let records: Vec<u32> = (1..=12).collect();
/// let page = paginate(&records, PaginationState::new(2, 10));
/// assert_eq!(page.items, vec![11, 12]);
/// assert_eq!((page.start_item, page.end_item), (11, 12));
/// assert_eq!(page.total_pages, 2);
/// ```
#[must_use]
pub fn paginate<T: Clone>(records: &[T], state: PaginationState) -> Page<T> {
    let per_page = state.items_per_page.max(1);
    let current = state.current_page.max(1);
    let len = records.len();

    let start_index = (current - 1).saturating_mul(per_page);
    let end_index = start_index.saturating_add(per_page);

    let slice_start = start_index.min(len);
    let slice_end = end_index.min(len);
    let items = records[slice_start..slice_end].to_vec();

    let (start_item, end_item) = if items.is_empty() {
        (0, 0)
    } else {
        (start_index + 1, slice_end)
    };

    Page {
        items,
        total_pages: total_pages(len, per_page),
        start_index,
        end_index,
        start_item,
        end_item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let records: Vec<u32> = (1..=12).collect();
        let page = paginate(&records, PaginationState::new(1, 10));
        assert_eq!(page.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(page.start_index, 0);
        assert_eq!(page.end_index, 10);
        assert_eq!(page.start_item, 1);
        assert_eq!(page.end_item, 10);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_last_partial_page_keeps_unclamped_end_index() {
        let records: Vec<u32> = (1..=12).collect();
        let page = paginate(&records, PaginationState::new(2, 10));
        assert_eq!(page.end_index, 20);
        assert_eq!(page.end_item, 12);
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<u32> = vec![];
        let page = paginate(&records, PaginationState::new(1, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!((page.start_item, page.end_item), (0, 0));
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let records: Vec<u32> = (1..=5).collect();
        let page = paginate(&records, PaginationState { current_page: 9, items_per_page: 2 });
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert_eq!((page.start_item, page.end_item), (0, 0));
    }

    #[test]
    fn test_zero_values_are_normalized() {
        let records: Vec<u32> = (1..=3).collect();
        let page = paginate(&records, PaginationState { current_page: 0, items_per_page: 0 });
        assert_eq!(page.items, vec![1]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_total_pages_formula() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(7, 4), 4);
        assert_eq!(clamp_page(3, 0), 1);
    }
}
