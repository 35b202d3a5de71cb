//! Windowed page-number strip with ellipsis collapsing.
//!
//! Pagination controls show a bounded run of page numbers centered on the
//! current page, plus the first and last page with an ellipsis standing in for
//! any gap:
//!
//! ```text
//! total = 20, current = 10:   1 … 8 9 10 11 12 … 20
//! total = 20, current = 2:    1 2 3 4 5 … 20
//! total = 3,  current = 2:    1 2 3
//! ```

use serde::{Deserialize, Serialize};

/// Default number of consecutive page numbers in the window.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Largest window size accepted from configuration.
pub const MAX_WINDOW_SIZE: usize = 99;

/// One entry of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageToken {
    /// A clickable page number.
    Page(usize),
    /// A collapsed run of pages.
    Ellipsis,
}

impl PageToken {
    /// The page number, `None` for an ellipsis.
    #[must_use]
    pub const fn page(self) -> Option<usize> {
        match self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }
}

/// Computes the page tokens for a pagination strip.
///
/// The window holds `size` consecutive pages centered on `current_page`,
/// shifted back against the far boundary when it would run past it. Page 1
/// and `total_pages` are always reachable; gaps of more than one page are
/// shown as [`PageToken::Ellipsis`].
///
/// Inputs are normalized: `total_pages` and `size` below 1 count as 1 and
/// `current_page` is clamped into `[1, total_pages]`.
///
/// # Examples
///
/// ```
/// use rosterview::engine::window::{window, PageToken::{Ellipsis, Page}};
///
/// assert_eq!(
///     window(10, 20, 5),
///     vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
/// );
/// assert_eq!(window(1, 1, 5), vec![Page(1)]);
/// ```
#[must_use]
pub fn window(current_page: usize, total_pages: usize, size: usize) -> Vec<PageToken> {
    let total = total_pages.max(1);
    let size = size.max(1);
    let current = current_page.clamp(1, total);

    let half = size / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = start.saturating_add(size - 1).min(total);

    if end - start + 1 < size {
        start = end.saturating_sub(size - 1).max(1);
    }

    let mut tokens = Vec::with_capacity((end - start).saturating_add(5));

    if start > 1 {
        tokens.push(PageToken::Page(1));
        if start > 2 {
            tokens.push(PageToken::Ellipsis);
        }
    }

    tokens.extend((start..=end).map(PageToken::Page));

    if end < total {
        if end < total - 1 {
            tokens.push(PageToken::Ellipsis);
        }
        tokens.push(PageToken::Page(total));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::PageToken::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_centered_window() {
        assert_eq!(
            window(10, 20, 5),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_small_total_has_no_ellipsis() {
        assert_eq!(window(2, 3, 5), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(window(1, 1, 5), vec![Page(1)]);
    }

    #[test]
    fn test_near_start() {
        assert_eq!(
            window(2, 20, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_near_end_shifts_window_back() {
        assert_eq!(
            window(19, 20, 5),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_gap_of_one_page_is_not_collapsed() {
        // start == 2: page 1 is prepended without an ellipsis.
        assert_eq!(
            window(4, 7, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(window(0, 3, 5), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(window(99, 6, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]);
    }

    #[test]
    fn test_huge_size_covers_all_pages() {
        assert_eq!(window(3, 5, usize::MAX), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
        assert_eq!(window(10, 20, usize::MAX).len(), 20);
        assert_eq!(window(usize::MAX, usize::MAX, 3).len(), 5);
    }

    #[test]
    fn test_token_serde_shape() {
        let json = serde_json::to_string(&vec![Page(1), Ellipsis]).unwrap();
        assert_eq!(json, r#"[{"kind":"page","page":1},{"kind":"ellipsis"}]"#);
    }
}
