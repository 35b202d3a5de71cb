//! Plain-text rendering of the pagination strip.
//!
//! Used for logs, terminal front-ends and snapshot-style assertions. The
//! current page is bracketed and the previous/next arrows are dimmed to `·`
//! when there is nowhere to go.

use super::viewmodel::TableView;
use crate::engine::window::PageToken;

const PREVIOUS: &str = "‹";
const NEXT: &str = "›";
const DISABLED: &str = "·";
const ELLIPSIS: &str = "…";

/// Renders the pagination strip of `view`, e.g. `‹ 1 … 8 9 [10] 11 12 … 20 ›`.
#[must_use]
pub fn render_strip<R>(view: &TableView<R>) -> String {
    let mut out = String::new();

    out.push_str(if view.has_previous() { PREVIOUS } else { DISABLED });

    for token in &view.page_window {
        out.push(' ');
        match token {
            PageToken::Page(n) if *n == view.current_page => {
                out.push('[');
                out.push_str(&n.to_string());
                out.push(']');
            }
            PageToken::Page(n) => out.push_str(&n.to_string()),
            PageToken::Ellipsis => out.push_str(ELLIPSIS),
        }
    }

    out.push(' ');
    out.push_str(if view.has_next() { NEXT } else { DISABLED });
    out
}

/// Renders the range label and the strip on one line.
#[must_use]
pub fn render_footer<R>(view: &TableView<R>) -> String {
    format!("{}  {}", view.range_label(), render_strip(view))
}
