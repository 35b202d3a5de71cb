//! The pure filter → sort → paginate → window pipeline.
//!
//! Each stage is a free function over its inputs with no hidden state:
//!
//! ```text
//! records ─► filter::apply ─► sort::apply ─► paginate::paginate ─► window::window
//!            (criteria)       (mode)          (page, page size)     (page tokens)
//! ```
//!
//! [`filter`] and [`sort`] are leaves; nothing here depends on a later stage.
//! The stateful side (which page is current, when to reset it) lives in
//! [`crate::app::state`].

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod window;

pub use filter::{Accessor, Criterion};
pub use paginate::{Page, PaginationState};
pub use sort::{SortAccessors, SortMode};
pub use window::PageToken;
