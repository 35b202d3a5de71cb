//! Application layer coordinating view state, events, and actions.
//!
//! This module sits between the presentation layer (out of this crate) and the
//! pure [`engine`](crate::engine) stages. It owns the per-screen state and
//! enforces the page reset and clamping rules.
//!
//! # Architecture
//!
//! ```text
//! User intent → Event → handle_event → ViewStateCoordinator → TableView
//!                                               ↓
//!                                            Actions → fetch / remote / toast
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`optimistic`]: Snapshot ledger for optimistic list mutations
//! - [`preview`]: Application-scoped image preview publish/subscribe hub
//! - [`screen`]: Per-screen field accessors and filter axes
//! - [`selection`]: The user's current filter choices
//! - [`state`]: The view state coordinator and view model computation
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::{handle_event, Event, ViewStateCoordinator};
//! use rosterview::engine::SortMode;
//! use rosterview::{screens, Config};
//!
//! let mut view = ViewStateCoordinator::new(screens::followed_companies(), &Config::default());
//! let (render, _actions) = handle_event(&mut view, &Event::SetSort(SortMode::AToZ))?;
//! assert!(render);
//! # Ok::<(), rosterview::RosterError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod optimistic;
pub mod preview;
pub mod screen;
pub mod selection;
pub mod state;

pub use actions::{Action, NoticeLevel};
pub use handler::{handle_event, Event};
pub use optimistic::MutationId;
pub use preview::{PreviewHub, PreviewRequest, SubscriptionId};
pub use screen::{Screen, SearchStyle};
pub use selection::FilterSelection;
pub use state::ViewStateCoordinator;
