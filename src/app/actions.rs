//! Actions representing side effects for the engine's collaborators.
//!
//! This module defines the [`Action`] type, commands produced by the event
//! handler that the engine cannot carry out itself: fetching a collection,
//! issuing a remote mutation, or showing a notification. The presentation
//! layer executes them in order and feeds the outcome back as events.
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::{Action, NoticeLevel};
//!
//! let actions = vec![
//!     Action::FetchCollection { context: Some("applied".to_string()) },
//!     Action::Notify { level: NoticeLevel::Error, message: "Could not unfollow".to_string() },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use super::optimistic::MutationId;
use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Commands for the data-fetch and notification collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Fetch (or refetch) the collection for the given tab.
    ///
    /// The result comes back as `Event::CollectionLoaded`.
    FetchCollection {
        /// Active tab, `None` for single-list screens.
        context: Option<String>,
    },

    /// Perform the server-side removal matching an optimistic local removal.
    ///
    /// The outcome comes back as `Event::MutationConfirmed` or
    /// `Event::MutationFailed` carrying the same `mutation`.
    RemoveRemote {
        mutation: MutationId,
        /// Key of the removed record.
        key: String,
    },

    /// Show a toast.
    Notify {
        level: NoticeLevel,
        message: String,
    },
}
