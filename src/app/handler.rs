//! Event handling and state transition logic.
//!
//! This module translates user intents and collaborator results into
//! coordinator calls, returning whether the table needs re-rendering and
//! which side effects to perform.
//!
//! # Architecture
//!
//! ```text
//! User intent / fetch result → Event → handle_event → coordinator setters → Actions
//!                                  ↑                                          ↓
//!                                  └──────────── collaborator results ────────┘
//! ```
//!
//! # Event Types
//!
//! - **Filtering**: `SetSearch`, `SetFilter`, `ClearFilters`, `SetSort`
//! - **Paging**: `SetItemsPerPage`, `GoToPage`, `NextPage`, `PreviousPage`
//! - **Data**: `SwitchContext`, `Refresh`, `CollectionLoaded`
//! - **Mutations**: `RemoveRecord`, `MutationConfirmed`, `MutationFailed`
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::{handle_event, Event, ViewStateCoordinator};
//! use rosterview::{screens, Config};
//!
//! let mut view = ViewStateCoordinator::new(screens::assistants(), &Config::default());
//! let (render, actions) = handle_event(&mut view, &Event::SetSearch("ada".into()))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), rosterview::RosterError>(())
//! ```

use super::actions::{Action, NoticeLevel};
use super::optimistic::MutationId;
use super::state::ViewStateCoordinator;
use crate::domain::error::{Result, RosterError};
use crate::engine::sort::SortMode;

/// Events triggered by user input or by collaborator results.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<R> {
    /// Replaces the search box text.
    SetSearch(String),
    /// Selects a value on a categorical axis, `None` meaning "All".
    SetFilter {
        axis: String,
        value: Option<String>,
    },
    /// Clears the search text and every axis.
    ClearFilters,
    SetSort(SortMode),
    /// Requested page size, normalized to at least 1.
    SetItemsPerPage(i64),
    /// Requested page, clamped into range.
    GoToPage(i64),
    NextPage,
    PreviousPage,

    /// Switches tabs (applied/saved, followers/following). Resets filter, sort
    /// and page, then requests the new tab's collection.
    SwitchContext(String),
    /// Requests a refetch of the current tab without touching view state.
    Refresh,
    /// A fetched collection arrived.
    CollectionLoaded(Vec<R>),

    /// Removes a record locally and asks for the remote removal.
    RemoveRecord {
        key: String,
    },
    /// The remote side of `mutation` succeeded.
    MutationConfirmed {
        mutation: MutationId,
    },
    /// The remote side of `mutation` failed.
    MutationFailed {
        mutation: MutationId,
        message: String,
    },
}

/// Processes an event, mutates the coordinator and returns actions to execute.
///
/// # Returns
///
/// `(render, actions)`: `render` is `true` when the table output may have
/// changed; `actions` are side effects for the collaborators, in order.
///
/// # Errors
///
/// - [`RosterError::UnknownRecord`] when `RemoveRecord` names a key that is
///   not in the collection
/// - [`RosterError::MutationInFlight`] when `RemoveRecord` arrives while
///   another removal is still unconfirmed
///
/// Results for mutations that are no longer pending (for example after a tab
/// switch) are logged and ignored.
pub fn handle_event<R: Clone + 'static>(
    state: &mut ViewStateCoordinator<R>,
    event: &Event<R>,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event",
        event_type = event_name(event),
        screen = %state.screen().name()
    ).entered();

    let before = fingerprint(state);

    let actions = match event {
        Event::SetSearch(term) => {
            state.set_search(term);
            vec![]
        }
        Event::SetFilter { axis, value } => {
            state.set_filter(axis, value.as_deref());
            vec![]
        }
        Event::ClearFilters => {
            state.clear_filters();
            vec![]
        }
        Event::SetSort(mode) => {
            state.set_sort(*mode);
            vec![]
        }
        Event::SetItemsPerPage(n) => {
            state.set_items_per_page(*n);
            vec![]
        }
        Event::GoToPage(page) => {
            state.set_current_page(*page);
            vec![]
        }
        Event::NextPage => {
            state.next_page();
            vec![]
        }
        Event::PreviousPage => {
            state.previous_page();
            vec![]
        }
        Event::SwitchContext(context) => {
            state.switch_context(context.clone());
            vec![Action::FetchCollection {
                context: Some(context.clone()),
            }]
        }
        Event::Refresh => vec![Action::FetchCollection {
            context: state.context().map(String::from),
        }],
        Event::CollectionLoaded(records) => {
            state.replace_collection(records.clone());
            vec![]
        }
        Event::RemoveRecord { key } => {
            let mutation = state.remove_optimistic(key)?;
            vec![Action::RemoveRemote {
                mutation,
                key: key.clone(),
            }]
        }
        Event::MutationConfirmed { mutation } => match state.confirm(*mutation) {
            Ok(()) => vec![Action::FetchCollection {
                context: state.context().map(String::from),
            }],
            Err(RosterError::UnknownMutation(id)) => {
                tracing::debug!(mutation = %id, "confirmation for stale mutation ignored");
                vec![]
            }
            Err(e) => return Err(e),
        },
        Event::MutationFailed { mutation, message } => match state.rollback(*mutation) {
            Ok(()) => {
                tracing::error!(mutation = %mutation, error = %message, "remote mutation failed, rolled back");
                vec![Action::Notify {
                    level: NoticeLevel::Error,
                    message: message.clone(),
                }]
            }
            Err(RosterError::UnknownMutation(id)) => {
                tracing::debug!(mutation = %id, "failure for stale mutation ignored");
                vec![]
            }
            Err(e) => return Err(e),
        },
    };

    let render = fingerprint(state) != before;
    tracing::debug!(render, action_count = actions.len(), "event handled");
    Ok((render, actions))
}

/// Everything the rendered table depends on, cheap to compare.
fn fingerprint<R>(state: &ViewStateCoordinator<R>) -> (u64, usize, usize, SortMode) {
    (
        state.revision(),
        state.current_page(),
        state.items_per_page(),
        state.sort_mode(),
    )
}

const fn event_name<R>(event: &Event<R>) -> &'static str {
    match event {
        Event::SetSearch(_) => "set_search",
        Event::SetFilter { .. } => "set_filter",
        Event::ClearFilters => "clear_filters",
        Event::SetSort(_) => "set_sort",
        Event::SetItemsPerPage(_) => "set_items_per_page",
        Event::GoToPage(_) => "go_to_page",
        Event::NextPage => "next_page",
        Event::PreviousPage => "previous_page",
        Event::SwitchContext(_) => "switch_context",
        Event::Refresh => "refresh",
        Event::CollectionLoaded(_) => "collection_loaded",
        Event::RemoveRecord { .. } => "remove_record",
        Event::MutationConfirmed { .. } => "mutation_confirmed",
        Event::MutationFailed { .. } => "mutation_failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Assistant;
    use crate::{screens, Config};

    fn assistant(id: &str, name: &str) -> Assistant {
        Assistant {
            id: id.to_string(),
            name: Some(name.to_string()),
            email: None,
            phone: None,
            status: Some("approved".to_string()),
            created_at: Some("2024-01-01".to_string()),
        }
    }

    fn loaded() -> ViewStateCoordinator<Assistant> {
        let mut view = ViewStateCoordinator::new(screens::assistants(), &Config::default());
        let records = (0..3).map(|i| assistant(&format!("a{i}"), &format!("Name {i}"))).collect();
        handle_event(&mut view, &Event::CollectionLoaded(records)).unwrap();
        view
    }

    #[test]
    fn test_no_op_page_change_skips_render() {
        let mut view = loaded();
        let (render, actions) = handle_event(&mut view, &Event::GoToPage(1)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_switch_context_requests_fetch() {
        let mut view = loaded();
        let (render, actions) = handle_event(&mut view, &Event::SwitchContext("pending".into())).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::FetchCollection { context: Some("pending".into()) }]);
    }

    #[test]
    fn test_remove_then_fail_rolls_back_and_notifies() {
        let mut view = loaded();
        let (_, actions) = handle_event(&mut view, &Event::RemoveRecord { key: "a1".into() }).unwrap();
        let Some(Action::RemoveRemote { mutation, key }) = actions.first().cloned() else {
            panic!("expected RemoveRemote, got {actions:?}");
        };
        assert_eq!(key, "a1");
        assert_eq!(view.records().len(), 2);

        let (render, actions) = handle_event(
            &mut view,
            &Event::MutationFailed { mutation, message: "network down".into() },
        )
        .unwrap();
        assert!(render);
        assert_eq!(view.records().len(), 3);
        assert_eq!(
            actions,
            vec![Action::Notify { level: NoticeLevel::Error, message: "network down".into() }]
        );
    }

    #[test]
    fn test_second_remove_while_pending_errors() {
        let mut view = loaded();
        handle_event(&mut view, &Event::RemoveRecord { key: "a0".into() }).unwrap();
        let result = handle_event(&mut view, &Event::RemoveRecord { key: "a1".into() });
        assert!(matches!(result, Err(RosterError::MutationInFlight)));
    }

    #[test]
    fn test_refresh_during_removal_is_not_rolled_back() {
        let mut view = loaded();
        let (_, actions) = handle_event(&mut view, &Event::RemoveRecord { key: "a0".into() }).unwrap();
        let Some(Action::RemoveRemote { mutation, .. }) = actions.first().cloned() else {
            panic!("expected RemoveRemote, got {actions:?}");
        };

        let fresh = vec![assistant("a0", "Name 0"), assistant("a9", "Name 9")];
        handle_event(&mut view, &Event::CollectionLoaded(fresh.clone())).unwrap();

        let (render, actions) = handle_event(
            &mut view,
            &Event::MutationFailed { mutation, message: "timeout".into() },
        )
        .unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(view.records(), fresh.as_slice());
    }

    #[test]
    fn test_stale_confirmation_is_ignored() {
        let mut view = loaded();
        let (render, actions) =
            handle_event(&mut view, &Event::MutationConfirmed { mutation: MutationId(42) }).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }
}
