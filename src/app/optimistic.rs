//! Snapshot bookkeeping for optimistic list mutations.
//!
//! Screens such as the follow lists remove a row locally as soon as the user
//! clicks "unfollow", then confirm with the server. The protocol is:
//!
//! 1. **Begin**: snapshot the collection, apply the local transform.
//! 2. **Failure**: restore the snapshot.
//! 3. **Success**: drop the snapshot and install the authoritative collection
//!    from a refetch.
//!
//! [`MutationLedger`] holds the single in-flight snapshot. The coordinator owns
//! one ledger and drives it from `begin_optimistic`, `rollback`, `confirm`
//! and `reconcile`.

use crate::domain::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one optimistic mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MutationId(pub u64);

impl fmt::Display for MutationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The pre-transform state of an in-flight mutation.
#[derive(Debug, Clone)]
pub struct PendingMutation<R> {
    pub id: MutationId,
    /// Short description for logs, e.g. `remove(64f1c...)`.
    pub label: String,
    /// Collection as it was before the local transform.
    pub snapshot: Vec<R>,
}

/// Holds at most one pending mutation and hands out ids.
#[derive(Debug, Clone)]
pub struct MutationLedger<R> {
    pending: Option<PendingMutation<R>>,
    next_id: u64,
}

impl<R> Default for MutationLedger<R> {
    fn default() -> Self {
        Self {
            pending: None,
            next_id: 1,
        }
    }
}

impl<R: Clone> MutationLedger<R> {
    /// Records a snapshot of `records` and returns the new mutation's id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::MutationInFlight`] when a mutation is already
    /// pending.
    pub fn begin(&mut self, label: impl Into<String>, records: &[R]) -> Result<MutationId> {
        if self.pending.is_some() {
            return Err(RosterError::MutationInFlight);
        }

        let id = MutationId(self.next_id);
        self.next_id += 1;
        self.pending = Some(PendingMutation {
            id,
            label: label.into(),
            snapshot: records.to_vec(),
        });
        Ok(id)
    }
}

impl<R> MutationLedger<R> {
    /// Removes and returns the pending mutation if its id is `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownMutation`] when `id` is not pending.
    pub fn take(&mut self, id: MutationId) -> Result<PendingMutation<R>> {
        match self.pending.take() {
            Some(pending) if pending.id == id => Ok(pending),
            other => {
                self.pending = other;
                Err(RosterError::UnknownMutation(id))
            }
        }
    }

    /// Drops any pending snapshot without restoring it.
    pub fn discard(&mut self) -> Option<MutationId> {
        self.pending.take().map(|pending| pending.id)
    }

    /// The in-flight mutation, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingMutation<R>> {
        self.pending.as_ref()
    }
}
