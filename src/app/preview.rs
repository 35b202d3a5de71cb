//! Scoped publish/subscribe hub for the shared image-preview overlay.
//!
//! Any row can ask for an image (a resume scan, a company logo) to be shown
//! in the one overlay the application owns. Instead of a module-level callback
//! that whoever mounted last overwrites, the application creates one
//! [`PreviewHub`] at start-up, the overlay subscribes to it, rows publish
//! [`PreviewRequest`]s into it, and the hub is shut down with the application.

use crate::domain::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A request to show one image in the preview overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Image location, passed through to the overlay untouched.
    pub url: String,
    /// Text shown under the image.
    #[serde(default)]
    pub caption: Option<String>,
}

impl PreviewRequest {
    /// A request without a caption.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: None,
        }
    }

    /// Sets the caption.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Handle returned by [`PreviewHub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Option<&PreviewRequest>)>;

/// Application-scoped preview state with explicit subscribe/publish.
///
/// Listeners receive `Some(request)` when a preview opens and `None` when it
/// is dismissed.
pub struct PreviewHub {
    listeners: BTreeMap<SubscriptionId, Listener>,
    next_id: u64,
    current: Option<PreviewRequest>,
    closed: bool,
}

impl Default for PreviewHub {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PreviewHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHub")
            .field("listeners", &self.listeners.len())
            .field("current", &self.current)
            .field("closed", &self.closed)
            .finish()
    }
}

impl PreviewHub {
    /// An open hub with no listeners and no preview.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            listeners: BTreeMap::new(),
            next_id: 1,
            current: None,
            closed: false,
        }
    }

    /// Registers a listener. It immediately receives the open preview, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::HubClosed`] after [`shutdown`](Self::shutdown).
    pub fn subscribe<F>(&mut self, mut listener: F) -> Result<SubscriptionId>
    where
        F: FnMut(Option<&PreviewRequest>) + 'static,
    {
        if self.closed {
            return Err(RosterError::HubClosed);
        }

        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        if self.current.is_some() {
            listener(self.current.as_ref());
        }
        self.listeners.insert(id, Box::new(listener));

        tracing::debug!(subscription = id.0, listeners = self.listeners.len(), "preview listener subscribed");
        Ok(id)
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Opens `request` in the overlay and notifies every listener.
    ///
    /// Returns the number of listeners notified.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::HubClosed`] after [`shutdown`](Self::shutdown).
    pub fn publish(&mut self, request: PreviewRequest) -> Result<usize> {
        if self.closed {
            return Err(RosterError::HubClosed);
        }

        tracing::debug!(url = %request.url, "opening preview");
        self.current = Some(request);
        Ok(self.notify())
    }

    /// Closes the open preview, notifying listeners with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::HubClosed`] after [`shutdown`](Self::shutdown).
    pub fn dismiss(&mut self) -> Result<usize> {
        if self.closed {
            return Err(RosterError::HubClosed);
        }
        if self.current.take().is_none() {
            return Ok(0);
        }
        Ok(self.notify())
    }

    /// The preview currently open, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&PreviewRequest> {
        self.current.as_ref()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Ends the hub's lifetime: drops every listener and the open preview.
    ///
    /// Further `subscribe`, `publish` and `dismiss` calls fail. Calling
    /// `shutdown` twice is harmless.
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        tracing::debug!(listeners = self.listeners.len(), "preview hub shutting down");
        self.listeners.clear();
        self.current = None;
        self.closed = true;
    }

    fn notify(&mut self) -> usize {
        let current = self.current.as_ref();
        for listener in self.listeners.values_mut() {
            listener(current);
        }
        self.listeners.len()
    }
}
