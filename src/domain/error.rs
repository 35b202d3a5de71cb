//! Error types for the rosterview engine.
//!
//! This module defines the centralized error type [`RosterError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. The
//! filter/sort/paginate pipeline itself never fails; every input there is
//! normalized instead. Errors only surface at the edges: configuration parsing,
//! collection decoding, the optimistic mutation protocol and the preview hub.

use crate::app::optimistic::MutationId;
use thiserror::Error;

/// The main error type for rosterview operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use rosterview::RosterError;
///
/// fn validate_config() -> Result<(), RosterError> {
///     Err(RosterError::Config("page_size_options is empty".to_string()))
/// }
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A TOML configuration document could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON record collection could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, typically while
    /// reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An optimistic mutation was started while another one is still pending.
    ///
    /// Only one mutation may be in flight per coordinator, otherwise a rollback
    /// would discard the effect of the other.
    #[error("an optimistic mutation is already in flight")]
    MutationInFlight,

    /// A confirmation or failure arrived for a mutation that is not pending.
    #[error("unknown mutation: {0}")]
    UnknownMutation(MutationId),

    /// No record with the given key exists in the current collection.
    #[error("record not found: {0}")]
    UnknownRecord(String),

    /// The preview hub was used after it was shut down.
    #[error("preview hub is shut down")]
    HubClosed,
}

/// A specialized `Result` type for rosterview operations.
///
/// This is a type alias for `std::result::Result<T, RosterError>`.
pub type Result<T> = std::result::Result<T, RosterError>;
