//! Domain layer for rosterview.
//!
//! This module contains the record types, date handling and error types that
//! the rest of the crate builds on, independent of any particular screen.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`records`]: Record shapes supplied by the fetch layer
//! - [`timestamp`]: Date string parsing for sort keys
//!
//! # Examples
//!
//! ```
//! use rosterview::domain::{Assistant, Result};
//!
//! fn decode(json: &str) -> Result<Assistant> {
//!     Ok(serde_json::from_str(json)?)
//! }
//! assert!(decode(r#"{"id": "a1"}"#).is_ok());
//! ```

pub mod error;
pub mod records;
pub mod timestamp;

pub use error::{Result, RosterError};
pub use records::{Assistant, FollowedCandidate, FollowedCompany, JobApplication, MyJob};
