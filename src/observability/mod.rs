//! Structured logging setup.
//!
//! The crate logs through `tracing` macros everywhere: a `debug_span!` around
//! each pipeline recomputation and each handled event, `debug!` for state
//! transitions, `trace!` for per-keystroke search updates, `warn!` when an
//! input was silently corrected (page clamped, page size normalized) and
//! `error!` when a remote mutation fails.
//!
//! Applications embedding the engine usually install their own subscriber;
//! [`init_tracing`] is a convenience for those that don't.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
