//! Global `tracing` subscriber installation.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Sets up a pipeline that:
/// 1. Filters spans and events by level
/// 2. Formats them as compact lines on stderr
///
/// # Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Repeated Calls
///
/// Idempotent: only the first call installs a subscriber, later calls (or a
/// subscriber installed by the host application) are left alone.
///
/// # Example
///
/// ```rust
/// use rosterview::{observability, Config};
///
/// let config = Config { trace_level: Some("warn".into()), ..Config::default() };
/// observability::init_tracing(&config);
/// observability::init_tracing(&config);
/// tracing::warn!(screen = "assistants", "subscriber installed once");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or("info"))
    });

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("tracing subscriber installed");
    }
}
