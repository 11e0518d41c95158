//! Log subscriber for the demo binaries.

use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter, Registry};

/// Toolkit and demo at debug, everything else at warn.
const DEFAULT_FILTER: &str = "warn,stratum_ui=debug,stratum_demo=info";

/// Installs a compact stdout subscriber.
///
/// `RUST_LOG` directives are appended to the default filter, so they win
/// where they overlap.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> Result<(), TryInitError> {
    let mut filter = DEFAULT_FILTER.to_owned();
    if let Ok(directives) = std::env::var(EnvFilter::DEFAULT_ENV) {
        filter.push(',');
        filter.push_str(&directives);
    }

    let stdout_log = fmt::layer().event_format(fmt::format().compact().with_line_number(true));

    Registry::default()
        .with(EnvFilter::new(filter))
        .with(stdout_log)
        .try_init()
}
