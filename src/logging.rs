//! Diagnostic logging for the demonstration binary.
//!
//! Logs go to stderr so standard output carries only the demonstration
//! itself. `RUST_LOG` takes precedence over the level chosen here.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `verbose` raises this crate to `debug`;
/// otherwise only warnings and errors are shown.
pub fn init(verbose: bool) {
    let default = if verbose {
        "warn,roster_pipeline=debug,roster_demo=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
