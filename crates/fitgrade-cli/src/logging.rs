//! Tracing subscriber setup.
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.

use std::env;
use std::io;

use fitgrade_core::storage::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// Precedence: `--log`, then `RUST_LOG`, then `logging.level` from the config.
pub fn init(cli_level: Option<&str>, config: &LoggingConfig) {
    let directive = cli_level
        .map(str::to_string)
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.level.clone());

    let env_filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
        .add_directive(
            "hyper=warn"
                .parse()
                .unwrap_or_else(|_| tracing::Level::WARN.into()),
        )
        .add_directive(
            "reqwest=warn"
                .parse()
                .unwrap_or_else(|_| tracing::Level::WARN.into()),
        );

    let layer = fmt::layer()
        .with_target(true)
        .with_writer(io::stderr);

    // Ignore a second init (e.g. from tests sharing the process).
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init();
}
