//! Logging setup for the CLI.
//!
//! `RUST_LOG` wins when set; otherwise the level comes from the `-v` count:
//!
//! - 0: warn
//! - 1 (`-v`): info, one line per page change
//! - 2 (`-vv`): debug, including ignored intents and store I/O
//! - 3+: trace

use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map a `-v` count to a log level
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!(
            "warn,blockpage_editor={level},blockpage_store={level},blockpage={level}"
        ))
    })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = build_env_filter(level_for(verbosity));
    let layer = fmt::layer()
        .compact()
        .with_target(verbosity >= 2)
        .with_writer(io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
