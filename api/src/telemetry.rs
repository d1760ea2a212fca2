//! Tracing subscriber setup
//!
//! `log` records from actix and the handlers are forwarded through the
//! subscriber's `tracing-log` bridge, so one filter governs both.

use sh_shared::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber already installed: {}", e);
    }
}
