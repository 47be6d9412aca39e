//! Tracing subscriber installation.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::config::{Log, LogFormat};

/// Installs the global subscriber described by `config`.
///
/// The host may already own a subscriber; in that case this is a no-op.
pub fn setup(config: &Log) {
    let console = &config.console;
    if !console.enabled {
        return;
    }

    let filter = console
        .filtering_directive
        .as_deref()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(console.level.into_level().as_str()));

    let result = match console.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_current_span(true))
            .with(filter)
            .try_init(),
        LogFormat::Default => tracing_subscriber::registry()
            .with(fmt::layer().pretty())
            .with(filter)
            .try_init(),
    };

    if let Err(error) = result {
        tracing::debug!(%error, "tracing subscriber already installed");
    }
}
