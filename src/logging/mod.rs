pub mod config;

use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use config::{LogConfig, LogFormat};

/// Initialize console logging
///
/// Everything goes to stderr so that stdout only carries conversion
/// results. Calling this more than once is harmless: later calls report an
/// error and leave the first subscriber in place.
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(&config.filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_FILTER));

    let console_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact()
            .with_writer(io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(filter)
        .try_init()?;

    tracing::debug!(filter = %config.filter, format = ?config.format, "Logging initialized");

    Ok(())
}
