use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize structured logging (M-LOG-STRUCTURED).
///
/// `RUST_LOG` wins over the configured filter when set.
pub fn init(logging: &LoggingConfig) {
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let registry = tracing_subscriber::registry().with(filter_layer);

    match logging.format {
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).init(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_target(true).with_line_number(true).compact())
            .init(),
    }
}
