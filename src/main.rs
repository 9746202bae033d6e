//! Kora chat UI server
//!
//! Entry point: loads configuration, initializes logging and serves the chat
//! page.

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;

use kora_chat::config::AppConfig;
use kora_chat::{server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = AppConfig::load().context("Configuration error")?;
    telemetry::init(&config.logging);

    info!(
        name: "config.loaded",
        address = %config.bind_address(),
        static_dir = %config.server.static_dir,
        log_format = config.logging.format.as_str(),
        "Configuration loaded"
    );

    server::start_server(Arc::new(config)).await
}
