//! MongoMuse chat widget server
//!
//! Entry point: loads configuration and serves the widget.

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;

use mongomuse::config::AppConfig;
use mongomuse::{server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init();

    let config = Arc::new(AppConfig::load()?);
    info!(
        name: "config.loaded",
        backend_host = %config.backend.host,
        backend_port = config.backend.port,
        idle_timeout_secs = config.widget.idle_timeout_secs,
        "Configuration loaded"
    );

    server::start_server(config).await?;
    Ok(())
}
