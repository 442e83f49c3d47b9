//! Setlist API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p setlist-api
//! ```
//!
//! Configuration is read from environment variables and `.env`.

use anyhow::Context;
use setlist_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        storage = ?config.storage,
        address = %config.api.address(),
        "Starting Setlist API server"
    );

    setlist_api::run(config).await.context("Server failed")?;
    Ok(())
}
