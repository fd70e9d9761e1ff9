//! ==============================================================================
//! main.rs - washwatch entry point
//! ==============================================================================
//!
//! purpose:
//!     laundry room status dashboard. polls the Ambient cloud telemetry API
//!     for the latest record of one channel (four machine sensors) and
//!     serves a single page that repaints itself every 30 seconds.
//!
//! responsibilities:
//!     - initialize logging
//!     - read configuration from the environment
//!     - build the upstream client and the router
//!     - bind the listener and serve
//!
//! architecture:
//!
//!     ┌──────────────────────────────────────────────┐
//!     │                washwatch                     │
//!     │   ┌───────────┐        ┌──────────────────┐  │
//!     │   │ web server│──────▶ │  AmbientClient   │  │
//!     │   │ (axum)    │        │  (reqwest, 10s)  │  │
//!     │   └─────┬─────┘        └────────┬─────────┘  │
//!     └─────────┼──────────────────────┼─────────────┘
//!               │                      │
//!          browser poller        Ambient cloud API
//!          (every 30s)           (channel data, n=1)
//!
//! ==============================================================================

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use washwatch::config::Config;
use washwatch::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        channel_id = config.channel_id,
        base_url = %config.base_url,
        threshold = config.threshold,
        "configuration loaded"
    );

    let state = AppState::new(&config);
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("dashboard live at http://0.0.0.0:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
