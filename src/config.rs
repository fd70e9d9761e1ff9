//! ==============================================================================
//! config.rs - Runtime Configuration Loader
//! ==============================================================================
//!
//! purpose:
//!     reads process configuration from the environment once at startup.
//!     the resulting struct is immutable and passed to constructors; nothing
//!     in the crate reads environment variables after this point.
//!
//! ==============================================================================

use anyhow::{Context, Result};
use std::env;

/// Channel used when `AMBIENT_CHANNEL_ID` is unset.
pub const DEFAULT_CHANNEL_ID: u64 = 95641;

/// Ambient API base used when `AMBIENT_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://ambidata.io";

/// A reading at or above this value means the machine is drawing power,
/// i.e. in use. Tune per sensor.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Listen port used when `WASHWATCH_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Process-wide configuration, fixed for the lifetime of the service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ambient channel id holding the four machine sensors.
    pub channel_id: u64,
    /// Read key authorizing data access on the channel.
    pub read_key: String,
    /// Base URL of the Ambient API.
    pub base_url: String,
    /// In-use threshold applied to each reading.
    pub threshold: f64,
    /// Port the dashboard listens on.
    pub port: u16,
}

impl Config {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset. A variable that is set but unparsable
    /// is a startup error rather than a silent default.
    pub fn from_env() -> Result<Self> {
        let channel_id = env::var("AMBIENT_CHANNEL_ID")
            .unwrap_or_else(|_| DEFAULT_CHANNEL_ID.to_string())
            .parse::<u64>()
            .context("AMBIENT_CHANNEL_ID must be an integer")?;
        let read_key = env::var("AMBIENT_READ_KEY").unwrap_or_default();
        let base_url =
            env::var("AMBIENT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let threshold = env::var("WASHWATCH_THRESHOLD")
            .unwrap_or_else(|_| DEFAULT_THRESHOLD.to_string())
            .parse::<f64>()
            .context("WASHWATCH_THRESHOLD must be a number")?;
        let port = env::var("WASHWATCH_PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .context("WASHWATCH_PORT must be a port number")?;

        Ok(Self {
            channel_id,
            read_key,
            base_url,
            threshold,
            port,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_id: DEFAULT_CHANNEL_ID,
            read_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            threshold: DEFAULT_THRESHOLD,
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.channel_id, DEFAULT_CHANNEL_ID);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.read_key.is_empty());
    }
}
