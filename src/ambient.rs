//! Client for the Ambient channel data API.
//!
//! One operation: fetch the latest record for the configured channel and
//! reshape it into a [`Snapshot`]. There is no retry or backoff; a failed
//! fetch is surfaced once and the next browser poll tries again.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::domain::{ChannelReadings, Snapshot};
use crate::normalize;

/// Bound on the single outbound call. Upstream slowness past this point is
/// reported, not waited out.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures surfaced by [`AmbientClient::latest_snapshot`].
#[derive(Debug, Error)]
pub enum AmbientError {
    /// Network error, timeout, non-2xx status, or a body that is not the
    /// expected record array.
    #[error("upstream request failed: {0}")]
    UpstreamUnavailable(String),

    /// The record exists but its `created` stamp cannot be parsed. Unlike a
    /// bad sensor value this is fatal for the request, since the page's
    /// freshness display would be meaningless without it.
    #[error("invalid created timestamp in upstream record: {0:?}")]
    InvalidTimestamp(String),
}

impl From<reqwest::Error> for AmbientError {
    fn from(err: reqwest::Error) -> Self {
        AmbientError::UpstreamUnavailable(err.to_string())
    }
}

/// One row of the Ambient channel data response.
///
/// Sensor fields are kept as raw JSON values; the API emits them
/// inconsistently as numbers, strings, or nulls, and missing keys default
/// to null here.
#[derive(Debug, Deserialize)]
pub struct AmbientRecord {
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub d1: Value,
    #[serde(default)]
    pub d2: Value,
    #[serde(default)]
    pub d3: Value,
    #[serde(default)]
    pub d4: Value,
}

impl AmbientRecord {
    /// Normalize the raw row. Sensor values degrade to absent when they do
    /// not parse; a bad `created` stamp fails the whole conversion.
    pub fn into_snapshot(self) -> Result<Snapshot, AmbientError> {
        let raw_created = self.created.unwrap_or_default();
        let created = normalize::coerce_timestamp(&raw_created)
            .ok_or(AmbientError::InvalidTimestamp(raw_created))?;

        Ok(Snapshot {
            created: Some(created),
            readings: ChannelReadings {
                d1: normalize::coerce_number(&self.d1),
                d2: normalize::coerce_number(&self.d2),
                d3: normalize::coerce_number(&self.d3),
                d4: normalize::coerce_number(&self.d4),
            },
        })
    }
}

/// HTTP client for one Ambient channel.
#[derive(Debug, Clone)]
pub struct AmbientClient {
    client: Client,
    base_url: String,
    channel_id: u64,
    read_key: String,
}

impl AmbientClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            channel_id: config.channel_id,
            read_key: config.read_key.clone(),
        }
    }

    /// Fetch the most recent record for the channel.
    ///
    /// An empty record list is the valid "no data yet" state and maps to
    /// [`Snapshot::empty`], not an error.
    pub async fn latest_snapshot(&self) -> Result<Snapshot, AmbientError> {
        let url = format!(
            "{}/api/v2/channels/{}/data",
            self.base_url, self.channel_id
        );

        let response = self
            .client
            .get(&url)
            .query(&[("readKey", self.read_key.as_str()), ("n", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AmbientError::UpstreamUnavailable(format!(
                "upstream returned status {status}"
            )));
        }

        let mut rows: Vec<AmbientRecord> = response
            .json()
            .await
            .map_err(|e| AmbientError::UpstreamUnavailable(format!("unexpected body: {e}")))?;

        if rows.is_empty() {
            return Ok(Snapshot::empty());
        }

        // With n=1 the first row is the most recent record.
        rows.swap_remove(0).into_snapshot()
    }
}
