//! ==============================================================================
//! server.rs - dashboard web server
//! ==============================================================================
//!
//! purpose:
//!     the two HTTP routes the browser talks to:
//!     - GET /          the dashboard page with the embedded poller
//!     - GET /api/data  the status endpoint the poller re-fetches
//!
//! every /api/data invocation re-fetches upstream; there is no cache
//! and no de-duplication of concurrent requests. upstream failures stop
//! here, mapped to a 502 with a JSON error body.
//!
//! ==============================================================================

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, warn};

use crate::ambient::AmbientClient;
use crate::config::Config;
use crate::domain::{ChannelReadings, Occupancy, Snapshot};
use crate::page;

/// Everything a request handler needs; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    client: AmbientClient,
    channel_id: u64,
    threshold: f64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            client: AmbientClient::new(config),
            channel_id: config.channel_id,
            threshold: config.threshold,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/data", get(data_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Success body of the status endpoint.
#[derive(Debug, Serialize)]
pub struct StatusPayload {
    /// Creation time of the latest upstream record, RFC 3339 in UTC, or
    /// null while the channel has no data.
    pub created: Option<String>,
    /// Server clock at response construction, RFC 3339 in UTC.
    pub server_now: String,
    pub values: ChannelReadings,
}

impl StatusPayload {
    /// Serialize a snapshot, sampling the server clock now.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            created: snapshot.created.map(|dt| dt.to_rfc3339()),
            server_now: Utc::now().to_rfc3339(),
            values: snapshot.readings,
        }
    }
}

async fn page_handler(State(state): State<AppState>) -> Html<String> {
    Html(page::render_page(state.channel_id, state.threshold))
}

async fn data_handler(State(state): State<AppState>) -> Response {
    match state.client.latest_snapshot().await {
        Ok(snapshot) => {
            for (slot, reading) in snapshot.readings.iter_named() {
                debug!(
                    slot,
                    reading,
                    status = Occupancy::classify(reading, state.threshold).as_str(),
                    "machine status"
                );
            }
            Json(StatusPayload::from_snapshot(&snapshot)).into_response()
        }
        Err(err) => {
            warn!("status fetch failed: {err}");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
