//! End-to-end tests for the status endpoint and the page route, driven
//! against a stub Ambient upstream on an ephemeral port.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use washwatch::config::Config;
use washwatch::server::{self, AppState};

const CHANNEL_ID: u64 = 95641;
const READ_KEY: &str = "testkey";

/// Stub channel-data route. Rejects requests that do not carry the read
/// key and n=1, so the tests also pin the outbound query contract.
async fn stub_data(
    State(rows): State<Value>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    if params.get("readKey").map(String::as_str) != Some(READ_KEY)
        || params.get("n").map(String::as_str) != Some("1")
    {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad query" }))).into_response();
    }
    Json(rows).into_response()
}

fn upstream_with(rows: Value) -> Router {
    Router::new()
        .route("/api/v2/channels/95641/data", get(stub_data))
        .with_state(rows)
}

fn upstream_failing() -> Router {
    Router::new().route(
        "/api/v2/channels/95641/data",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    )
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Start a stub upstream plus the real dashboard pointed at it; returns the
/// dashboard's base URL.
async fn dashboard_for(upstream: Router) -> String {
    let base_url = serve(upstream).await;
    let config = Config {
        channel_id: CHANNEL_ID,
        read_key: READ_KEY.to_string(),
        base_url,
        threshold: 0.05,
        port: 0,
    };
    serve(server::router(AppState::new(&config))).await
}

#[tokio::test]
async fn latest_record_is_reshaped_into_the_status_payload() {
    let rows = json!([{
        "created": "2025-06-01T12:00:00Z",
        "d1": "0.10",
        "d2": null,
        "d3": "0.01",
        "d4": "abc"
    }]);
    let base = dashboard_for(upstream_with(rows)).await;

    let resp = reqwest::get(format!("{base}/api/data")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["created"], json!("2025-06-01T12:00:00+00:00"));
    assert_eq!(body["values"]["d1"], json!(0.10));
    assert_eq!(body["values"]["d2"], Value::Null);
    assert_eq!(body["values"]["d3"], json!(0.01));
    assert_eq!(body["values"]["d4"], Value::Null);
    assert!(body["server_now"].as_str().unwrap().ends_with("+00:00"));
}

#[tokio::test]
async fn empty_channel_is_success_with_nulls() {
    let base = dashboard_for(upstream_with(json!([]))).await;

    let resp = reqwest::get(format!("{base}/api/data")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["created"], Value::Null);
    for slot in ["d1", "d2", "d3", "d4"] {
        assert_eq!(body["values"][slot], Value::Null, "slot {slot}");
    }
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway() {
    let base = dashboard_for(upstream_failing()).await;

    let resp = reqwest::get(format!("{base}/api/data")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);

    let body: Value = resp.json().await.unwrap();
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("upstream request failed"), "got: {error}");
    assert!(body.get("values").is_none());
}

#[tokio::test]
async fn malformed_created_is_a_distinct_bad_gateway() {
    let rows = json!([{ "created": "not-a-timestamp", "d1": "0.10" }]);
    let base = dashboard_for(upstream_with(rows)).await;

    let resp = reqwest::get(format!("{base}/api/data")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);

    let body: Value = resp.json().await.unwrap();
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("invalid created timestamp"), "got: {error}");
    assert!(!error.contains("upstream request failed"));
    assert!(body.get("values").is_none());
}

#[tokio::test]
async fn page_route_embeds_the_configured_values() {
    let base = dashboard_for(upstream_with(json!([]))).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = resp.text().await.unwrap();
    assert!(html.contains("channel 95641"));
    assert!(html.contains("const THRESHOLD = 0.05;"));
}
