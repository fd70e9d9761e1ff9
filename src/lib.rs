//! # washwatch
//!
//! A small status dashboard for a shared laundry room. The Ambient cloud
//! telemetry API carries one channel with four sensor fields (two dryers,
//! two washers); this service fetches the latest record on demand,
//! normalizes the loosely typed values, and serves a single page that
//! repaints itself every 30 seconds from a JSON endpoint.
//!
//! ```text
//!   browser poller ──> GET /api/data ──> AmbientClient ──> cloud API
//!        ▲                                   │
//!        └──────────── JSON payload <── normalize ◄── raw record
//! ```
//!
//! - [`config`]: process configuration read once from the environment
//! - [`ambient`]: the outbound client and its error taxonomy
//! - [`normalize`]: numeric and timestamp coercion for upstream values
//! - [`domain`]: snapshot types and occupancy classification
//! - [`server`]: axum router, status endpoint, page route
//! - [`page`]: the dashboard document with the embedded poller script

pub mod ambient;
pub mod config;
pub mod domain;
pub mod normalize;
pub mod page;
pub mod server;

pub use ambient::{AmbientClient, AmbientError};
pub use config::Config;
pub use domain::{ChannelReadings, Occupancy, Snapshot};
