use chrono::{DateTime, Utc};
use serde::Serialize;

/// Latest normalized value for each of the four machine slots.
///
/// The slot names follow the Ambient channel field names: `d1`/`d2` are the
/// dryers, `d3`/`d4` the washers. `None` means the upstream field was
/// missing, empty, or not a finite number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ChannelReadings {
    pub d1: Option<f64>,
    pub d2: Option<f64>,
    pub d3: Option<f64>,
    pub d4: Option<f64>,
}

impl ChannelReadings {
    /// Slot name and reading pairs, in wire order.
    pub fn iter_named(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("d1", self.d1),
            ("d2", self.d2),
            ("d3", self.d3),
            ("d4", self.d4),
        ]
    }
}

/// The complete result of one upstream fetch: when the record was created
/// on the Ambient side, plus the four readings. Built fresh per request and
/// discarded after serialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Creation time of the latest upstream record, `None` while the
    /// channel has no data yet.
    pub created: Option<DateTime<Utc>>,
    pub readings: ChannelReadings,
}

impl Snapshot {
    /// The valid "no data yet" state for a channel with no records.
    pub fn empty() -> Self {
        Self {
            created: None,
            readings: ChannelReadings::default(),
        }
    }
}

/// Whether a machine is running, based on its sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    InUse,
    Available,
    Unknown,
}

impl Occupancy {
    /// Classify a reading against the threshold. A reading exactly equal to
    /// the threshold counts as in use; an absent reading is unknown.
    pub fn classify(reading: Option<f64>, threshold: f64) -> Self {
        match reading {
            None => Occupancy::Unknown,
            Some(v) if v >= threshold => Occupancy::InUse,
            Some(_) => Occupancy::Available,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Occupancy::InUse => "in use",
            Occupancy::Available => "available",
            Occupancy::Unknown => "unknown",
        }
    }
}
