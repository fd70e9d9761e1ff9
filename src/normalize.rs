//! Coercion of raw upstream values into usable readings.
//!
//! The Ambient data API is loosely typed: a sensor field may arrive as a
//! JSON number, a numeric string, an empty string, or null, and the
//! `created` stamp may carry a `Z` suffix, an explicit offset, or no
//! timezone at all. Everything here is total over that mess: bad values
//! degrade to `None`, never to an error. The caller decides which absences
//! are fatal.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Coerce a raw field value into a finite reading.
///
/// Null, empty strings, non-numeric strings, and non-finite tokens such as
/// "NaN" or "inf" all come back as `None`. Arrays and objects never hold a
/// reading.
pub fn coerce_number(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Coerce an upstream timestamp string into UTC.
///
/// A trailing `Z` or an explicit offset is honored; a stamp with no
/// timezone information at all is assumed to already be UTC. Empty or
/// unparsable input yields `None`.
pub fn coerce_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
