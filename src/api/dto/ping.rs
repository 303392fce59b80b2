//! DTOs for the status (ping) endpoint.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Status report.
///
/// Both fields default when absent: a body without `ok` reads as not operational.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PingResponse {
    #[serde(default)]
    pub ok: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<ServerTime>,
}

impl PingResponse {
    /// Operational report stamped with `now` as an RFC 3339 UTC string.
    pub fn operational(now: DateTime<Utc>) -> Self {
        Self {
            ok: true,
            t: Some(ServerTime::Text(
                now.to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            )),
        }
    }
}

/// Server timestamp as sent on the wire: epoch milliseconds or a date string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerTime {
    Millis(f64),
    Text(String),
}

impl ServerTime {
    /// Converts to local time.
    ///
    /// Accepts epoch milliseconds, RFC 3339, a naive ISO date-time (read as local
    /// time) or a bare date (read as UTC midnight). Returns `None` otherwise.
    pub fn to_local(&self) -> Option<DateTime<Local>> {
        match self {
            ServerTime::Millis(ms) if ms.is_finite() => {
                DateTime::from_timestamp_millis(ms.trunc() as i64).map(|dt| dt.with_timezone(&Local))
            }
            ServerTime::Millis(_) => None,
            ServerTime::Text(text) => parse_date_text(text.trim()),
        }
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Local.from_local_datetime(&naive).earliest();
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(&Local))
}
