// Non-fatal anomalies recorded while building a session view

use serde::Serialize;

use super::IntervalKind;

/// Identifies one ingested series.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesKey {
    pub connection_id: String,
    pub report_id: String,
    pub field: String,
}

impl SeriesKey {
    pub fn new(connection_id: &str, report_id: &str, field: &str) -> Self {
        Self {
            connection_id: connection_id.to_string(),
            report_id: report_id.to_string(),
            field: field.to_string(),
        }
    }
}

/// Serializes with a `kind` tag, e.g. `{"kind":"outOfRangeRate","connectionId":...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Diagnostic {
    /// Missing or non-numeric value where a number was expected; sample dropped.
    InvalidSample {
        #[serde(flatten)]
        key: SeriesKey,
        timestamp: i64,
    },
    /// Consecutive counter samples too close together to derive a rate.
    DegenerateInterval {
        #[serde(flatten)]
        key: SeriesKey,
        timestamp: i64,
    },
    /// Derived rate was NaN, negative or above the ceiling.
    OutOfRangeRate {
        #[serde(flatten)]
        key: SeriesKey,
        timestamp: i64,
        rate: f64,
    },
    /// Interval start without a later stop; extended to the track end.
    UnmatchedInterval {
        participant_id: String,
        interval: IntervalKind,
        start_time: i64,
        end_time: i64,
    },
    /// Event that maps to no category; never rendered.
    UnknownEventType {
        participant_id: String,
        event_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        sub_type: Option<String>,
        timestamp: i64,
    },
}
