// Shared test helpers
#![allow(dead_code)]

use callstats::models::*;
use std::collections::BTreeMap;

pub fn pts(raw: &[(i64, f64)]) -> Vec<SeriesPoint> {
    raw.iter().map(|&(t, v)| SeriesPoint::new(t, v)).collect()
}

pub fn report(report_type: &str, fields: &[(&str, FieldValue)]) -> ReportFields {
    ReportFields {
        report_type: report_type.to_string(),
        fields: fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    }
}

pub fn num(v: f64) -> FieldValue {
    FieldValue::Number(serde_json::Number::from_f64(v).expect("finite test value"))
}

pub fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

pub fn snapshot(
    timestamp: i64,
    connection_id: Option<&str>,
    reports: &[(&str, ReportFields)],
) -> StatSnapshot {
    StatSnapshot {
        timestamp,
        connection_id: connection_id.map(str::to_string),
        data: reports
            .iter()
            .map(|(id, r)| (id.to_string(), r.clone()))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// Snapshot with one outbound-rtp report carrying `bytesSent`.
pub fn bytes_sent(timestamp: i64, bytes: f64) -> StatSnapshot {
    snapshot(
        timestamp,
        Some("pc-1"),
        &[("out-1", report("outbound-rtp", &[("bytesSent", num(bytes))]))],
    )
}

pub fn track(participant_id: &str, join_time: i64, leave_time: Option<i64>) -> ParticipantTrack {
    ParticipantTrack {
        participant_id: participant_id.to_string(),
        display_name: participant_id.to_uppercase(),
        role: "participant".into(),
        join_time,
        leave_time,
        media_events: vec![],
    }
}

pub fn media(timestamp: i64, kind: MediaEventKind) -> MediaEvent {
    MediaEvent { timestamp, kind }
}
