// Host entry point: validate a session payload, then build every display artifact.
// Pure: the same input, config and filters always produce the same view.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::AppConfig;
use crate::error::{PipelineError, Result};
use crate::events::{self, EventFilters, ParticipantSummary};
use crate::models::{
    CallEvent, Diagnostic, NamedSeries, ParticipantTrack, StatSnapshot, TimeBounds,
    TimelineGeometry, de_millis,
};
use crate::stats;
use crate::timeline::TimelineLayoutEngine;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    #[serde(deserialize_with = "de_millis")]
    pub start_time: i64,
    #[serde(deserialize_with = "de_millis")]
    pub end_time: i64,
    #[serde(default)]
    pub participants: Vec<ParticipantTrack>,
    #[serde(default)]
    pub events: Vec<CallEvent>,
    #[serde(default)]
    pub snapshots: Vec<StatSnapshot>,
}

impl SessionInput {
    pub fn bounds(&self) -> TimeBounds {
        TimeBounds::new(self.start_time, self.end_time)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(value)
    }

    /// Rejects non-object payloads and non-object list elements before deserializing.
    pub fn from_json(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(PipelineError::PayloadNotAnObject { kind: "session" });
        }
        for (key, kind) in [
            ("participants", "participant"),
            ("events", "event"),
            ("snapshots", "snapshot"),
        ] {
            if let Some(list) = value.get(key) {
                check_objects(list, kind)?;
            }
        }
        serde_json::from_value(value).map_err(|source| PipelineError::Malformed {
            kind: "session",
            source,
        })
    }
}

fn check_objects(value: &Value, kind: &'static str) -> Result<()> {
    let items = value
        .as_array()
        .ok_or(PipelineError::NotAnArray { kind })?;
    if let Some(index) = items.iter().position(|v| !v.is_object()) {
        return Err(PipelineError::NotAnObject { kind, index });
    }
    Ok(())
}

fn parse_objects<T: DeserializeOwned>(value: Value, kind: &'static str) -> Result<Vec<T>> {
    check_objects(&value, kind)?;
    serde_json::from_value(value).map_err(|source| PipelineError::Malformed { kind, source })
}

/// Parses a stand-alone snapshot list, e.g. when stats are fetched separately.
pub fn parse_snapshots(value: Value) -> Result<Vec<StatSnapshot>> {
    parse_objects(value, "snapshot")
}

pub fn parse_events(value: Value) -> Result<Vec<CallEvent>> {
    parse_objects(value, "event")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub series: Vec<NamedSeries>,
    /// Raw snapshots as received, for inspection views.
    pub raw_snapshots: Vec<StatSnapshot>,
    pub timeline: TimelineGeometry,
    pub summaries: Vec<ParticipantSummary>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs stats ingestion, event classification, timeline layout and per-participant counts.
#[instrument(skip_all, fields(
    participants_count = input.participants.len(),
    events_count = input.events.len(),
    snapshots_count = input.snapshots.len(),
))]
pub fn build_session_view(
    input: &SessionInput,
    config: &AppConfig,
    filters: &EventFilters,
) -> SessionView {
    let ingested = stats::ingest_snapshots(&input.snapshots, &config.stats);
    let series = stats::export_series(&ingested, &config.stats);

    let classified = events::classify_all(&input.events, filters);
    let layout = TimelineLayoutEngine::new(&config.timeline).layout_classified(
        input.bounds(),
        &input.participants,
        &classified,
    );
    let summaries = events::summarize(&input.participants, &classified);

    let mut diagnostics = ingested.diagnostics;
    diagnostics.extend(events::uncategorized_diagnostics(&classified));
    diagnostics.extend(layout.diagnostics);

    debug!(
        series = series.len(),
        tracks = layout.geometry.tracks.len(),
        diagnostics = diagnostics.len(),
        "session view built"
    );

    SessionView {
        series,
        raw_snapshots: ingested.raw_snapshots,
        timeline: layout.geometry,
        summaries,
        diagnostics,
    }
}
