// Timeline geometry handed to the rendering layer

use serde::Serialize;

use super::{Category, ColorKey, IntervalKind, ShapeKey};
use crate::timeline::TimeProjection;

/// Horizontal bar covering a participant's time in the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionBar {
    pub start_time: i64,
    pub end_time: i64,
    /// Left edge, clamped to the canvas.
    pub x: f64,
    /// Measured from the unclamped join projection.
    pub width: f64,
    pub y: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalSpan {
    pub kind: IntervalKind,
    pub start_time: i64,
    pub end_time: i64,
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
    pub height: f64,
    /// True when no stop event closed the interval.
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub timestamp: i64,
    pub event_type: String,
    pub category: Category,
    pub x: f64,
    pub y: f64,
    pub shape_key: ShapeKey,
    pub color_key: ColorKey,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRow {
    pub index: usize,
    pub participant_id: String,
    pub display_name: String,
    pub role: String,
    pub y: f64,
    pub height: f64,
    pub session_bar: SessionBar,
    pub intervals: Vec<IntervalSpan>,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGeometry {
    pub width: f64,
    pub height: f64,
    pub projection: TimeProjection,
    pub tracks: Vec<TrackRow>,
}

impl TimelineGeometry {
    pub fn track(&self, participant_id: &str) -> Option<&TrackRow> {
        self.tracks.iter().find(|t| t.participant_id == participant_id)
    }
}
