// Timeline layout: track rows, session bars, interval spans and event markers.
// Pure geometry; no I/O.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use super::pairing::track_intervals;
use super::projection::TimeProjection;
use crate::config::TimelineConfig;
use crate::events::{EventFilters, classify_all};
use crate::models::{
    CallEvent, Category, ClassifiedEvent, Diagnostic, IntervalKind, IntervalSpan, Marker,
    ParticipantTrack, SessionBar, TimeBounds, TimelineGeometry, TrackRow,
};

const INTERVAL_KINDS: [IntervalKind; 2] = [IntervalKind::Screenshare, IntervalKind::DominantSpeaker];

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub geometry: TimelineGeometry,
    /// Unmatched interval starts.
    pub diagnostics: Vec<Diagnostic>,
}

pub struct TimelineLayoutEngine<'a> {
    config: &'a TimelineConfig,
}

impl<'a> TimelineLayoutEngine<'a> {
    pub fn new(config: &'a TimelineConfig) -> Self {
        Self { config }
    }

    /// Classifies `events` with `filters`, then lays them out.
    pub fn layout(
        &self,
        bounds: TimeBounds,
        tracks: &[ParticipantTrack],
        events: &[CallEvent],
        filters: &EventFilters,
    ) -> TimelineLayout {
        let classified = classify_all(events, filters);
        self.layout_classified(bounds, tracks, &classified)
    }

    #[instrument(skip_all, fields(tracks_count = tracks.len(), events_count = events.len()))]
    pub fn layout_classified(
        &self,
        bounds: TimeBounds,
        tracks: &[ParticipantTrack],
        events: &[ClassifiedEvent<'_>],
    ) -> TimelineLayout {
        let c = self.config;
        let projection = TimeProjection::new(bounds, c.left_margin, c.width);

        // Visible events per participant, in timestamp order (stable for ties).
        let mut visible: BTreeMap<&str, Vec<&ClassifiedEvent<'_>>> = BTreeMap::new();
        for e in events.iter().filter(|e| e.is_visible()) {
            visible
                .entry(e.event.participant_id.as_str())
                .or_default()
                .push(e);
        }
        for list in visible.values_mut() {
            list.sort_by_key(|e| e.event.timestamp);
        }

        let mut diagnostics = Vec::new();
        let rows: Vec<TrackRow> = tracks
            .iter()
            .enumerate()
            .map(|(index, track)| {
                let y = self.track_y(index);
                let track_events = visible
                    .get(track.participant_id.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                TrackRow {
                    index,
                    participant_id: track.participant_id.clone(),
                    display_name: track.display_name.clone(),
                    role: track.role.clone(),
                    y,
                    height: c.track_height,
                    session_bar: self.session_bar(&projection, track, bounds.end_time, y),
                    intervals: self.intervals(
                        &projection,
                        track,
                        bounds.end_time,
                        y,
                        &mut diagnostics,
                    ),
                    markers: track_events
                        .iter()
                        .filter_map(|e| self.marker(&projection, track, e, y))
                        .collect(),
                }
            })
            .collect();

        let orphaned = visible
            .keys()
            .filter(|pid| !tracks.iter().any(|t| t.participant_id == **pid))
            .count();
        if orphaned > 0 {
            debug!(participants = orphaned, "events without a track skipped");
        }

        let geometry = TimelineGeometry {
            width: c.left_margin + c.width,
            height: c.top_margin + tracks.len() as f64 * self.row_pitch() + c.bottom_margin,
            projection,
            tracks: rows,
        };
        TimelineLayout {
            geometry,
            diagnostics,
        }
    }

    fn row_pitch(&self) -> f64 {
        self.config.track_height + self.config.track_spacing
    }

    fn track_y(&self, index: usize) -> f64 {
        self.config.top_margin + index as f64 * self.row_pitch()
    }

    fn session_bar(
        &self,
        projection: &TimeProjection,
        track: &ParticipantTrack,
        session_end: i64,
        track_y: f64,
    ) -> SessionBar {
        let end_time = track.end_time(session_end);
        let raw_start = projection.raw_x(track.join_time);
        let end_x = projection.x(end_time);
        SessionBar {
            start_time: track.join_time,
            end_time,
            x: projection.x(track.join_time),
            width: (end_x - raw_start).max(0.0),
            y: track_y + self.config.bar_offset,
            height: self.config.bar_height,
        }
    }

    fn intervals(
        &self,
        projection: &TimeProjection,
        track: &ParticipantTrack,
        session_end: i64,
        track_y: f64,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<IntervalSpan> {
        let track_end = track.end_time(session_end);
        let mut spans = Vec::new();
        for kind in INTERVAL_KINDS {
            for paired in track_intervals(track, kind) {
                let end_time = paired.stop.unwrap_or(track_end);
                if paired.stop.is_none() {
                    debug!(
                        participant = %track.participant_id,
                        interval = ?kind,
                        start_time = paired.start,
                        "interval without stop; extended to track end"
                    );
                    diagnostics.push(Diagnostic::UnmatchedInterval {
                        participant_id: track.participant_id.clone(),
                        interval: kind,
                        start_time: paired.start,
                        end_time,
                    });
                }
                spans.push(IntervalSpan {
                    kind,
                    start_time: paired.start,
                    end_time,
                    x_start: projection.x(paired.start),
                    x_end: projection.x(end_time),
                    y: track_y + self.config.bar_offset,
                    height: self.config.bar_height,
                    open: paired.stop.is_none(),
                });
            }
        }
        spans
    }

    fn marker(
        &self,
        projection: &TimeProjection,
        track: &ParticipantTrack,
        e: &ClassifiedEvent<'_>,
        track_y: f64,
    ) -> Option<Marker> {
        let class = &e.classification;
        let category = class.category?;
        let offset = if category == Category::Join {
            self.config.join_marker_offset
        } else {
            self.config.event_marker_offset
        };
        let name = if track.display_name.is_empty() {
            &track.participant_id
        } else {
            &track.display_name
        };
        Some(Marker {
            timestamp: e.event.timestamp,
            event_type: e.event.event_type.clone(),
            category,
            x: projection.x(e.event.timestamp),
            y: track_y + offset,
            shape_key: class.shape_key?,
            color_key: class.color_key?,
            label: format!("{}: {}", name, class.label),
        })
    }
}
