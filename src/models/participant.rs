// Participant tracks: session span plus media start/stop events

use serde::{Deserialize, Serialize};

use super::time::{de_millis, de_opt_millis};

/// Which kind of paired interval a media event opens or closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntervalKind {
    Screenshare,
    DominantSpeaker,
}

/// Media event type; serializes to camelCase JSON (e.g. "screenshareStart").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaEventKind {
    ScreenshareStart,
    ScreenshareStop,
    DominantSpeakerStart,
    DominantSpeakerStop,
    #[serde(other)]
    Other,
}

impl MediaEventKind {
    /// `(kind, is_start)` for interval edges, `None` for anything else.
    pub fn interval_edge(self) -> Option<(IntervalKind, bool)> {
        match self {
            MediaEventKind::ScreenshareStart => Some((IntervalKind::Screenshare, true)),
            MediaEventKind::ScreenshareStop => Some((IntervalKind::Screenshare, false)),
            MediaEventKind::DominantSpeakerStart => Some((IntervalKind::DominantSpeaker, true)),
            MediaEventKind::DominantSpeakerStop => Some((IntervalKind::DominantSpeaker, false)),
            MediaEventKind::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEvent {
    #[serde(deserialize_with = "de_millis")]
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: MediaEventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantTrack {
    pub participant_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(deserialize_with = "de_millis")]
    pub join_time: i64,
    #[serde(default, deserialize_with = "de_opt_millis")]
    pub leave_time: Option<i64>,
    #[serde(default)]
    pub media_events: Vec<MediaEvent>,
}

impl ParticipantTrack {
    /// Where this participant's track ends: leave time, or the session end.
    pub fn end_time(&self, session_end: i64) -> i64 {
        self.leave_time.unwrap_or(session_end)
    }
}
