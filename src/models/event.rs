// Call events and their tagged view for classification

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::time::de_millis;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallEvent {
    #[serde(deserialize_with = "de_millis")]
    pub timestamp: i64,
    pub participant_id: String,
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<EventMetadata>,
}

/// Subtypes carried by `networkIssue` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkIssue<'a> {
    BweIssue,
    RemoteSourceSuspended,
    RemoteSourceInterrupted,
    IceRestart,
    /// Unrecognized or missing subtype.
    Other(Option<&'a str>),
}

/// Tagged view over `(eventType, metadata.subType)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind<'a> {
    NetworkIssue(NetworkIssue<'a>),
    ConnectionIssue,
    MediaInterruption,
    Join,
    Leave,
    Screenshare,
    Unknown(&'a str),
}

impl CallEvent {
    pub fn new(timestamp: i64, participant_id: &str, event_type: &str) -> Self {
        Self {
            timestamp,
            participant_id: participant_id.to_string(),
            event_type: event_type.to_string(),
            metadata: None,
        }
    }

    /// Same event with `metadata.subType` set.
    pub fn with_sub_type(mut self, sub_type: &str) -> Self {
        self.metadata.get_or_insert_with(Default::default).sub_type = Some(sub_type.to_string());
        self
    }

    pub fn sub_type(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.sub_type.as_deref())
    }

    pub fn kind(&self) -> EventKind<'_> {
        match self.event_type.as_str() {
            "networkIssue" => EventKind::NetworkIssue(match self.sub_type() {
                Some("bwe_issue") => NetworkIssue::BweIssue,
                Some("remoteSourceSuspended") => NetworkIssue::RemoteSourceSuspended,
                Some("remoteSourceInterrupted") => NetworkIssue::RemoteSourceInterrupted,
                Some("ice_restart") => NetworkIssue::IceRestart,
                other => NetworkIssue::Other(other),
            }),
            "connectionIssue" => EventKind::ConnectionIssue,
            "mediaInterruption" => EventKind::MediaInterruption,
            "join" => EventKind::Join,
            "leave" => EventKind::Leave,
            "screenshare" => EventKind::Screenshare,
            other => EventKind::Unknown(other),
        }
    }
}
