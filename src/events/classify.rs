// Event classification: ordered rule table, first match wins.

use tracing::debug;

use super::EventFilters;
use crate::models::{
    CallEvent, Category, Classification, ClassifiedEvent, ColorKey, Diagnostic, EventKind,
    NetworkIssue, ShapeKey,
};

struct Rule {
    matches: fn(&EventKind<'_>) -> bool,
    /// `None` hides every event the rule matches.
    category: Option<Category>,
    label: &'static str,
    visual: Option<(ColorKey, ShapeKey)>,
}

const RULES: &[Rule] = &[
    Rule {
        matches: |k| matches!(k, EventKind::NetworkIssue(NetworkIssue::BweIssue)),
        category: Some(Category::BweIssue),
        label: "Bandwidth issue",
        visual: Some((ColorKey::Orange, ShapeKey::Diamond)),
    },
    Rule {
        matches: |k| matches!(k, EventKind::NetworkIssue(NetworkIssue::RemoteSourceSuspended)),
        category: Some(Category::BweIssue),
        label: "Remote source suspended",
        visual: Some((ColorKey::Purple, ShapeKey::Square)),
    },
    Rule {
        matches: |k| matches!(k, EventKind::NetworkIssue(NetworkIssue::RemoteSourceInterrupted)),
        category: Some(Category::BweIssue),
        label: "Remote source interrupted",
        visual: Some((ColorKey::Red, ShapeKey::Triangle)),
    },
    Rule {
        matches: |k| matches!(k, EventKind::NetworkIssue(NetworkIssue::IceRestart)),
        category: Some(Category::IceRestart),
        label: "ICE restart",
        visual: Some((ColorKey::Blue, ShapeKey::Hexagon)),
    },
    Rule {
        matches: |k| matches!(k, EventKind::NetworkIssue(_)),
        category: None,
        label: "Network issue",
        visual: None,
    },
    Rule {
        matches: |k| matches!(k, EventKind::ConnectionIssue),
        category: Some(Category::ConnectionIssue),
        label: "Connection issue",
        visual: Some((ColorKey::Amber, ShapeKey::Hexagon)),
    },
    Rule {
        matches: |k| matches!(k, EventKind::MediaInterruption),
        category: Some(Category::BweIssue),
        label: "Media interruption",
        visual: Some((ColorKey::Orange, ShapeKey::Diamond)),
    },
    Rule {
        matches: |k| matches!(k, EventKind::Join),
        category: Some(Category::Join),
        label: "Joined",
        visual: Some((ColorKey::Green, ShapeKey::ArrowRight)),
    },
    Rule {
        matches: |k| matches!(k, EventKind::Leave),
        category: Some(Category::Join),
        label: "Left",
        visual: Some((ColorKey::Gray, ShapeKey::ArrowLeft)),
    },
    Rule {
        matches: |k| matches!(k, EventKind::Screenshare),
        category: Some(Category::Screenshare),
        label: "Screenshare",
        visual: Some((ColorKey::Teal, ShapeKey::Circle)),
    },
];

/// Visible only when a rule assigns a category and that category is enabled.
/// Unmatched event types are hidden regardless of filters.
pub fn classify(event: &CallEvent, filters: &EventFilters) -> Classification {
    let kind = event.kind();
    let Some(rule) = RULES.iter().find(|r| (r.matches)(&kind)) else {
        return Classification::hidden("Unknown event");
    };
    Classification {
        visible: rule.category.is_some_and(|c| filters.enabled(c)),
        category: rule.category,
        label: rule.label,
        color_key: rule.visual.map(|(color, _)| color),
        shape_key: rule.visual.map(|(_, shape)| shape),
    }
}

pub fn classify_all<'a>(events: &'a [CallEvent], filters: &EventFilters) -> Vec<ClassifiedEvent<'a>> {
    events
        .iter()
        .map(|event| ClassifiedEvent {
            event,
            classification: classify(event, filters),
        })
        .collect()
}

/// One diagnostic per event that no category covers.
pub fn uncategorized_diagnostics(classified: &[ClassifiedEvent<'_>]) -> Vec<Diagnostic> {
    classified
        .iter()
        .filter(|c| c.classification.category.is_none())
        .map(|c| {
            debug!(
                participant = %c.event.participant_id,
                event_type = %c.event.event_type,
                sub_type = ?c.event.sub_type(),
                "uncategorized event hidden"
            );
            Diagnostic::UnknownEventType {
                participant_id: c.event.participant_id.clone(),
                event_type: c.event.event_type.clone(),
                sub_type: c.event.sub_type().map(str::to_string),
                timestamp: c.event.timestamp,
            }
        })
        .collect()
}
