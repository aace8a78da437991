// Per-participant event counts for summary display.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, ClassifiedEvent, ParticipantTrack};

/// Visible events per category. Categories with no events are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts(BTreeMap<Category, usize>);

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        self.0.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.0.iter().map(|(&c, &n)| (c, n))
    }

    fn add(&mut self, category: Category) {
        *self.0.entry(category).or_insert(0) += 1;
    }
}

/// Display bucket for a count: `> 5` severe, `> 0` moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Moderate,
    Severe,
}

impl Severity {
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => Severity::None,
            1..=5 => Severity::Moderate,
            _ => Severity::Severe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub participant_id: String,
    pub display_name: String,
    pub counts: CategoryCounts,
}

/// Counts visible classified events per category.
pub fn count_by_category(events: &[ClassifiedEvent<'_>]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for e in events.iter().filter(|e| e.is_visible()) {
        if let Some(category) = e.classification.category {
            counts.add(category);
        }
    }
    counts
}

/// Counts visible classified events per participant, then per category.
pub fn count_by_participant(events: &[ClassifiedEvent<'_>]) -> BTreeMap<String, CategoryCounts> {
    let mut out: BTreeMap<String, CategoryCounts> = BTreeMap::new();
    for e in events.iter().filter(|e| e.is_visible()) {
        if let Some(category) = e.classification.category {
            out.entry(e.event.participant_id.clone())
                .or_default()
                .add(category);
        }
    }
    out
}

/// One summary per track, in track order; participants without events get empty counts.
pub fn summarize(
    tracks: &[ParticipantTrack],
    events: &[ClassifiedEvent<'_>],
) -> Vec<ParticipantSummary> {
    let mut by_participant = count_by_participant(events);
    tracks
        .iter()
        .map(|t| ParticipantSummary {
            participant_id: t.participant_id.clone(),
            display_name: t.display_name.clone(),
            counts: by_participant
                .remove(&t.participant_id)
                .unwrap_or_default(),
        })
        .collect()
}
