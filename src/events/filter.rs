// Filter toggles keyed by category name, passed explicitly into classification.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// `{"bwe_issue": true, "join": false, ...}`. A category missing from the map is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, bool>",
    into = "BTreeMap<String, bool>"
)]
pub struct EventFilters(BTreeMap<Category, bool>);

impl EventFilters {
    /// Every category enabled.
    pub fn all_enabled() -> Self {
        Category::ALL.iter().map(|&c| (c, true)).collect()
    }

    pub fn with(mut self, category: Category, enabled: bool) -> Self {
        self.set(category, enabled);
        self
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        self.0.insert(category, enabled);
    }

    pub fn enabled(&self, category: Category) -> bool {
        self.0.get(&category).copied().unwrap_or(false)
    }
}

impl FromIterator<(Category, bool)> for EventFilters {
    fn from_iter<I: IntoIterator<Item = (Category, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<BTreeMap<String, bool>> for EventFilters {
    type Error = String;

    fn try_from(raw: BTreeMap<String, bool>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .map(|(name, enabled)| name.parse::<Category>().map(|c| (c, enabled)))
            .collect()
    }
}

impl From<EventFilters> for BTreeMap<String, bool> {
    fn from(filters: EventFilters) -> Self {
        filters
            .0
            .into_iter()
            .map(|(c, enabled)| (c.as_str().to_string(), enabled))
            .collect()
    }
}
