// Event categories and visual encoding keys

use serde::{Deserialize, Serialize};

use super::CallEvent;

/// Filterable event category. Several raw event types can share one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "bwe_issue")]
    BweIssue,
    #[serde(rename = "ice_restart")]
    IceRestart,
    #[serde(rename = "connectionIssue")]
    ConnectionIssue,
    #[serde(rename = "join")]
    Join,
    #[serde(rename = "screenshare")]
    Screenshare,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::BweIssue,
        Category::IceRestart,
        Category::ConnectionIssue,
        Category::Join,
        Category::Screenshare,
    ];

    /// Wire name, also used as the filter key.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::BweIssue => "bwe_issue",
            Category::IceRestart => "ice_restart",
            Category::ConnectionIssue => "connectionIssue",
            Category::Join => "join",
            Category::Screenshare => "screenshare",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown event category {:?}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    Orange,
    Purple,
    Red,
    Blue,
    Amber,
    Green,
    Gray,
    Teal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKey {
    Diamond,
    Square,
    Triangle,
    Hexagon,
    ArrowRight,
    ArrowLeft,
    Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub visible: bool,
    pub category: Option<Category>,
    pub label: &'static str,
    pub color_key: Option<ColorKey>,
    pub shape_key: Option<ShapeKey>,
}

impl Classification {
    pub fn hidden(label: &'static str) -> Self {
        Self {
            visible: false,
            category: None,
            label,
            color_key: None,
            shape_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEvent<'a> {
    pub event: &'a CallEvent,
    pub classification: Classification,
}

impl ClassifiedEvent<'_> {
    pub fn is_visible(&self) -> bool {
        self.classification.visible
    }
}
