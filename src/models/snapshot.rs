// Raw peer-connection statistics snapshots

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::time::de_millis;

/// One raw field value inside a report. Browsers emit numbers, numeric strings
/// and descriptor strings; anything else is carried through and ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Kept as received so integers and large identifiers (e.g. ssrc) round-trip exactly.
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Numeric reading of the value, coercing numeric strings.
    /// May return a non-finite number (e.g. "NaN"); callers decide what to drop.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => n.as_f64(),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
            FieldValue::Other(_) => None,
        }
    }
}

/// A named group of fields within one snapshot (one per stream, candidate, transport...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportFields {
    #[serde(rename = "type", default)]
    pub report_type: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSnapshot {
    #[serde(deserialize_with = "de_millis")]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(default)]
    pub data: BTreeMap<String, ReportFields>,
}
