// Time series models: samples, per-report series, chart-ready named series

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::{Diagnostic, StatSnapshot};

/// One `(timestamp, value)` sample; `value: None` is a gap marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub timestamp: i64,
    pub value: Option<f64>,
}

impl SeriesPoint {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self {
            timestamp,
            value: Some(value),
        }
    }

    pub fn gap(timestamp: i64) -> Self {
        Self {
            timestamp,
            value: None,
        }
    }

    pub fn is_gap(&self) -> bool {
        self.value.is_none()
    }
}

/// Ordered samples for one (connection, report, field).
pub type ReportSeries = Vec<SeriesPoint>;

/// All series of one report, keyed by field name (derived rate fields included).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSeriesSet {
    pub report_type: String,
    pub fields: BTreeMap<String, ReportSeries>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSeries {
    pub reports: BTreeMap<String, ReportSeriesSet>,
}

impl ConnectionSeries {
    pub fn series(&self, report_id: &str, field: &str) -> Option<&ReportSeries> {
        self.reports.get(report_id)?.fields.get(field)
    }
}

/// Output of stats ingestion: series per connection plus the raw snapshots for inspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestedStats {
    pub connections: BTreeMap<String, ConnectionSeries>,
    pub raw_snapshots: Vec<StatSnapshot>,
    pub diagnostics: Vec<Diagnostic>,
}

impl IngestedStats {
    pub fn series(&self, connection_id: &str, report_id: &str, field: &str) -> Option<&ReportSeries> {
        self.connections.get(connection_id)?.series(report_id, field)
    }
}

/// Initial legend state of a chart trace: `true` or `"legendonly"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    LegendOnly,
}

impl Serialize for Visibility {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Visibility::Visible => s.serialize_bool(true),
            Visibility::LegendOnly => s.serialize_str("legendonly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedSeries {
    pub name: String,
    pub connection_id: String,
    pub report_id: String,
    pub field: String,
    pub x: Vec<i64>,
    pub y: Vec<Option<f64>>,
    pub visible: Visibility,
}
