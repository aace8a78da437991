// Ingested series -> chart traces with default legend visibility.

use crate::config::StatsConfig;
use crate::models::{IngestedStats, NamedSeries, Visibility};

/// One trace per (connection, report, field), ordered by those keys.
pub fn export_series(stats: &IngestedStats, config: &StatsConfig) -> Vec<NamedSeries> {
    let mut out = Vec::new();
    for (connection_id, connection) in &stats.connections {
        for (report_id, report) in &connection.reports {
            for (field, series) in &report.fields {
                let visible = if config.is_visible_by_default(field) {
                    Visibility::Visible
                } else {
                    Visibility::LegendOnly
                };
                out.push(NamedSeries {
                    name: format!("{} {}", report_id, field),
                    connection_id: connection_id.clone(),
                    report_id: report_id.clone(),
                    field: field.clone(),
                    x: series.iter().map(|p| p.timestamp).collect(),
                    y: series.iter().map(|p| p.value).collect(),
                    visible,
                });
            }
        }
    }
    out
}
