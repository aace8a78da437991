// Raw stat snapshots -> per connection / report / field series.
// Snapshot order does not matter; every field is normalized before gap marking.

use std::collections::BTreeMap;

use tracing::{debug, instrument, warn};

use super::normalize::{mark_gaps, normalize};
use super::rate::{self, DroppedPair, RateLimits};
use crate::config::StatsConfig;
use crate::models::{
    ConnectionSeries, Diagnostic, IngestedStats, ReportSeriesSet, SeriesKey, SeriesPoint,
    StatSnapshot,
};

/// Suffix of the derived rate field, e.g. `bytesSent_in_bits/s`.
pub const RATE_SUFFIX: &str = "_in_bits/s";

pub fn rate_field_name(field: &str) -> String {
    format!("{}{}", field, RATE_SUFFIX)
}

#[derive(Default)]
struct RawReport {
    report_type: String,
    fields: BTreeMap<String, Vec<SeriesPoint>>,
}

/// Groups snapshots by connection and report and builds one series per field,
/// adding derived rate series for the configured cumulative counters.
#[instrument(skip_all, fields(snapshots_count = snapshots.len()))]
pub fn ingest_snapshots(snapshots: &[StatSnapshot], config: &StatsConfig) -> IngestedStats {
    let mut diagnostics = Vec::new();
    let mut raw: BTreeMap<String, BTreeMap<String, RawReport>> = BTreeMap::new();

    for snapshot in snapshots {
        let connection_id = snapshot
            .connection_id
            .as_deref()
            .unwrap_or(&config.default_connection_id);
        let reports = raw.entry(connection_id.to_string()).or_default();

        for (report_id, report) in &snapshot.data {
            if config.is_descriptor_type(&report.report_type) {
                continue;
            }
            let entry = reports.entry(report_id.clone()).or_default();
            if entry.report_type.is_empty() {
                entry.report_type = report.report_type.clone();
            }
            for (field, value) in &report.fields {
                if !is_metric_field(config, &report.report_type, field) {
                    continue;
                }
                match value.as_number() {
                    Some(v) if v.is_finite() => entry
                        .fields
                        .entry(field.clone())
                        .or_default()
                        .push(SeriesPoint::new(snapshot.timestamp, v)),
                    // Non-numeric strings are descriptors unless the field was numeric before.
                    None if !entry.fields.contains_key(field) => {}
                    _ => {
                        debug!(
                            connection = connection_id,
                            report = %report_id,
                            field = %field,
                            timestamp = snapshot.timestamp,
                            "invalid sample dropped"
                        );
                        diagnostics.push(Diagnostic::InvalidSample {
                            key: SeriesKey::new(connection_id, report_id, field),
                            timestamp: snapshot.timestamp,
                        });
                    }
                }
            }
        }
    }

    let limits = RateLimits::from(config);
    let mut connections = BTreeMap::new();
    let mut series_count = 0usize;
    for (connection_id, reports) in raw {
        let mut built = BTreeMap::new();
        for (report_id, report) in reports {
            let set = build_report(
                &connection_id,
                &report_id,
                report,
                config,
                &limits,
                &mut diagnostics,
            );
            series_count += set.fields.len();
            built.insert(report_id, set);
        }
        connections.insert(connection_id, ConnectionSeries { reports: built });
    }

    debug!(
        connections = connections.len(),
        series = series_count,
        diagnostics = diagnostics.len(),
        "stat snapshots ingested"
    );

    IngestedStats {
        connections,
        raw_snapshots: snapshots.to_vec(),
        diagnostics,
    }
}

fn is_metric_field(config: &StatsConfig, report_type: &str, field: &str) -> bool {
    if report_type == "ssrc" && field == "ssrc" {
        return false;
    }
    !config.ignored_fields.iter().any(|f| f == field)
}

fn build_report(
    connection_id: &str,
    report_id: &str,
    report: RawReport,
    config: &StatsConfig,
    limits: &RateLimits,
    diagnostics: &mut Vec<Diagnostic>,
) -> ReportSeriesSet {
    let mut fields = BTreeMap::new();
    for (field, samples) in report.fields {
        let normalized = normalize(&samples);

        if config.is_rate_field(&field) {
            let derived = rate::compute(&normalized, limits);
            let key = SeriesKey::new(connection_id, report_id, &field);
            for dropped in derived.dropped {
                diagnostics.push(dropped_pair_diagnostic(&key, dropped));
            }
            // Fewer than two usable samples: no rate series at all.
            if !derived.samples.is_empty() {
                fields.insert(rate_field_name(&field), derived.samples);
            }
        }

        let step = config.is_step_field(&field);
        fields.insert(
            field,
            mark_gaps(&normalized, config.gap_threshold_ms, step),
        );
    }
    ReportSeriesSet {
        report_type: report.report_type,
        fields,
    }
}

fn dropped_pair_diagnostic(key: &SeriesKey, dropped: DroppedPair) -> Diagnostic {
    match dropped {
        DroppedPair::DegenerateInterval { timestamp } => {
            debug!(
                connection = %key.connection_id,
                report = %key.report_id,
                field = %key.field,
                timestamp,
                "degenerate interval; rate pair dropped"
            );
            Diagnostic::DegenerateInterval {
                key: key.clone(),
                timestamp,
            }
        }
        DroppedPair::OutOfRange { timestamp, rate } => {
            warn!(
                connection = %key.connection_id,
                report = %key.report_id,
                field = %key.field,
                timestamp,
                rate,
                "rate out of range; pair dropped"
            );
            Diagnostic::OutOfRangeRate {
                key: key.clone(),
                timestamp,
                rate,
            }
        }
    }
}
