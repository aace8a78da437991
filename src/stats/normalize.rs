// Series cleanup: ordering, dedup, step extension and gap markers for one metric.

use std::collections::BTreeMap;

use crate::models::SeriesPoint;

/// Sorts by timestamp, drops missing and non-finite values, then keeps the
/// last value seen for each timestamp.
pub fn normalize(samples: &[SeriesPoint]) -> Vec<SeriesPoint> {
    let mut by_ts: BTreeMap<i64, f64> = BTreeMap::new();
    for s in samples {
        if let Some(v) = s.value.filter(|v| v.is_finite()) {
            by_ts.insert(s.timestamp, v);
        }
    }
    by_ts
        .into_iter()
        .map(|(ts, v)| SeriesPoint::new(ts, v))
        .collect()
}

/// Inserts `(next - 1, previous)` before every value change so a step series
/// holds its value until the jump. Expects normalized input.
pub fn extend_steps(series: &[SeriesPoint]) -> Vec<SeriesPoint> {
    if series.len() < 2 {
        return series.to_vec();
    }
    let mut out = Vec::with_capacity(series.len() * 2);
    for pair in series.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        out.push(prev);
        let hold_ts = next.timestamp.saturating_sub(1);
        if prev.value != next.value && hold_ts > prev.timestamp {
            out.push(SeriesPoint {
                timestamp: hold_ts,
                value: prev.value,
            });
        }
    }
    out.extend(series.last().copied());
    out
}

/// `normalize` followed by `extend_steps`.
pub fn normalize_step(samples: &[SeriesPoint]) -> Vec<SeriesPoint> {
    extend_steps(&normalize(samples))
}

/// Splits a normalized series wherever consecutive samples are more than
/// `gap_threshold_ms` apart and joins the runs with gap markers. The marker
/// takes the timestamp of the sample it precedes. Step extension, when
/// requested, never bridges a gap.
pub fn mark_gaps(series: &[SeriesPoint], gap_threshold_ms: i64, step: bool) -> Vec<SeriesPoint> {
    let mut out = Vec::with_capacity(series.len());
    let runs = series.chunk_by(|a, b| {
        b.timestamp.saturating_sub(a.timestamp) <= gap_threshold_ms
    });
    for (i, run) in runs.enumerate() {
        if i > 0 {
            out.push(SeriesPoint::gap(run[0].timestamp));
        }
        if step {
            out.extend(extend_steps(run));
        } else {
            out.extend_from_slice(run);
        }
    }
    out
}
