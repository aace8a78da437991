// Cumulative byte counter -> bits/second rate series.

use crate::config::StatsConfig;
use crate::models::SeriesPoint;

/// Policy limits for rate derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimits {
    pub min_interval_secs: f64,
    pub max_rate_bps: f64,
    /// Pairs further apart than this yield a gap marker instead of a rate.
    pub gap_threshold_ms: i64,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self::from(&StatsConfig::default())
    }
}

impl From<&StatsConfig> for RateLimits {
    fn from(c: &StatsConfig) -> Self {
        Self {
            min_interval_secs: c.min_interval_secs,
            max_rate_bps: c.max_rate_bps,
            gap_threshold_ms: c.gap_threshold_ms,
        }
    }
}

/// A consecutive pair that produced no output sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DroppedPair {
    DegenerateInterval { timestamp: i64 },
    OutOfRange { timestamp: i64, rate: f64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSeries {
    pub samples: Vec<SeriesPoint>,
    pub dropped: Vec<DroppedPair>,
}

/// Derives bits/second from a normalized cumulative byte series. Each output
/// sample is keyed on the later timestamp of its pair. Pairs touching a gap
/// marker are skipped.
pub fn compute(series: &[SeriesPoint], limits: &RateLimits) -> RateSeries {
    let mut out = RateSeries::default();
    for pair in series.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        let (Some(prev_value), Some(value)) = (prev.value, cur.value) else {
            continue;
        };
        let dt_ms = cur.timestamp.saturating_sub(prev.timestamp);
        let dt_secs = dt_ms as f64 / 1000.0;
        if dt_secs <= 0.0 || dt_secs < limits.min_interval_secs {
            out.dropped.push(DroppedPair::DegenerateInterval {
                timestamp: cur.timestamp,
            });
            continue;
        }
        if dt_ms > limits.gap_threshold_ms {
            out.samples.push(SeriesPoint::gap(cur.timestamp));
            continue;
        }
        let rate = ((value - prev_value) * 8.0 / dt_secs).round();
        if rate.is_nan() || rate < 0.0 || rate > limits.max_rate_bps {
            out.dropped.push(DroppedPair::OutOfRange {
                timestamp: cur.timestamp,
                rate,
            });
            continue;
        }
        // -0.0 -> 0.0
        out.samples.push(SeriesPoint::new(cur.timestamp, rate + 0.0));
    }
    out
}
