// Rate derivation from cumulative byte counters

mod common;

use callstats::models::SeriesPoint;
use callstats::stats::rate::{DroppedPair, RateLimits, compute};
use common::pts;

#[test]
fn test_bytes_per_second_to_bits_per_second() {
    let out = compute(&pts(&[(0, 0.0), (1000, 1250.0)]), &RateLimits::default());
    assert_eq!(out.samples, pts(&[(1000, 10_000.0)]));
    assert!(out.dropped.is_empty());
}

#[test]
fn test_same_timestamp_pair_is_dropped() {
    let out = compute(&pts(&[(1000, 100.0), (1000, 200.0)]), &RateLimits::default());
    assert!(out.samples.is_empty());
    assert_eq!(
        out.dropped,
        vec![DroppedPair::DegenerateInterval { timestamp: 1000 }]
    );
}

#[test]
fn test_sub_minimum_interval_is_dropped() {
    let limits = RateLimits {
        min_interval_secs: 0.5,
        ..RateLimits::default()
    };
    let out = compute(&pts(&[(0, 0.0), (100, 1000.0)]), &limits);
    assert!(out.samples.is_empty());
    assert_eq!(out.dropped.len(), 1);
}

#[test]
fn test_counter_reset_is_reported_not_emitted() {
    let out = compute(
        &pts(&[(0, 5000.0), (1000, 100.0), (2000, 1100.0)]),
        &RateLimits::default(),
    );
    assert_eq!(out.samples, pts(&[(2000, 8000.0)]));
    assert!(matches!(
        out.dropped.as_slice(),
        [DroppedPair::OutOfRange { timestamp: 1000, rate }] if *rate < 0.0
    ));
}

#[test]
fn test_rate_above_ceiling_is_dropped() {
    let out = compute(
        &pts(&[(0, 0.0), (1000, 200_000_000.0)]),
        &RateLimits::default(),
    );
    assert!(out.samples.is_empty());
    assert!(matches!(
        out.dropped[0],
        DroppedPair::OutOfRange { timestamp: 1000, .. }
    ));
}

#[test]
fn test_rate_is_rounded_and_keyed_on_later_timestamp() {
    let out = compute(&pts(&[(0, 0.0), (3000, 1.0)]), &RateLimits::default());
    // 8 bits / 3 s = 2.67 -> 3
    assert_eq!(out.samples, pts(&[(3000, 3.0)]));
}

#[test]
fn test_stale_interval_becomes_gap_marker() {
    let out = compute(
        &pts(&[(0, 0.0), (1000, 1000.0), (26_000, 5000.0), (27_000, 6000.0)]),
        &RateLimits::default(),
    );
    assert_eq!(
        out.samples,
        vec![
            SeriesPoint::new(1000, 8000.0),
            SeriesPoint::gap(26_000),
            SeriesPoint::new(27_000, 8000.0),
        ]
    );
}

#[test]
fn test_output_is_at_most_one_shorter_than_input() {
    let input = pts(&[(0, 0.0), (1000, 10.0), (2000, 30.0), (3000, 60.0)]);
    let out = compute(&input, &RateLimits::default());
    assert_eq!(out.samples.len(), input.len() - 1);
    assert!(compute(&input[..1], &RateLimits::default()).samples.is_empty());
    assert!(compute(&[], &RateLimits::default()).samples.is_empty());
}

#[test]
fn test_emitted_rates_are_finite_non_negative_and_bounded() {
    let input = pts(&[
        (0, 0.0),
        (1000, 1_000.0),
        (1500, 500.0),
        (2500, 200_000_000.0),
        (3500, 200_000_100.0),
        (3500, 1.0),
        (4200, 200_001_000.0),
    ]);
    let limits = RateLimits::default();
    let out = compute(&input, &limits);
    for value in out.samples.iter().filter_map(|p| p.value) {
        assert!(value.is_finite());
        assert!(value >= 0.0);
        assert!(value <= limits.max_rate_bps);
    }
}
