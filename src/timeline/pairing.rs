// Start/stop pairing for screenshare and dominant-speaker intervals.

use crate::models::{IntervalKind, ParticipantTrack};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairedInterval {
    pub start: i64,
    /// `None` when no later stop exists.
    pub stop: Option<i64>,
}

/// Greedy left-to-right pairing: each start takes the first unused stop that
/// is strictly later. A stop is never used twice.
pub fn pair_intervals(starts: &[i64], stops: &[i64]) -> Vec<PairedInterval> {
    let mut starts = starts.to_vec();
    let mut stops = stops.to_vec();
    starts.sort_unstable();
    stops.sort_unstable();

    let mut used = vec![false; stops.len()];
    starts
        .into_iter()
        .map(|start| {
            let stop = stops
                .iter()
                .enumerate()
                .find(|&(i, &stop)| !used[i] && stop > start)
                .map(|(i, &stop)| {
                    used[i] = true;
                    stop
                });
            PairedInterval { start, stop }
        })
        .collect()
}

/// Pairs a track's media events of one kind.
pub fn track_intervals(track: &ParticipantTrack, kind: IntervalKind) -> Vec<PairedInterval> {
    let mut starts = Vec::new();
    let mut stops = Vec::new();
    for e in &track.media_events {
        match e.kind.interval_edge() {
            Some((k, true)) if k == kind => starts.push(e.timestamp),
            Some((k, false)) if k == kind => stops.push(e.timestamp),
            _ => {}
        }
    }
    pair_intervals(&starts, &stops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_stop_then_open_start() {
        let out = pair_intervals(&[10, 60], &[50]);
        assert_eq!(
            out,
            vec![
                PairedInterval {
                    start: 10,
                    stop: Some(50)
                },
                PairedInterval {
                    start: 60,
                    stop: None
                },
            ]
        );
    }

    #[test]
    fn stop_at_same_timestamp_is_not_used() {
        let out = pair_intervals(&[10], &[10, 20]);
        assert_eq!(out[0].stop, Some(20));
    }

    #[test]
    fn stop_is_never_reused() {
        let out = pair_intervals(&[10, 20], &[30]);
        assert_eq!(out[0].stop, Some(30));
        assert_eq!(out[1].stop, None);
    }

    #[test]
    fn stops_before_any_start_are_ignored() {
        let out = pair_intervals(&[100], &[5, 150]);
        assert_eq!(out[0].stop, Some(150));
    }
}
