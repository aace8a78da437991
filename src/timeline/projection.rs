// Time -> x projection for the timeline canvas.

use serde::Serialize;

use crate::models::TimeBounds;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeProjection {
    pub start_time: i64,
    pub end_time: i64,
    pub left_margin: f64,
    pub width: f64,
}

impl TimeProjection {
    pub fn new(bounds: TimeBounds, left_margin: f64, width: f64) -> Self {
        Self {
            start_time: bounds.start_time,
            end_time: bounds.end_time,
            left_margin,
            width,
        }
    }

    /// Session duration in ms, at least 1. Taken in f64 so any i64 bounds fit.
    fn duration_ms(&self) -> f64 {
        (self.end_time as f64 - self.start_time as f64).max(1.0)
    }

    fn fraction(&self, t: i64) -> f64 {
        (t as f64 - self.start_time as f64) / self.duration_ms()
    }

    /// Unclamped projection; may fall outside `[left_margin, left_margin + width]`.
    pub fn raw_x(&self, t: i64) -> f64 {
        self.left_margin + self.fraction(t) * self.width
    }

    pub fn x(&self, t: i64) -> f64 {
        self.left_margin + self.fraction(t).clamp(0.0, 1.0) * self.width
    }
}
