// Millisecond timestamps as they arrive from the analysis backend.
// Accepts integers, floats (truncated) and numeric strings.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMillis {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawMillis {
    fn into_millis<E: de::Error>(self) -> Result<i64, E> {
        let float = match self {
            RawMillis::Int(v) => return Ok(v),
            RawMillis::Float(v) => v,
            RawMillis::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid timestamp {:?}", s)))?,
        };
        if !float.is_finite() {
            return Err(E::custom(format!("non-finite timestamp {}", float)));
        }
        let truncated = float.trunc();
        // i64::MAX is not representable; 2^63 is the first value past it.
        if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
            return Err(E::custom(format!("timestamp {} out of range", float)));
        }
        Ok(truncated as i64)
    }
}

pub(crate) fn de_millis<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    RawMillis::deserialize(d)?.into_millis()
}

pub(crate) fn de_opt_millis<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Option::<RawMillis>::deserialize(d)?
        .map(RawMillis::into_millis)
        .transpose()
}

/// Session time window used for the timeline projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBounds {
    #[serde(deserialize_with = "de_millis")]
    pub start_time: i64,
    #[serde(deserialize_with = "de_millis")]
    pub end_time: i64,
}

impl TimeBounds {
    pub fn new(start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
        }
    }
}
