// Stats time series: normalization, rate derivation, ingestion, export

pub mod export;
pub mod ingest;
pub mod normalize;
pub mod rate;

pub use export::export_series;
pub use ingest::{RATE_SUFFIX, ingest_snapshots, rate_field_name};
pub use rate::{DroppedPair, RateLimits, RateSeries};
