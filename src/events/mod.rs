// Call events: classification, filters, per-participant counts

pub mod classify;
pub mod filter;
pub mod metrics;

pub use classify::{classify, classify_all, uncategorized_diagnostics};
pub use filter::EventFilters;
pub use metrics::{
    CategoryCounts, ParticipantSummary, Severity, count_by_category, count_by_participant,
    summarize,
};
