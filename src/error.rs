//! Structural errors at the ingestion boundary. Everything past the boundary
//! recovers locally and reports `models::Diagnostic` instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{kind} payload must be a JSON object")]
    PayloadNotAnObject { kind: &'static str },

    #[error("{kind} must be a JSON array")]
    NotAnArray { kind: &'static str },

    #[error("{kind} #{index} is not a JSON object")]
    NotAnObject { kind: &'static str, index: usize },

    #[error("malformed {kind}: {source}")]
    Malformed {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
