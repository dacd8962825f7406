//! Error types for the reporting pipeline.
//!
//! Every variant is scoped to a single report request; none of them is
//! fatal to the process and a caller may simply retry with fresh input.

use std::path::PathBuf;

/// Failures while aggregating or rendering a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A record reached aggregation without a status tag
    #[error("record #{index} ({identifier}) has no status; refusing to build a partial report")]
    InputShape { index: usize, identifier: String },

    /// Document generation failed
    #[error("failed to render report document: {0}")]
    Render(String),

    #[error("failed to write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::fmt::Error> for ReportError {
    fn from(e: std::fmt::Error) -> Self {
        ReportError::Render(e.to_string())
    }
}

/// Failures while loading records from a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(String),

    #[error("invalid record payload from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures while resolving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Invalid(String),
}
