//! Error type definitions for the playlist aggregator
//!
//! Failures in this tool almost always degrade to "skip this unit of work
//! and continue the run"; the error types here exist to keep the categories
//! distinct in logs and to let the driver decide what is skippable.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Source fetching and parsing errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Export writing errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Source handling specific errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// Fetch gave up after exhausting its retry budget
    #[error("Fetch failed after {attempts} attempts: {url}")]
    RetriesExhausted { url: String, attempts: u32 },

    /// Parsing errors for source data
    #[error("Parse error: {source_type} - {message}")]
    ParseError {
        source_type: String,
        message: String,
    },
}

/// Export writing specific errors
#[derive(Error, Debug)]
pub enum ExportError {
    /// Filesystem failures while writing an artifact
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failures
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SourceError {
    /// Create a retries-exhausted error
    pub fn retries_exhausted<U: Into<String>>(url: U, attempts: u32) -> Self {
        Self::RetriesExhausted {
            url: url.into(),
            attempts,
        }
    }

    /// Create a parse error
    pub fn parse_error<S: Into<String>, M: Into<String>>(source_type: S, message: M) -> Self {
        Self::ParseError {
            source_type: source_type.into(),
            message: message.into(),
        }
    }
}

impl ExportError {
    pub fn io<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
