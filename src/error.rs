//! Error types for the CV generation pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Content loading errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Required content file not found: {0}")]
    Missing(PathBuf),

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Content I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build/orchestration errors
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Unknown variant: {0}. Run `cvgen variants` to list configured variants.")]
    UnknownVariant(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write output {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
