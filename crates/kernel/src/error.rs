//! Library error types.
//!
//! Render-time code never surfaces these to the block pipeline; they are
//! logged and the enhancement is skipped. Fallible host operations and the
//! CLI use them directly.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from host-side operations.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("invalid template part slug: {0:?}")]
    InvalidSlug(String),

    #[error("failed to read template part '{slug}' from {}", .path.display())]
    TemplatePart {
        slug: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("block attributes must be a JSON object")]
    AttributesNotObject,

    #[error("invalid block attributes")]
    InvalidAttributes(#[from] serde_json::Error),

    #[error("unknown block type: {0}")]
    UnknownBlockType(String),
}

/// Result type alias using NavError.
pub type NavResult<T> = Result<T, NavError>;
