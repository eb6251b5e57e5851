use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading block or shape data from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected layout in {what}: {detail}")]
    Layout { what: &'static str, detail: String },
}
