//! Error types for loading and validating segment plans.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no segments configured")]
    NoSegments,

    #[error("segment '{name}' has a zero duration")]
    ZeroDuration { name: String },

    #[error("invalid duration '{text}'")]
    InvalidDuration { text: String },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} already exists (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },
}
