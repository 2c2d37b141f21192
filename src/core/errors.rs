//! FXS-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, SweepError>;

/// Top-level error type for fixture-sweeper.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("[FXS-1001] cannot determine project root: {details}")]
    RootResolve { details: String },

    #[error("[FXS-2001] failed to list {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[FXS-3001] failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[FXS-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },
}

impl SweepError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RootResolve { .. } => "FXS-1001",
            Self::List { .. } => "FXS-2001",
            Self::Serialization { .. } => "FXS-2101",
            Self::Remove { .. } => "FXS-3001",
        }
    }

    /// Convenience constructor for discovery IO errors with a known path.
    #[must_use]
    pub fn list(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::List {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for removal failures with a known path.
    #[must_use]
    pub fn remove(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Remove {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for SweepError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}
