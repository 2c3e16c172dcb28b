//! Error types for file resolution
//!
//! A missing target is not an error: it is reported through
//! [`FoundFile::exists`](crate::FoundFile). Everything here is a failure the
//! caller has to decide about.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for file resolution operations
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),

    #[error("{}", format_traversal_error(path.as_deref(), source))]
    Traversal {
        path: Option<PathBuf>,
        #[source]
        source: walkdir::Error,
    },

    #[error("Cannot inspect {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid finder configuration: {0}")]
    Config(String),
}

impl FinderError {
    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Traversal { path, .. } => path.as_deref(),
            Self::Io { path, .. } => Some(path),
            Self::InvalidPattern(_) | Self::Config(_) => None,
        }
    }
}

impl From<walkdir::Error> for FinderError {
    fn from(source: walkdir::Error) -> Self {
        Self::Traversal {
            path: source.path().map(|p| p.to_path_buf()),
            source,
        }
    }
}

impl From<figment::Error> for FinderError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

fn format_traversal_error(path: Option<&std::path::Path>, source: &walkdir::Error) -> String {
    match path {
        Some(path) => format!("Failed to read {}: {source}", path.display()),
        None => format!("Directory walk failed: {source}"),
    }
}

/// Result type for file resolution operations
pub type Result<T> = std::result::Result<T, FinderError>;
