//! Errors raised before a walk starts
//!
//! A running walk never fails on its own; unreadable directories go to the
//! error channel instead.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("path not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("cannot access {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("failed to read ignore file {}: {source}", path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SiftResult<T> = Result<T, SiftError>;
