use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while persisting report artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The reports directory could not be created.
    #[error("failed to create reports directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input path has no file name to derive artifact names from.
    #[error("input path has no file name: {path}")]
    NoFileName { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ReportError>;
