//! Error types for appicons
//!
//! Uses `thiserror` for library errors. Per-output failures have their own
//! error enums next to the ports that produce them (`RasterError`,
//! `PackError`, `FsError`); this type covers run-level failures.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for appicons operations
pub type AppIconsResult<T> = Result<T, AppIconsError>;

/// Main error type for appicons operations
#[derive(Error, Debug)]
pub enum AppIconsError {
    /// The master SVG does not exist at the resolved path
    #[error("source SVG not found at {path}")]
    SourceNotFound { path: PathBuf },

    /// The master SVG exists but could not be read
    #[error("source SVG at {path} could not be read: {message}")]
    SourceUnreadable { path: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppIconsError {
    /// Path the error refers to, when there is one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            AppIconsError::SourceNotFound { path } => Some(path),
            AppIconsError::SourceUnreadable { path, .. } => Some(path),
            AppIconsError::InvalidConfig { file, .. } => Some(file),
            AppIconsError::Io(_) => None,
        }
    }
}
