use std::io;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Disk full: {0}")]
    DiskFull(String),

    /// Dialog dismissed by the user. Never surfaced as a notification.
    #[error("Cancelled")]
    UserCancelled,

    #[error("Editor widget unavailable: {0}")]
    WidgetUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Classify an io error against the path it occurred on.
    pub fn from_io(err: io::Error, path: &Path) -> AppError {
        let p = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => AppError::NotFound(p),
            io::ErrorKind::PermissionDenied => AppError::AccessDenied(p),
            io::ErrorKind::StorageFull => AppError::DiskFull(p),
            _ => AppError::Io(err),
        }
    }

    /// Whether this failure should be swallowed instead of notified.
    pub fn is_silent(&self) -> bool {
        matches!(self, AppError::UserCancelled)
    }
}
