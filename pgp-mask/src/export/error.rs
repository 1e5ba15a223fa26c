//! Errors reported by export collaborators.
//!
//! These never reach callers of the exporters; they exist so collaborator
//! implementations have a typed way to fail and so failures log usefully.

use thiserror::Error;

/// Result type alias for export collaborators.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Failure of a clipboard or file-export collaborator.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No clipboard could be reached
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// The clipboard refused the write (permissions, focus, ...)
    #[error("Clipboard write rejected: {0}")]
    ClipboardRejected(String),

    /// The filename does not name a file
    #[error("Invalid export filename: {0:?}")]
    InvalidFilename(String),

    /// Writing the exported file failed
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),
}
