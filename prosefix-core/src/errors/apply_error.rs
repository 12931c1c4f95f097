//! File application errors.

/// Errors that can occur while editing a flagged file on disk.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("Flagged file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },

    #[error("{path}: alert targets line {line} but the file has {line_count} lines")]
    LineOutOfRange {
        path: String,
        line: u32,
        line_count: usize,
    },
}
