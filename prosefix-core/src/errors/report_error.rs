//! Vale report loading errors.

/// Errors that can occur while loading a Vale JSON report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read report {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to parse report {path}: {message}")]
    ParseError { path: String, message: String },
}
