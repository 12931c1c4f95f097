//! Pipeline errors and non-fatal error collection.

use super::{ApplyError, ConfigError, EditError, ReportError};

/// Errors that can occur during a fix run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Apply error: {0}")]
    Apply(#[from] ApplyError),

    #[error("{file}:{line}: edit failed for {check}: {source}")]
    Edit {
        file: String,
        line: u32,
        check: String,
        source: EditError,
    },
}
