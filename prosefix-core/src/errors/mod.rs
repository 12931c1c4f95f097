//! Error handling for prosefix.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod apply_error;
pub mod config_error;
pub mod edit_error;
pub mod pipeline_error;
pub mod report_error;

pub use apply_error::ApplyError;
pub use config_error::ConfigError;
pub use edit_error::EditError;
pub use pipeline_error::PipelineError;
pub use report_error::ReportError;
