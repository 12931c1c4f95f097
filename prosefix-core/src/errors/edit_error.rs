//! Line edit errors.

/// Errors that can occur while applying a single edit to a line.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("Span {start}-{end} is outside the line ({len} chars)")]
    SpanOutOfBounds { start: u32, end: u32, len: usize },

    #[error("Alert for {check} carries no replacement in Action.Params")]
    MissingReplacement { check: String },
}
