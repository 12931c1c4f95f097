//! prosefix-core: applies Vale prose-linter fixes to Markdown files
//!
//! Vale reports what is wrong; this crate fixes the mechanical subset:
//! - Report: the Vale `--output=JSON` model
//! - Rules: a fixed table of edit kinds bound to Vale check IDs
//! - Edit: character-span line editors (substitution, heading punctuation,
//!   heading case, spacing, trailing whitespace)
//! - Apply: per-file pipeline — span edits right-to-left, line edits once,
//!   write back in place
//! - Config: layered TOML configuration (CLI > env > project > defaults)

pub mod apply;
pub mod config;
pub mod edit;
pub mod errors;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use apply::{Applicator, ApplyOutcome, FileReport, LineChange};
pub use config::{CliOverrides, ProsefixConfig};
pub use errors::{ApplyError, ConfigError, EditError, PipelineError, ReportError};
pub use report::{Action, Alert, Severity, ValeReport};
pub use rules::{EditKind, RuleSet, Scope};
