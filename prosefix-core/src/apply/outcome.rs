//! Result of a fix run, with non-fatal error collection.

use crate::errors::PipelineError;

/// One line rewritten during the run, with its content before and after.
/// This is what dry-run shows instead of touching the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based line number.
    pub line: u32,
    pub before: String,
    pub after: String,
}

/// Per-file application summary.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The file path as it appeared in the Vale report.
    pub path: String,
    /// Lines whose content actually changed.
    pub lines_changed: usize,
    /// Edits applied across all lines.
    pub edits_applied: usize,
    /// Alerts skipped (unbound check, bad span, missing replacement,
    /// line out of range).
    pub edits_skipped: usize,
    /// The rewritten lines, in line order.
    pub changes: Vec<LineChange>,
    /// Whether the file was rewritten on disk (always false in dry-run).
    pub written: bool,
}

impl FileReport {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            lines_changed: 0,
            edits_applied: 0,
            edits_skipped: 0,
            changes: Vec::new(),
            written: false,
        }
    }
}

/// Result of a whole-report run. Non-fatal errors accumulate here so a bad
/// alert or an unreadable file never aborts the remaining work.
#[derive(Debug, Default)]
pub struct ApplyOutcome {
    /// Per-file summaries, in report (path) order.
    pub files: Vec<FileReport>,
    /// Files that could not be read at all.
    pub files_failed: usize,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<PipelineError>,
}

impl ApplyOutcome {
    /// Add a non-fatal error to the outcome.
    pub fn add_error(&mut self, error: PipelineError) {
        self.errors.push(error);
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total edits applied across all files.
    pub fn edits_applied(&self) -> usize {
        self.files.iter().map(|f| f.edits_applied).sum()
    }

    /// Total alerts skipped across all files.
    pub fn edits_skipped(&self) -> usize {
        self.files.iter().map(|f| f.edits_skipped).sum()
    }

    /// Files whose content changed.
    pub fn files_changed(&self) -> usize {
        self.files.iter().filter(|f| f.lines_changed > 0).count()
    }

    /// True when every flagged file failed to load.
    pub fn all_files_failed(&self) -> bool {
        self.files_failed > 0 && self.files.is_empty()
    }
}
