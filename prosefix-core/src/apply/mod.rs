//! The file-edit pipeline: route each alert to its edit, apply span edits
//! right-to-left within a line, line edits afterwards, then rewrite the file.

pub mod outcome;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::ProsefixConfig;
use crate::edit;
use crate::errors::{ApplyError, ConfigError, EditError, PipelineError};
use crate::report::{Alert, ValeReport};
use crate::rules::{load_heading_exceptions, EditKind, RuleSet, Scope};

pub use outcome::{ApplyOutcome, FileReport, LineChange};

/// One line of a flagged file, with its trailing-newline state tracked
/// separately so edits can never eat a line break.
struct SourceLine {
    text: String,
    had_newline: bool,
}

/// Applies a Vale report to the files it flags.
#[derive(Debug)]
pub struct Applicator {
    rules: RuleSet,
    heading_exceptions: Vec<String>,
    dry_run: bool,
}

impl Applicator {
    /// Build an applicator from resolved configuration: bind the rule
    /// table and load heading-case exceptions once for the whole run.
    pub fn from_config(config: &ProsefixConfig) -> Result<Self, ConfigError> {
        let rules = config.rule_set()?;

        let heading_exceptions = match config.style.heading_exceptions_path() {
            Some(path) => load_heading_exceptions(&path),
            None => {
                if !config.rules.heading_case.is_empty() {
                    warn!("heading_case checks bound but style.heading_exceptions is not set");
                }
                Vec::new()
            }
        };

        Ok(Self {
            rules,
            heading_exceptions,
            dry_run: config.apply.effective_dry_run(),
        })
    }

    #[cfg(test)]
    fn new(rules: RuleSet, heading_exceptions: Vec<String>, dry_run: bool) -> Self {
        Self {
            rules,
            heading_exceptions,
            dry_run,
        }
    }

    /// Apply every alert in the report. Files are processed in path order;
    /// a failure in one file never stops the others.
    pub fn apply(&self, report: &ValeReport) -> ApplyOutcome {
        let mut outcome = ApplyOutcome::default();
        for (path, alerts) in report.iter() {
            self.apply_file(path, alerts, &mut outcome);
        }
        outcome
    }

    /// Apply one file's alerts and record the result in `outcome`.
    fn apply_file(&self, path: &str, alerts: &[Alert], outcome: &mut ApplyOutcome) {
        info!(file = path, alerts = alerts.len(), "editing file");

        let content = match std::fs::read_to_string(Path::new(path)) {
            Ok(content) => content,
            Err(e) => {
                let error = if e.kind() == ErrorKind::NotFound {
                    ApplyError::FileNotFound {
                        path: path.to_string(),
                    }
                } else {
                    ApplyError::ReadFailed {
                        path: path.to_string(),
                        message: e.to_string(),
                    }
                };
                warn!(file = path, "skipping file: {error}");
                outcome.files_failed += 1;
                outcome.add_error(error.into());
                return;
            }
        };

        let mut lines: Vec<SourceLine> = content
            .split_inclusive('\n')
            .map(|raw| SourceLine {
                text: raw.strip_suffix('\n').unwrap_or(raw).to_string(),
                had_newline: raw.ends_with('\n'),
            })
            .collect();

        let mut report = FileReport::new(path);

        // Group alerts by 1-based line; BTreeMap keeps line order stable.
        let mut by_line: BTreeMap<u32, Vec<&Alert>> = BTreeMap::new();
        for alert in alerts {
            if alert.line == 0 {
                warn!(file = path, check = %alert.check, "alert without a line, skipping");
                report.edits_skipped += 1;
                continue;
            }
            by_line.entry(alert.line).or_default().push(alert);
        }

        for (line_no, line_alerts) in by_line {
            let idx = (line_no - 1) as usize;
            if idx >= lines.len() {
                let error = ApplyError::LineOutOfRange {
                    path: path.to_string(),
                    line: line_no,
                    line_count: lines.len(),
                };
                warn!(file = path, "skipping alerts: {error}");
                report.edits_skipped += line_alerts.len();
                outcome.add_error(error.into());
                continue;
            }

            let original = lines[idx].text.clone();
            let revised = self.edit_line(path, line_no, &original, &line_alerts, &mut report, outcome);
            if revised != original {
                report.lines_changed += 1;
                report.changes.push(outcome::LineChange {
                    line: line_no,
                    before: original,
                    after: revised.clone(),
                });
                lines[idx].text = revised;
            }
        }

        if report.lines_changed > 0 && !self.dry_run {
            let mut rebuilt = String::with_capacity(content.len());
            for line in &lines {
                rebuilt.push_str(&line.text);
                if line.had_newline {
                    rebuilt.push('\n');
                }
            }
            match std::fs::write(Path::new(path), rebuilt) {
                Ok(()) => {
                    report.written = true;
                    info!(file = path, lines = report.lines_changed, "rewrote file");
                }
                Err(e) => {
                    let error = ApplyError::WriteFailed {
                        path: path.to_string(),
                        message: e.to_string(),
                    };
                    warn!(file = path, "{error}");
                    outcome.add_error(error.into());
                }
            }
        } else if report.lines_changed > 0 {
            info!(file = path, lines = report.lines_changed, "dry run, file left untouched");
        }

        outcome.files.push(report);
    }

    /// Apply all of one line's alerts: span edits right-to-left, then each
    /// requested line edit once, spacing before trailing whitespace.
    fn edit_line(
        &self,
        path: &str,
        line_no: u32,
        line: &str,
        alerts: &[&Alert],
        report: &mut FileReport,
        outcome: &mut ApplyOutcome,
    ) -> String {
        let mut span_edits: Vec<(&Alert, EditKind)> = Vec::new();
        let mut wants_spacing = false;
        let mut wants_trailing = false;

        for &alert in alerts {
            match self.rules.lookup(&alert.check) {
                Some(kind) if kind.scope() == Scope::Span => span_edits.push((alert, kind)),
                Some(EditKind::Spacing) => wants_spacing = true,
                Some(EditKind::TrailingWhitespace) => wants_trailing = true,
                Some(_) => unreachable!("line-scoped kinds are handled above"),
                None => {
                    warn!(file = path, line = line_no, check = %alert.check, "no binding for check, skipping");
                    report.edits_skipped += 1;
                }
            }
        }

        // Right-to-left keeps earlier spans valid while later ones change
        // the line length.
        span_edits.sort_by(|a, b| b.0.span.0.cmp(&a.0.span.0));

        let mut current = line.to_string();
        for (alert, kind) in span_edits {
            debug!(file = path, line = line_no, check = %alert.check, span = ?alert.span, "span edit");
            match self.apply_span_edit(&current, alert, kind) {
                Ok(revised) => {
                    current = revised;
                    report.edits_applied += 1;
                }
                Err(source) => {
                    report.edits_skipped += 1;
                    outcome.add_error(PipelineError::Edit {
                        file: path.to_string(),
                        line: line_no,
                        check: alert.check.clone(),
                        source,
                    });
                }
            }
        }

        if wants_spacing {
            debug!(file = path, line = line_no, "line edit: spacing");
            current = edit::normalize_spacing(&current);
            report.edits_applied += 1;
        }
        if wants_trailing {
            debug!(file = path, line = line_no, "line edit: trailing whitespace");
            current = edit::strip_trailing_whitespace(&current);
            report.edits_applied += 1;
        }

        current
    }

    fn apply_span_edit(&self, line: &str, alert: &Alert, kind: EditKind) -> Result<String, EditError> {
        match kind {
            EditKind::Substitute => {
                let replacement =
                    alert
                        .replacement()
                        .ok_or_else(|| EditError::MissingReplacement {
                            check: alert.check.clone(),
                        })?;
                edit::substitute(line, alert.span, replacement)
            }
            EditKind::HeadingPunctuation => edit::strip_heading_punctuation(line, alert.span),
            EditKind::HeadingCase => {
                edit::sentence_case_heading(line, alert.span, &self.heading_exceptions)
            }
            EditKind::Spacing | EditKind::TrailingWhitespace => {
                unreachable!("line-scoped kinds never reach apply_span_edit")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::report::{Action, Severity};

    fn rules() -> RuleSet {
        RuleSet::from_config(&RulesConfig {
            substitute: vec!["Test.Sub".to_string()],
            heading_punct: vec!["Test.HeadPunct".to_string()],
            heading_case: vec!["Test.HeadCase".to_string()],
            spacing: vec!["Test.Spacing".to_string()],
            trailing_whitespace: vec!["Test.Eol".to_string()],
        })
        .unwrap()
    }

    fn alert(check: &str, line: u32, span: (u32, u32), replacement: Option<&str>) -> Alert {
        Alert {
            check: check.to_string(),
            line,
            span,
            message: String::new(),
            severity: Severity::Warning,
            matched: String::new(),
            action: replacement.map(|r| Action {
                name: "replace".to_string(),
                params: Some(vec![r.to_string()]),
            }),
            description: String::new(),
            link: String::new(),
        }
    }

    #[test]
    fn span_edits_apply_right_to_left() {
        let applicator = Applicator::new(rules(), Vec::new(), false);
        let mut report = FileReport::new("test.md");
        let mut outcome = ApplyOutcome::default();

        // "do not do that if it is not needed"
        //  1-based: "do not" at 1-6, "is not" at 22-27
        let line = "do not do that if it is not needed";
        let a1 = alert("Test.Sub", 1, (1, 6), Some("don't"));
        let a2 = alert("Test.Sub", 1, (22, 27), Some("isn't"));
        let revised =
            applicator.edit_line("test.md", 1, line, &[&a1, &a2], &mut report, &mut outcome);

        assert_eq!(revised, "don't do that if it isn't needed");
        assert_eq!(report.edits_applied, 2);
        assert!(outcome.is_clean());
    }

    #[test]
    fn line_edits_run_once_after_span_edits() {
        let applicator = Applicator::new(rules(), Vec::new(), false);
        let mut report = FileReport::new("test.md");
        let mut outcome = ApplyOutcome::default();

        let line = "it is not done ,trust me   ";
        let a1 = alert("Test.Sub", 1, (4, 9), Some("isn't"));
        // Two spacing alerts on the same line still run the edit once.
        let s1 = alert("Test.Spacing", 1, (15, 16), None);
        let s2 = alert("Test.Spacing", 1, (16, 17), None);
        let e1 = alert("Test.Eol", 1, (26, 27), None);
        let revised = applicator.edit_line(
            "test.md",
            1,
            line,
            &[&a1, &s1, &s2, &e1],
            &mut report,
            &mut outcome,
        );

        assert_eq!(revised, "it isn't done, trust me");
        // One substitution, one spacing pass, one trailing pass.
        assert_eq!(report.edits_applied, 3);
    }

    #[test]
    fn unbound_and_broken_alerts_are_skipped_not_fatal() {
        let applicator = Applicator::new(rules(), Vec::new(), false);
        let mut report = FileReport::new("test.md");
        let mut outcome = ApplyOutcome::default();

        let line = "nothing to see";
        let unbound = alert("Unknown.Check", 1, (1, 7), None);
        let missing = alert("Test.Sub", 1, (1, 7), None); // no Params
        let oob = alert("Test.Sub", 1, (10, 99), Some("x"));
        let revised = applicator.edit_line(
            "test.md",
            1,
            line,
            &[&unbound, &missing, &oob],
            &mut report,
            &mut outcome,
        );

        assert_eq!(revised, line);
        assert_eq!(report.edits_applied, 0);
        assert_eq!(report.edits_skipped, 3);
        assert_eq!(outcome.errors.len(), 2); // unbound check is a warn, not an error
    }

    #[test]
    fn from_config_rejects_conflicting_bindings() {
        let config = crate::config::ProsefixConfig::from_toml(
            r#"
[rules]
substitute = ["Test.Sub"]
spacing = ["Test.Sub"]
"#,
        )
        .unwrap();

        let err = Applicator::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }
}
