//! The fixed table of edit kinds and the check-ID bindings that route
//! Vale alerts to them.
//!
//! This is deliberately not a rule engine: the set of transformations is a
//! closed enum, and configuration only decides which Vale checks map to
//! which transformation.

pub mod exceptions;

use std::collections::HashMap;

use crate::config::RulesConfig;
use crate::errors::ConfigError;

pub use exceptions::load_heading_exceptions;

/// The transformations prosefix knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// Replace the flagged span with the alert's suggested text.
    Substitute,
    /// Strip trailing punctuation from a heading span.
    HeadingPunctuation,
    /// Sentence-case a heading span, preserving exception words.
    HeadingCase,
    /// Normalize spacing around punctuation across the whole line.
    Spacing,
    /// Strip trailing whitespace from the whole line.
    TrailingWhitespace,
}

/// Whether an edit rewrites only the flagged span or the whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Span,
    Line,
}

impl EditKind {
    /// Span edits apply right-to-left within a line; line edits run once
    /// afterwards regardless of how many alerts requested them.
    pub fn scope(self) -> Scope {
        match self {
            EditKind::Substitute | EditKind::HeadingPunctuation | EditKind::HeadingCase => {
                Scope::Span
            }
            EditKind::Spacing | EditKind::TrailingWhitespace => Scope::Line,
        }
    }
}

/// Maps Vale check IDs (e.g. `Google.WordList`) to edit kinds.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    bindings: HashMap<String, EditKind>,
}

impl RuleSet {
    /// Build a rule set from configured bindings.
    ///
    /// A check ID bound to two different kinds is a configuration error:
    /// the run would otherwise depend on binding order.
    pub fn from_config(rules: &RulesConfig) -> Result<Self, ConfigError> {
        let mut bindings = HashMap::new();
        let groups: [(&[String], EditKind); 5] = [
            (rules.substitute.as_slice(), EditKind::Substitute),
            (rules.heading_punct.as_slice(), EditKind::HeadingPunctuation),
            (rules.heading_case.as_slice(), EditKind::HeadingCase),
            (rules.spacing.as_slice(), EditKind::Spacing),
            (
                rules.trailing_whitespace.as_slice(),
                EditKind::TrailingWhitespace,
            ),
        ];

        for (checks, kind) in groups {
            for check in checks {
                if let Some(previous) = bindings.insert(check.clone(), kind) {
                    if previous != kind {
                        return Err(ConfigError::ValidationFailed {
                            field: "rules".to_string(),
                            message: format!(
                                "check '{check}' is bound to both {previous:?} and {kind:?}"
                            ),
                        });
                    }
                }
            }
        }

        Ok(Self { bindings })
    }

    /// Look up the edit kind for a Vale check ID.
    /// `None` means the check has no binding and its alerts are skipped.
    pub fn lookup(&self, check: &str) -> Option<EditKind> {
        self.bindings.get(check).copied()
    }

    /// Number of bound check IDs.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when no check is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
