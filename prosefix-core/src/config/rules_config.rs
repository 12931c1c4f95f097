//! Check-ID binding configuration.

use serde::{Deserialize, Serialize};

/// Which Vale check IDs route to which edit kind.
///
/// Check IDs are the `Style.Rule` names Vale emits in the `Check` field,
/// e.g. `Google.WordList`. A check that appears in none of the lists is
/// skipped during application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Checks fixed by replacing the span with the alert's suggestion
    /// (contractions, word lists).
    pub substitute: Vec<String>,
    /// Checks fixed by stripping trailing punctuation from a heading.
    pub heading_punct: Vec<String>,
    /// Checks fixed by sentence-casing a heading.
    pub heading_case: Vec<String>,
    /// Checks fixed by normalizing spacing across the line.
    pub spacing: Vec<String>,
    /// Checks fixed by stripping trailing whitespace from the line.
    pub trailing_whitespace: Vec<String>,
}

impl RulesConfig {
    /// Total number of configured check IDs, duplicates included.
    pub fn binding_count(&self) -> usize {
        self.substitute.len()
            + self.heading_punct.len()
            + self.heading_case.len()
            + self.spacing.len()
            + self.trailing_whitespace.len()
    }
}
