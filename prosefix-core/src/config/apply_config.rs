//! Application behavior configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the file-edit pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApplyConfig {
    /// Report what would change without touching any file. Default: false.
    pub dry_run: Option<bool>,
}

impl ApplyConfig {
    /// Returns the effective dry-run flag, defaulting to false.
    pub fn effective_dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }
}
