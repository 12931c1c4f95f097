//! Report location configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where to find the Vale JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Path to the Vale JSON report. Default: `vale_output.json`.
    pub path: Option<PathBuf>,
}

impl ReportConfig {
    /// Returns the effective report path.
    pub fn effective_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| Path::new("vale_output.json").to_path_buf())
    }
}
