//! Vale style directory configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where the Vale styles live and which rule file carries the
/// heading-case exceptions list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StyleConfig {
    /// Path to the `.vale` directory (parent of the `styles` tree).
    /// Default: `.vale`.
    pub vale_dir: Option<PathBuf>,
    /// Path to the capitalization rule `.yml` whose `exceptions` list is
    /// honored when sentence-casing headings. Relative paths resolve
    /// against `vale_dir`.
    pub heading_exceptions: Option<PathBuf>,
}

impl StyleConfig {
    /// Returns the effective `.vale` directory.
    pub fn effective_vale_dir(&self) -> PathBuf {
        self.vale_dir
            .clone()
            .unwrap_or_else(|| Path::new(".vale").to_path_buf())
    }

    /// Returns the resolved heading-exceptions rule path, if configured.
    pub fn heading_exceptions_path(&self) -> Option<PathBuf> {
        self.heading_exceptions.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                self.effective_vale_dir().join(p)
            }
        })
    }
}
