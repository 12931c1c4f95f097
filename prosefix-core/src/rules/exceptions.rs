//! Heading-case exceptions from Vale style rule files.
//!
//! Vale capitalization rules carry an `exceptions:` list of words that keep
//! their casing (product names, acronyms). We read the same `.yml` file the
//! linter uses rather than duplicating the list.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// The subset of a Vale rule file we care about.
#[derive(Debug, Default, Deserialize)]
struct StyleRule {
    #[serde(default)]
    exceptions: Vec<String>,
}

/// Load the `exceptions` list from a Vale style rule `.yml`.
///
/// A missing or unparseable file is a warning, not a failure: the run
/// continues with sentence-casing applied to every word, which is what the
/// linter itself falls back to.
pub fn load_heading_exceptions(path: &Path) -> Vec<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unable to read style rule, no heading exceptions");
            return Vec::new();
        }
    };

    match serde_yaml::from_str::<StyleRule>(&content) {
        Ok(rule) => rule.exceptions,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unable to parse style rule, no heading exceptions");
            Vec::new()
        }
    }
}
