//! Vale JSON report model.
//!
//! Mirrors the shape of `vale --output=JSON`: a map from file path
//! (exactly as Vale printed it) to the alerts raised in that file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::errors::ReportError;

/// A parsed Vale report. Iteration order follows the `BTreeMap`, so runs
/// over the same report are deterministic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValeReport(pub BTreeMap<String, Vec<Alert>>);

/// One linter finding: the rule that fired and where.
///
/// `Line` is 1-based; `Span` is a pair of 1-based, inclusive character
/// positions within that line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Alert {
    #[serde(rename = "Check")]
    pub check: String,
    #[serde(rename = "Line")]
    pub line: u32,
    #[serde(rename = "Span")]
    pub span: (u32, u32),
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Severity")]
    pub severity: Severity,
    #[serde(rename = "Match")]
    pub matched: String,
    #[serde(rename = "Action")]
    pub action: Option<Action>,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            check: String::new(),
            line: 0,
            span: (0, 0),
            message: String::new(),
            severity: Severity::Suggestion,
            matched: String::new(),
            action: None,
            description: String::new(),
            link: String::new(),
        }
    }
}

/// The fix Vale suggests for an alert, when the rule defines one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Action {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Params")]
    pub params: Option<Vec<String>>,
}

/// Vale alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Suggestion,
    Warning,
    Error,
}

impl Alert {
    /// The first `Action.Params` entry, i.e. the replacement text for
    /// substitution rules.
    pub fn replacement(&self) -> Option<&str> {
        self.action
            .as_ref()
            .and_then(|a| a.params.as_deref())
            .and_then(|p| p.first())
            .map(String::as_str)
    }
}

impl ValeReport {
    /// Parse a report from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(|e| ReportError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load and parse a report from disk.
    pub fn from_path(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReportError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ReportError::ReadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;
        serde_json::from_str(&content).map_err(|e| ReportError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Number of flagged files.
    pub fn file_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of alerts across all files.
    pub fn alert_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Iterate over `(file path, alerts)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Alert])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
