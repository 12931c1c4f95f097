//! Top-level prosefix configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ApplyConfig, ReportConfig, RulesConfig, StyleConfig};
use crate::errors::ConfigError;
use crate::rules::RuleSet;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PROSEFIX_*`)
/// 3. Project config (`prosefix.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProsefixConfig {
    pub report: ReportConfig,
    pub style: StyleConfig,
    pub rules: RulesConfig,
    pub apply: ApplyConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub report_path: Option<PathBuf>,
    pub vale_dir: Option<PathBuf>,
    pub dry_run: Option<bool>,
}

impl ProsefixConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join("prosefix.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from an explicit TOML file, then apply env and
    /// CLI layers as in `load`.
    pub fn load_from_file(
        path: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        Self::apply_env_overrides(&mut config);
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Build the rule table from the configured bindings.
    ///
    /// The only cross-field constraint is that a check ID may not be bound
    /// to two different edit kinds; `RuleSet::from_config` detects that.
    pub fn rule_set(&self) -> Result<RuleSet, ConfigError> {
        RuleSet::from_config(&self.rules)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ProsefixConfig) -> Result<(), ConfigError> {
        config.rule_set().map(|_| ())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ProsefixConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: ProsefixConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut ProsefixConfig, other: &ProsefixConfig) {
        // Report
        if other.report.path.is_some() {
            base.report.path = other.report.path.clone();
        }

        // Style
        if other.style.vale_dir.is_some() {
            base.style.vale_dir = other.style.vale_dir.clone();
        }
        if other.style.heading_exceptions.is_some() {
            base.style.heading_exceptions = other.style.heading_exceptions.clone();
        }

        // Rules
        if !other.rules.substitute.is_empty() {
            base.rules.substitute = other.rules.substitute.clone();
        }
        if !other.rules.heading_punct.is_empty() {
            base.rules.heading_punct = other.rules.heading_punct.clone();
        }
        if !other.rules.heading_case.is_empty() {
            base.rules.heading_case = other.rules.heading_case.clone();
        }
        if !other.rules.spacing.is_empty() {
            base.rules.spacing = other.rules.spacing.clone();
        }
        if !other.rules.trailing_whitespace.is_empty() {
            base.rules.trailing_whitespace = other.rules.trailing_whitespace.clone();
        }

        // Apply
        if other.apply.dry_run.is_some() {
            base.apply.dry_run = other.apply.dry_run;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PROSEFIX_REPORT_PATH`, `PROSEFIX_VALE_DIR`, `PROSEFIX_DRY_RUN`.
    fn apply_env_overrides(config: &mut ProsefixConfig) {
        if let Ok(val) = std::env::var("PROSEFIX_REPORT_PATH") {
            config.report.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("PROSEFIX_VALE_DIR") {
            config.style.vale_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("PROSEFIX_DRY_RUN") {
            if let Ok(v) = val.parse::<bool>() {
                config.apply.dry_run = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ProsefixConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.report_path {
            config.report.path = Some(v.clone());
        }
        if let Some(ref v) = cli.vale_dir {
            config.style.vale_dir = Some(v.clone());
        }
        if let Some(v) = cli.dry_run {
            config.apply.dry_run = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
