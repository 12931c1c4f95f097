//! Configuration system for prosefix.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod apply_config;
pub mod prosefix_config;
pub mod report_config;
pub mod rules_config;
pub mod style_config;

pub use apply_config::ApplyConfig;
pub use prosefix_config::{CliOverrides, ProsefixConfig};
pub use report_config::ReportConfig;
pub use rules_config::RulesConfig;
pub use style_config::StyleConfig;
