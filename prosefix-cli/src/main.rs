//! prosefix — apply Vale prose-linter fixes to the files it flags.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

use prosefix_core::{Applicator, ApplyOutcome, CliOverrides, PipelineError, ProsefixConfig, ValeReport};

/// Every flagged file was unreadable.
const EXIT_ALL_FILES_FAILED: u8 = 2;

#[derive(Parser)]
#[command(name = "prosefix", version)]
#[command(about = "Applies Vale prose-linter fixes to the flagged files")]
#[command(
    after_help = "Environment:\n  PROSEFIX_LOG           Log filter (tracing env-filter syntax)\n  PROSEFIX_REPORT_PATH   Vale JSON report path\n  PROSEFIX_VALE_DIR      .vale directory\n  PROSEFIX_DRY_RUN       Set to true to preview without writing"
)]
struct Cli {
    /// Vale JSON report (overrides the configured path)
    report: Option<PathBuf>,

    /// Explicit prosefix.toml (default: ./prosefix.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the .vale directory
    #[arg(long)]
    vale_dir: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log errors only
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    ExitCode::from(run(&cli))
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_env("PROSEFIX_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> u8 {
    let overrides = CliOverrides {
        report_path: cli.report.clone(),
        vale_dir: cli.vale_dir.clone(),
        dry_run: cli.dry_run.then_some(true),
    };

    let config = match load_config(cli, &overrides) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };

    let report_path = config.report.effective_path();
    let report = match ValeReport::from_path(&report_path) {
        Ok(report) => report,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };

    let applicator = match Applicator::from_config(&config) {
        Ok(applicator) => applicator,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };

    let outcome = applicator.apply(&report);
    print_summary(&outcome, config.apply.effective_dry_run());

    if outcome.all_files_failed() {
        EXIT_ALL_FILES_FAILED
    } else {
        0
    }
}

fn load_config(cli: &Cli, overrides: &CliOverrides) -> Result<ProsefixConfig, prosefix_core::ConfigError> {
    match &cli.config {
        Some(path) => ProsefixConfig::load_from_file(path, Some(overrides)),
        None => ProsefixConfig::load(Path::new("."), Some(overrides)),
    }
}

fn print_summary(outcome: &ApplyOutcome, dry_run: bool) {
    for file in &outcome.files {
        let status = if file.written {
            "written"
        } else if file.lines_changed > 0 && dry_run {
            "would change"
        } else {
            "unchanged"
        };
        println!(
            "{}: {} line(s), {} edit(s) applied, {} skipped [{}]",
            file.path, file.lines_changed, file.edits_applied, file.edits_skipped, status
        );

        if dry_run {
            for change in &file.changes {
                println!("  {}:{}", file.path, change.line);
                println!("    - {}", change.before);
                println!("    + {}", change.after);
            }
        }
    }

    for error in &outcome.errors {
        if let PipelineError::Apply(e) = error {
            println!("skipped: {e}");
        }
    }

    println!(
        "{} file(s) changed, {} edit(s) applied, {} skipped, {} file(s) unreadable",
        outcome.files_changed(),
        outcome.edits_applied(),
        outcome.edits_skipped(),
        outcome.files_failed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parses_report_and_flags() {
        let cli = Cli::try_parse_from([
            "prosefix",
            "vale_output.json",
            "--vale-dir",
            "docs/.vale",
            "--dry-run",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.report, Some(PathBuf::from("vale_output.json")));
        assert_eq!(cli.vale_dir, Some(PathBuf::from("docs/.vale")));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn report_argument_is_optional() {
        let cli = Cli::try_parse_from(["prosefix"]).unwrap();
        assert!(cli.report.is_none());
        assert!(!cli.dry_run);
    }

    fn cli_for(dir: &std::path::Path, report: &std::path::Path, dry_run: bool) -> Cli {
        let config = dir.join("prosefix.toml");
        fs::write(
            &config,
            r#"
[rules]
substitute = ["Styleguide.Contractions"]
"#,
        )
        .unwrap();

        Cli {
            report: Some(report.to_path_buf()),
            config: Some(config),
            vale_dir: None,
            dry_run,
            verbose: 0,
            quiet: true,
        }
    }

    #[test]
    fn run_edits_the_flagged_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let doc = dir.path().join("guide.md");
        fs::write(&doc, "it is not fine\n").unwrap();

        let report = dir.path().join("vale_output.json");
        fs::write(
            &report,
            format!(
                r#"{{"{}": [{{"Check": "Styleguide.Contractions", "Line": 1, "Span": [4, 9],
                     "Severity": "warning", "Message": "", "Match": "is not",
                     "Action": {{"Name": "replace", "Params": ["isn't"]}}}}]}}"#,
                doc.display()
            ),
        )
        .unwrap();

        let code = run(&cli_for(dir.path(), &report, false));
        assert_eq!(code, 0);
        assert_eq!(fs::read_to_string(&doc).unwrap(), "it isn't fine\n");
    }

    #[test]
    fn run_exits_2_when_every_file_is_unreadable() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("gone.md");

        let report = dir.path().join("vale_output.json");
        fs::write(
            &report,
            format!(
                r#"{{"{}": [{{"Check": "Styleguide.Contractions", "Line": 1, "Span": [1, 5],
                     "Severity": "warning", "Message": "", "Match": "it is",
                     "Action": {{"Name": "replace", "Params": ["it's"]}}}}]}}"#,
                missing.display()
            ),
        )
        .unwrap();

        let code = run(&cli_for(dir.path(), &report, false));
        assert_eq!(code, EXIT_ALL_FILES_FAILED);
    }

    #[test]
    fn run_exits_1_when_the_report_is_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let report = dir.path().join("nope.json");
        let code = run(&cli_for(dir.path(), &report, false));
        assert_eq!(code, 1);
    }
}
