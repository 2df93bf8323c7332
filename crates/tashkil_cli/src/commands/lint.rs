//! Lint command implementation

use std::io::Read;

use miette::{IntoDiagnostic, Result};
use tashkil_core::{FixCoordinator, Linter, LinterConfig};
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::fix::{apply_fixes, output_fix_summary};
use crate::output::output_results;

/// Path shown for text read from standard input.
const STDIN_PATH: &str = "-";

pub fn run_lint(
    cli: &Cli,
    patterns: &[String],
    format: OutputFormat,
    fix: bool,
    dry_run: bool,
    timings: bool,
    stdin: bool,
) -> Result<bool> {
    let mut config = if let Some(ref path) = cli.config {
        LinterConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    if timings {
        config.timings = true;
    }
    let timings_enabled = config.timings;

    let linter = Linter::with_config(config).into_diagnostic()?;

    if stdin {
        return lint_stdin(&linter, format, fix, timings_enabled);
    }

    let (results, failures) = linter.lint_patterns(patterns).into_diagnostic()?;

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to lint:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    if fix {
        let fix_summary = apply_fixes(&linter, &results, dry_run);
        output_fix_summary(&fix_summary, dry_run);

        if dry_run {
            let has_errors = output_results(&results, format, timings_enabled)?;
            return Ok(has_errors || !failures.is_empty());
        }

        // Report what is left after fixing.
        let paths: Vec<_> = results.iter().map(|r| r.path.clone()).collect();
        let (remaining, refailures) = linter.lint_files(&paths).into_diagnostic()?;
        let has_errors = output_results(&remaining, format, timings_enabled)?;
        return Ok(has_errors || !failures.is_empty() || !refailures.is_empty());
    }

    let has_errors = output_results(&results, format, timings_enabled)?;

    Ok(has_errors || !failures.is_empty())
}

/// Lints standard input. With `fix`, prints the fixed text instead of findings.
fn lint_stdin(linter: &Linter, format: OutputFormat, fix: bool, timings: bool) -> Result<bool> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .into_diagnostic()?;

    if fix {
        let outcome = FixCoordinator::new().fix_text(linter, &text);
        info!("Applied {} fix(es)", outcome.fixes_applied);
        print!("{}", outcome.text);

        let remaining = linter.lint_content(STDIN_PATH, &outcome.text);
        return Ok(remaining.has_errors());
    }

    let result = linter.lint_content(STDIN_PATH, &text);
    output_results(&[result], format, timings)
}

pub fn find_config() -> Result<LinterConfig> {
    if let Some(config) = LinterConfig::discover(".").into_diagnostic()? {
        if let Some(ref dir) = config.base_dir {
            info!("Using config from {}", dir.display());
        }
        return Ok(config);
    }

    info!("No config file found, using defaults");
    Ok(LinterConfig::new())
}
