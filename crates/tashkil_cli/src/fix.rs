//! Fix application logic

use std::path::PathBuf;

use tashkil_core::{FixCoordinator, LintResult, Linter};
use tracing::error;

/// Summary of applied fixes.
pub struct FixSummary {
    pub total_fixes: usize,
    pub files_fixed: usize,
    pub fixes_by_file: Vec<(PathBuf, usize)>,
    pub unconverged: Vec<PathBuf>,
    pub errors: Vec<(PathBuf, String)>,
}

/// Fixes every file that has at least one fixable diagnostic.
///
/// Each file goes through the convergent fix loop, so fixes that only become
/// possible after an earlier pass are applied too.
pub fn apply_fixes(linter: &Linter, results: &[LintResult], dry_run: bool) -> FixSummary {
    let coordinator = FixCoordinator::new();
    let mut summary = FixSummary {
        total_fixes: 0,
        files_fixed: 0,
        fixes_by_file: Vec::new(),
        unconverged: Vec::new(),
        errors: Vec::new(),
    };

    for result in results {
        if result.fixable_count() == 0 {
            continue;
        }

        match coordinator.fix_file(linter, &result.path, dry_run) {
            Ok(outcome) => {
                if !outcome.converged() {
                    summary.unconverged.push(result.path.clone());
                }
                if outcome.fixes_applied > 0 {
                    summary
                        .fixes_by_file
                        .push((result.path.clone(), outcome.fixes_applied));
                    summary.total_fixes += outcome.fixes_applied;
                    summary.files_fixed += 1;
                }
            }
            Err(e) => {
                error!("Failed to fix {}: {}", result.path.display(), e);
                summary.errors.push((result.path.clone(), e.to_string()));
            }
        }
    }

    summary
}

/// Outputs the fix summary.
pub fn output_fix_summary(summary: &FixSummary, dry_run: bool) {
    if summary.total_fixes == 0 && summary.errors.is_empty() {
        println!("No fixable issues found.");
        return;
    }

    if summary.total_fixes > 0 {
        let action = if dry_run { "Would fix" } else { "Fixed" };

        println!(
            "\n{} {} issues in {} files:",
            action, summary.total_fixes, summary.files_fixed
        );
        for (path, count) in &summary.fixes_by_file {
            println!("  {}: {} fixes", path.display(), count);
        }

        if dry_run {
            println!("\nRun without --dry-run to apply fixes.");
        }
    }

    if !summary.unconverged.is_empty() {
        eprintln!("\nFixes did not settle in {} file(s):", summary.unconverged.len());
        for path in &summary.unconverged {
            eprintln!("  {}", path.display());
        }
    }

    if !summary.errors.is_empty() {
        eprintln!("\nFailed to fix {} file(s):", summary.errors.len());
        for (path, err) in &summary.errors {
            eprintln!("  {}: {}", path.display(), err);
        }
    }
}
