//! Text output formatter

use std::collections::BTreeMap;
use std::time::Duration;

use tashkil_core::{Diagnostic, LintResult, LintSummary};

pub fn output_text(results: &[LintResult], timings: bool) {
    for result in results {
        for diag in &result.diagnostics {
            println!("{}", format_diagnostic(&result.path.display().to_string(), diag));
        }
    }

    let summary = LintSummary::from_results(results);

    println!();
    println!(
        "Checked {} files, found {} errors and {} warnings ({} fixable)",
        summary.files_checked, summary.errors, summary.warnings, summary.fixable
    );

    if timings {
        output_timings(results);
    }
}

/// `path:line:column  severity  message  [rule]`
fn format_diagnostic(path: &str, diag: &Diagnostic) -> String {
    let (line, column) = match diag.loc {
        Some(loc) => (loc.start.line, loc.start.column),
        None => (1, diag.span.start + 1),
    };
    format!(
        "{}:{}:{}  {}  {}  [{}]",
        path,
        line,
        column,
        diag.severity.as_str(),
        diag.message,
        diag.rule_id
    )
}

fn output_timings(results: &[LintResult]) {
    let mut total_duration = Duration::new(0, 0);
    let mut rule_timings: BTreeMap<&str, Duration> = BTreeMap::new();

    for result in results {
        for (rule, duration) in &result.timings {
            *rule_timings.entry(*rule).or_default() += *duration;
            total_duration += *duration;
        }
    }

    if !rule_timings.is_empty() {
        println!("\nPerformance Timings:");
        println!("{:<30} | {:<15} | {:<10}", "Rule", "Duration", "%");
        println!("{:-<30}-+-{:-<15}-+-{:-<10}", "", "", "");

        let mut sorted_timings: Vec<_> = rule_timings.into_iter().collect();
        sorted_timings.sort_by(|a, b| b.1.cmp(&a.1));

        for (rule, duration) in sorted_timings {
            let percentage = if total_duration.as_secs_f64() > 0.0 {
                (duration.as_secs_f64() / total_duration.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            println!("{:<30} | {:<15?} | {:<10.1}%", rule, duration, percentage);
        }
        println!("{:-<30}-+-{:-<15}-+-{:-<10}", "", "", "");
        println!("{:<30} | {:<15?}", "Total", total_duration);
    }
}
