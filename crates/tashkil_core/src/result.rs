//! Lint result types.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::diagnostic::{Diagnostic, Severity};

/// Result of linting a single file (or standard input).
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Path to the linted file; `-` for standard input.
    pub path: PathBuf,

    /// Diagnostics found in the file.
    pub diagnostics: Vec<Diagnostic>,

    /// Time spent per rule, when timings are enabled.
    pub timings: BTreeMap<&'static str, Duration>,
}

impl LintResult {
    /// Creates a new lint result.
    pub fn new(path: PathBuf, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            path,
            diagnostics,
            timings: BTreeMap::new(),
        }
    }

    /// Returns true if there are any diagnostics.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Returns true if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns the number of diagnostics with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Returns the number of diagnostics carrying a fix.
    pub fn fixable_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.fix.is_some()).count()
    }
}

/// Summary of linting multiple files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LintSummary {
    /// Total files processed.
    pub files_checked: usize,

    /// Files with at least one diagnostic.
    pub files_with_diagnostics: usize,

    /// Error diagnostics.
    pub errors: usize,

    /// Warning diagnostics.
    pub warnings: usize,

    /// Diagnostics that carry a fix.
    pub fixable: usize,
}

impl LintSummary {
    /// Creates a summary from results.
    pub fn from_results(results: &[LintResult]) -> Self {
        let mut summary = Self::default();

        for result in results {
            summary.files_checked += 1;
            if result.has_diagnostics() {
                summary.files_with_diagnostics += 1;
            }
            summary.errors += result.count(Severity::Error);
            summary.warnings += result.count(Severity::Warning);
            summary.fixable += result.fixable_count();
        }

        summary
    }

    /// Total diagnostics.
    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Fix;
    use pretty_assertions::assert_eq;
    use tashkil_text::Span;

    fn diagnostic(severity: Severity, fixable: bool) -> Diagnostic {
        let d = Diagnostic::new("rule", "msg", Span::new(0, 1)).with_severity(severity);
        if fixable {
            d.with_fix(Fix::delete(Span::new(0, 1)))
        } else {
            d
        }
    }

    #[test]
    fn test_lint_result_counts() {
        let result = LintResult::new(
            PathBuf::from("a.txt"),
            vec![
                diagnostic(Severity::Error, true),
                diagnostic(Severity::Warning, false),
            ],
        );

        assert!(result.has_diagnostics());
        assert!(result.has_errors());
        assert_eq!(result.count(Severity::Warning), 1);
        assert_eq!(result.fixable_count(), 1);
    }

    #[test]
    fn test_warnings_only_is_not_an_error() {
        let result = LintResult::new(
            PathBuf::from("a.txt"),
            vec![diagnostic(Severity::Warning, false)],
        );
        assert!(!result.has_errors());
    }

    #[test]
    fn test_summary_from_results() {
        let results = vec![
            LintResult::new(PathBuf::from("a.txt"), vec![]),
            LintResult::new(
                PathBuf::from("b.txt"),
                vec![
                    diagnostic(Severity::Error, true),
                    diagnostic(Severity::Error, false),
                    diagnostic(Severity::Warning, false),
                ],
            ),
        ];

        let summary = LintSummary::from_results(&results);

        assert_eq!(
            summary,
            LintSummary {
                files_checked: 2,
                files_with_diagnostics: 1,
                errors: 2,
                warnings: 1,
                fixable: 1,
            }
        );
        assert_eq!(summary.total(), 3);
    }
}
