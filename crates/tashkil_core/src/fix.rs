//! Iterative fixing: lint, apply, re-lint until the text stops changing.

use std::fs;
use std::path::Path;

use blake3::Hash;
use tracing::{debug, warn};

use crate::LinterError;
use crate::fixer::apply_fixes_to_content;
use crate::linter::Linter;

/// How an iterative fix run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixResult {
    /// No fixable finding remains.
    Converged { iterations: usize },
    /// The iteration limit was hit while fixes were still being applied.
    MaxIterationsReached { iterations: usize },
    /// The text returned to an earlier state.
    CycleDetected { cycle_length: usize },
}

/// Final text and bookkeeping of a fix run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The fixed text.
    pub text: String,
    /// Total number of fixes applied over all passes.
    pub fixes_applied: usize,
    /// How the run ended.
    pub result: FixResult,
}

impl FixOutcome {
    /// Returns true if the run ended in a state with no fixable finding.
    pub fn converged(&self) -> bool {
        matches!(self.result, FixResult::Converged { .. })
    }
}

/// Drives repeated lint-and-fix passes.
#[derive(Debug, Clone)]
pub struct FixCoordinator {
    max_iterations: usize,
}

impl FixCoordinator {
    /// Default pass limit.
    pub const DEFAULT_MAX_ITERATIONS: usize = 10;

    pub fn new() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the pass limit.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Repeatedly calls `apply_fix` on `content` until it returns `None`.
    ///
    /// Stops early when a content hash repeats or `max_iterations` is reached.
    pub fn apply_fixes_iterative<F>(&self, content: &mut String, mut apply_fix: F) -> FixResult
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut history: Vec<Hash> = vec![hash_content(content)];
        let mut iterations = 0;

        while iterations < self.max_iterations {
            iterations += 1;

            let Some(fixed) = apply_fix(content) else {
                return FixResult::Converged { iterations };
            };

            *content = fixed;
            let current_hash = hash_content(content);

            if let Some(prev_idx) = history.iter().position(|h| *h == current_hash) {
                return FixResult::CycleDetected {
                    cycle_length: history.len() - prev_idx,
                };
            }
            history.push(current_hash);
        }

        FixResult::MaxIterationsReached {
            iterations: self.max_iterations,
        }
    }

    /// Lints and fixes `text` until no fixable finding remains.
    pub fn fix_text(&self, linter: &Linter, text: &str) -> FixOutcome {
        let mut content = text.to_string();
        let mut fixes_applied = 0;

        let result = self.apply_fixes_iterative(&mut content, |current| {
            let diagnostics = linter.lint_text(current);
            let fixed = apply_fixes_to_content(current, &diagnostics);
            if !fixed.modified {
                return None;
            }
            debug!("Fix pass applied {} fix(es)", fixed.fixes_applied);
            fixes_applied += fixed.fixes_applied;
            Some(fixed.fixed_content)
        });

        if let FixResult::MaxIterationsReached { .. } | FixResult::CycleDetected { .. } = result {
            warn!("Fixing stopped before converging: {:?}", result);
        }

        FixOutcome {
            text: content,
            fixes_applied,
            result,
        }
    }

    /// Fixes a file in place. With `dry_run`, the file is left untouched.
    pub fn fix_file(
        &self,
        linter: &Linter,
        path: &Path,
        dry_run: bool,
    ) -> Result<FixOutcome, LinterError> {
        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))?;

        let outcome = self.fix_text(linter, &content);

        if !dry_run && outcome.text != content {
            fs::write(path, &outcome.text).map_err(|e| {
                LinterError::file(format!("Failed to write {}: {}", path.display(), e))
            })?;
        }

        Ok(outcome)
    }
}

impl Default for FixCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_content(content: &str) -> Hash {
    blake3::hash(content.as_bytes())
}
