//! Core linter engine.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use tashkil_text::LineIndex;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{LinterConfig, RuleConfig};
use crate::diagnostic::Diagnostic;
use crate::rules::RuleId;
use crate::{LintResult, LinterError};

/// Result type for `lint_files` and `lint_patterns`.
///
/// Contains a tuple of:
/// - Successful lint results
/// - Failed files with their errors (path and error)
pub type LintFilesResult = Result<(Vec<LintResult>, Vec<(PathBuf, LinterError)>), LinterError>;

/// The core linter engine.
///
/// Runs the enabled rules over text and, for the CLI, discovers and reads
/// files.
#[derive(Debug, Clone)]
pub struct Linter {
    /// Rule switches and severities.
    rules: RuleConfig,
    /// File-level configuration.
    config: LinterConfig,
    /// Include glob patterns.
    include_globs: Option<GlobSet>,
    /// Exclude glob patterns.
    exclude_globs: Option<GlobSet>,
}

impl Linter {
    /// Creates a linter for text, with no file configuration.
    pub fn new(rules: RuleConfig) -> Self {
        Self {
            rules,
            config: LinterConfig::new(),
            include_globs: None,
            exclude_globs: None,
        }
    }

    /// Creates a linter from a configuration file's contents.
    pub fn with_config(config: LinterConfig) -> Result<Self, LinterError> {
        let include_globs = Self::build_globset(&config.include)?;
        let exclude_globs = Self::build_globset(&config.exclude)?;
        let rules = config.rule_config();

        debug!("Using configuration {}", config.hash());

        Ok(Self {
            rules,
            config,
            include_globs,
            exclude_globs,
        })
    }

    /// Builds a GlobSet from patterns.
    fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, LinterError> {
        if patterns.is_empty() {
            return Ok(None);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| LinterError::config(format!("Invalid glob pattern: {}", e)))?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))?;

        Ok(Some(globset))
    }

    /// Returns the rule configuration.
    pub fn rule_config(&self) -> &RuleConfig {
        &self.rules
    }

    /// Returns the file-level configuration.
    pub fn config(&self) -> &LinterConfig {
        &self.config
    }

    /// Lints `text` with every enabled rule.
    ///
    /// Rules run in parallel; findings are returned grouped by rule in
    /// [`RuleId::ALL`] order, each group in text order.
    pub fn lint_text(&self, text: &str) -> Vec<Diagnostic> {
        let per_rule: Vec<Vec<Diagnostic>> = self
            .rules
            .enabled_rules()
            .par_iter()
            .map(|rule| {
                let diagnostics = rule.check(text, &self.rules);
                debug!("{}: {} finding(s)", rule, diagnostics.len());
                diagnostics
            })
            .collect();

        per_rule.into_iter().flatten().collect()
    }

    /// Like [`Linter::lint_text`], also measuring the time spent in each rule.
    pub fn lint_text_timed(
        &self,
        text: &str,
    ) -> (Vec<Diagnostic>, BTreeMap<&'static str, Duration>) {
        let per_rule: Vec<(RuleId, Vec<Diagnostic>, Duration)> = self
            .rules
            .enabled_rules()
            .par_iter()
            .map(|rule| {
                let start = Instant::now();
                let diagnostics = rule.check(text, &self.rules);
                (*rule, diagnostics, start.elapsed())
            })
            .collect();

        let mut timings = BTreeMap::new();
        let mut diagnostics = Vec::new();
        for (rule, found, elapsed) in per_rule {
            debug!("{}: {} finding(s) in {:?}", rule, found.len(), elapsed);
            timings.insert(rule.name(), elapsed);
            diagnostics.extend(found);
        }
        (diagnostics, timings)
    }

    /// Lints already-loaded content and attaches line/column locations.
    pub fn lint_content(&self, path: impl Into<PathBuf>, content: &str) -> LintResult {
        let (diagnostics, timings) = if self.config.timings {
            self.lint_text_timed(content)
        } else {
            (self.lint_text(content), BTreeMap::new())
        };

        let index = LineIndex::new(content);
        let diagnostics = diagnostics
            .into_iter()
            .map(|d| {
                let loc = index.location(d.span);
                d.with_location(loc)
            })
            .collect();

        let mut result = LintResult::new(path.into(), diagnostics);
        result.timings = timings;
        result
    }

    /// Reads and lints a single file.
    pub fn lint_file(&self, path: &Path) -> Result<LintResult, LinterError> {
        debug!("Linting {}", path.display());

        let metadata = fs::metadata(path)
            .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))?;
        if metadata.len() > self.config.max_file_size {
            return Err(LinterError::file(format!(
                "{} is {} bytes, larger than max_file_size ({} bytes)",
                path.display(),
                metadata.len(),
                self.config.max_file_size
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))?;

        Ok(self.lint_content(path, &content))
    }

    /// Lints a list of files in parallel using rayon.
    ///
    /// Returns a tuple of (successful results, failed files with errors).
    pub fn lint_files(&self, paths: &[PathBuf]) -> LintFilesResult {
        let results: Vec<Result<LintResult, (PathBuf, LinterError)>> = paths
            .par_iter()
            .map(|path| self.lint_file(path).map_err(|e| (path.clone(), e)))
            .collect();

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(lint_result) => successes.push(lint_result),
                Err((path, error)) => {
                    warn!("Failed to lint {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        Ok((successes, failures))
    }

    /// Lints files matching the given patterns, walking from the current directory.
    pub fn lint_patterns(&self, patterns: &[String]) -> LintFilesResult {
        let files = self.discover_files(Path::new("."), patterns)?;
        self.lint_files(&files)
    }

    /// Discovers files under `root` matching the given patterns.
    ///
    /// A pattern naming an existing file selects it directly. Any other pattern
    /// is a glob matched against paths relative to `root`. Walked files are
    /// filtered by the configured include and exclude globs.
    pub fn discover_files(
        &self,
        root: &Path,
        patterns: &[String],
    ) -> Result<Vec<PathBuf>, LinterError> {
        let mut files = Vec::new();
        let mut globs = GlobSetBuilder::new();
        let mut has_globs = false;

        for pattern in patterns {
            let direct = root.join(pattern);
            if direct.is_file() {
                files.push(direct);
                continue;
            }
            let glob = Glob::new(pattern).map_err(|e| {
                LinterError::config(format!("Invalid pattern '{}': {}", pattern, e))
            })?;
            globs.add(glob);
            has_globs = true;
        }

        if has_globs {
            let matcher = globs
                .build()
                .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))?;

            for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
                let path = entry.path();
                if !entry.file_type().is_file() {
                    continue;
                }
                let relative = path.strip_prefix(root).unwrap_or(path);
                if !matcher.is_match(relative) {
                    continue;
                }

                if let Some(ref excludes) = self.exclude_globs
                    && excludes.is_match(relative)
                {
                    continue;
                }

                if let Some(ref includes) = self.include_globs
                    && !includes.is_match(relative)
                {
                    continue;
                }

                files.push(path.to_path_buf());
            }
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to lint", files.len());
        Ok(files)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}
