//! # tashkil_core
//!
//! Arabic diacritic linter engine.
//!
//! This crate provides:
//! - The built-in rules ([`RuleId`])
//! - The [`Linter`], which runs enabled rules in parallel
//! - Configuration loading ([`LinterConfig`], [`RuleConfig`])
//! - Fix application and the convergent [`FixCoordinator`]
//!
//! ## Example
//!
//! ```rust
//! use tashkil_core::{FixCoordinator, Linter, RuleConfig};
//!
//! let linter = Linter::new(RuleConfig::default());
//!
//! let diagnostics = linter.lint_text("أهلا ً وسهلا ً بكم.");
//! assert_eq!(diagnostics.len(), 2);
//!
//! let outcome = FixCoordinator::new().fix_text(&linter, "أهلا ً وسهلا ً بكم.");
//! assert_eq!(outcome.text, "أهلا  وسهلا  بكم.");
//! ```

mod config;
mod diagnostic;
mod error;
mod fix;
mod fixer;
mod linter;
mod result;
pub mod rules;

pub use config::{
    DEFAULT_MAX_FILE_SIZE, LinterConfig, REMOVE_LOOSE_DIACRITICS, RuleConfig, RuleOption,
    RuleSetting,
};
pub use diagnostic::{Diagnostic, Fix, Severity};
pub use error::LinterError;
pub use fix::{FixCoordinator, FixOutcome, FixResult};
pub use fixer::{FixerResult, apply_fixes_to_content, apply_fixes_to_file};
pub use linter::{LintFilesResult, Linter};
pub use result::{LintResult, LintSummary};
pub use rules::{RuleId, UnknownRule};

pub use tashkil_text::{Location, Position, Span};
