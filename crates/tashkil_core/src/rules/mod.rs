//! The built-in diacritic rules.
//!
//! Every rule is a pure function from text to diagnostics. [`RuleId::ALL`]
//! fixes the evaluation order, and the linter reports findings in that order.

mod alef_tanween;
mod duplicated_diacritic;
mod loose_diacritic;
mod middle_tanween;
mod presentation_form;
mod shadda_madda;
mod shadda_sukun;

use std::fmt;
use std::str::FromStr;

use tashkil_text::scanner::PatternError;
use tashkil_text::{CodePointSet, Pattern};

use crate::config::RuleConfig;
use crate::diagnostic::{Diagnostic, Severity};

/// Identifies one of the built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    /// A diacritic directly after whitespace.
    LooseDiacritic,
    /// A legacy presentation-form code point.
    PresentationForm,
    /// Shadda next to madda.
    ShaddaWithMadda,
    /// Shadda next to sukun.
    ShaddaWithSukun,
    /// The same diacritic twice on one letter.
    DuplicatedDiacritic,
    /// Tanween followed by more letters of the same word.
    MiddleTanween,
    /// Dammatan or kasratan on alef.
    TanweenOnAlef,
}

impl RuleId {
    /// Number of built-in rules.
    pub const COUNT: usize = 7;

    /// All rules, in evaluation order.
    pub const ALL: [RuleId; Self::COUNT] = [
        RuleId::LooseDiacritic,
        RuleId::PresentationForm,
        RuleId::ShaddaWithMadda,
        RuleId::ShaddaWithSukun,
        RuleId::DuplicatedDiacritic,
        RuleId::MiddleTanween,
        RuleId::TanweenOnAlef,
    ];

    /// The rule's configuration key, also used as `rule_id` in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            RuleId::LooseDiacritic => "no_loose_diacritics",
            RuleId::PresentationForm => "no_presentation_forms",
            RuleId::ShaddaWithMadda => "no_shadda_with_madda",
            RuleId::ShaddaWithSukun => "no_shadda_with_sukun",
            RuleId::DuplicatedDiacritic => "no_duplicated_diacritics",
            RuleId::MiddleTanween => "no_middle_tanween",
            RuleId::TanweenOnAlef => "no_invalid_tanween_on_alef",
        }
    }

    /// One-line description of what the rule reports.
    pub const fn description(self) -> &'static str {
        match self {
            RuleId::LooseDiacritic => "Disallow diacritics that follow whitespace",
            RuleId::PresentationForm => "Disallow legacy Arabic presentation forms",
            RuleId::ShaddaWithMadda => "Disallow shadda combined with madda",
            RuleId::ShaddaWithSukun => "Disallow shadda combined with sukun",
            RuleId::DuplicatedDiacritic => "Disallow the same diacritic twice on one letter",
            RuleId::MiddleTanween => "Disallow tanween before the end of a word",
            RuleId::TanweenOnAlef => "Allow only fathatan as tanween on alef",
        }
    }

    /// Whether the rule can propose fixes.
    pub const fn is_fixable(self) -> bool {
        matches!(
            self,
            RuleId::LooseDiacritic | RuleId::PresentationForm | RuleId::DuplicatedDiacritic
        )
    }

    /// Severity used when the configuration does not override it.
    pub const fn default_severity(self) -> Severity {
        match self {
            RuleId::MiddleTanween => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Position of the rule in [`RuleId::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Runs the rule over `text`.
    pub fn check(self, text: &str, config: &RuleConfig) -> Vec<Diagnostic> {
        let diagnostics = match self {
            RuleId::LooseDiacritic => {
                loose_diacritic::check(text, config.remove_loose_diacritics())
            }
            RuleId::PresentationForm => presentation_form::check(text),
            RuleId::ShaddaWithMadda => shadda_madda::check(text),
            RuleId::ShaddaWithSukun => shadda_sukun::check(text),
            RuleId::DuplicatedDiacritic => duplicated_diacritic::check(text),
            RuleId::MiddleTanween => middle_tanween::check(text),
            RuleId::TanweenOnAlef => alef_tanween::check(text),
        };

        let severity = config.severity(self);
        diagnostics
            .into_iter()
            .map(|d| d.with_severity(severity))
            .collect()
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown rule name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule: {0}")]
pub struct UnknownRule(pub String);

impl FromStr for RuleId {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

/// Compiles a pattern built from the static character classes.
///
/// The classes are fixed data, so a failure here is a bug in this crate.
fn compile(pattern: Result<Pattern, PatternError>) -> Pattern {
    pattern.expect("Invalid built-in rule pattern")
}

/// `[class]` as regex source.
fn class(set: &CodePointSet) -> String {
    set.to_regex_class()
}
