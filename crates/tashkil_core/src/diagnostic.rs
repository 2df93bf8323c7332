//! Diagnostic types for lint results.

use serde::{Deserialize, Serialize};
use tashkil_text::{Location, Span};

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
}

impl Severity {
    /// Lowercase label used in output and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A diagnostic message from a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that generated this diagnostic.
    pub rule_id: String,

    /// The diagnostic message.
    pub message: String,

    /// Code-point span in the scanned text.
    pub span: Span,

    /// Line/column location, filled in when linting files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// Optional fix for this diagnostic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            span,
            loc: None,
            severity: Severity::Error,
            fix: None,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }

    /// Sets an auto-fix.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }
}

/// An auto-fix for a diagnostic: replace the code points in `span` with `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fix {
    /// The code-point span to replace.
    pub span: Span,

    /// The replacement text.
    pub text: String,
}

impl Fix {
    /// Creates a new fix.
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }

    /// Creates a fix that deletes a span.
    pub fn delete(span: Span) -> Self {
        Self {
            span,
            text: String::new(),
        }
    }

    /// Returns true if this fix replaces the whole of a text of `len` code points.
    pub fn rewrites_whole_text(&self, len: u32) -> bool {
        self.span.start == 0 && self.span.end == len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tashkil_text::Position;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(
            "no_loose_diacritics",
            "Found loose arabic diacritic.",
            Span::new(4, 6),
        );

        assert_eq!(diag.rule_id, "no_loose_diacritics");
        assert_eq!(diag.message, "Found loose arabic diacritic.");
        assert_eq!(diag.severity, Severity::Error);
        assert!(diag.fix.is_none());
        assert!(diag.loc.is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let loc = Location::new(Position::new(1, 5), Position::new(1, 7));
        let diag = Diagnostic::new("rule", "message", Span::new(4, 6))
            .with_severity(Severity::Warning)
            .with_location(loc)
            .with_fix(Fix::delete(Span::new(5, 6)));

        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.loc, Some(loc));
        assert_eq!(diag.fix, Some(Fix::new(Span::new(5, 6), "")));
    }

    #[test]
    fn test_fix_delete() {
        let fix = Fix::delete(Span::new(5, 15));

        assert_eq!(fix.span, Span::new(5, 15));
        assert!(fix.text.is_empty());
    }

    #[test]
    fn test_fix_rewrites_whole_text() {
        let fix = Fix::new(Span::new(0, 7), "normalized");
        assert!(fix.rewrites_whole_text(7));
        assert!(!fix.rewrites_whole_text(8));
        assert!(!Fix::delete(Span::new(1, 7)).rewrites_whole_text(7));
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::default(), Severity::Error);
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(Severity::Warning.as_str(), "warning");
    }

    #[test]
    fn test_diagnostic_serialization_skips_empty_fields() {
        let diag = Diagnostic::new("no_shadda_with_sukun", "msg", Span::new(2, 4));
        let json = serde_json::to_value(&diag).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "rule_id": "no_shadda_with_sukun",
                "message": "msg",
                "span": { "start": 2, "end": 4 },
                "severity": "error"
            })
        );
    }

    #[test]
    fn test_diagnostic_deserialization() {
        let json = r#"{
            "rule_id": "no_duplicated_diacritics",
            "message": "Found duplicated Arabic diacritic on the same letter.",
            "span": { "start": 9, "end": 12 },
            "fix": { "span": { "start": 11, "end": 12 }, "text": "" }
        }"#;

        let diag: Diagnostic = serde_json::from_str(json).unwrap();

        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.fix, Some(Fix::delete(Span::new(11, 12))));
    }
}
