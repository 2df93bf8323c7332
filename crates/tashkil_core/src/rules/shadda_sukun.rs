//! `no_shadda_with_sukun`: shadda and sukun on the same letter.

use std::sync::LazyLock;

use tashkil_text::Pattern;
use tashkil_text::classes::{SHADDA, SUKUN};

use super::{RuleId, class, compile};
use crate::diagnostic::Diagnostic;

const RULE_ID: &str = RuleId::ShaddaWithSukun.name();
const MESSAGE: &str = "Found Shadda combined with Sukun.";

static PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    let shadda = class(&SHADDA);
    let sukun = class(&SUKUN);
    compile(Pattern::new(&format!("{shadda}{sukun}|{sukun}{shadda}")))
});

pub(super) fn check(text: &str) -> Vec<Diagnostic> {
    PATTERN
        .find_matches(text)
        .map(|span| Diagnostic::new(RULE_ID, MESSAGE, span))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tashkil_text::Span;

    #[test]
    fn reports_span_over_both_marks() {
        let diagnostics = check("ضيّْق");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span, Span::new(2, 4));
        assert_eq!(diagnostics[0].message, MESSAGE);
        assert!(diagnostics[0].fix.is_none());
    }

    #[rstest]
    #[case::sukun_first("ضي\u{0652}\u{0651}ق")]
    #[case::isolated_forms("ضي\u{FE7C}\u{FE7E}ق")]
    #[case::medial_sukun("ضي\u{0651}\u{FE7F}ق")]
    fn detects_either_order_and_variants(#[case] text: &str) {
        assert_eq!(check(text).len(), 1);
    }

    #[test]
    fn separate_letters_are_fine() {
        assert!(check("ضيّق مدْرسة").is_empty());
    }
}
