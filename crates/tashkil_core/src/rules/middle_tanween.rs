//! `no_middle_tanween`: tanween followed by more letters of the same word.
//!
//! A tanween is reported when a letter follows it before the next whitespace.
//! Non-letter, non-space characters in between (other marks, digits,
//! punctuation) do not end the word. A word-final alef after the tanween is
//! still reported.

use std::sync::LazyLock;

use tashkil_text::Pattern;
use tashkil_text::classes::TANWEEN;

use super::{RuleId, class, compile};
use crate::diagnostic::Diagnostic;

const RULE_ID: &str = RuleId::MiddleTanween.name();
const MESSAGE: &str = "Found Tanween in the middle of a word.";

static PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    compile(Pattern::with_lookahead(
        &class(&TANWEEN),
        r"[^\s\p{L}]*\p{L}",
    ))
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
    fn reports_the_tanween_only() {
        let diagnostics = check("كتاباًت");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span, Span::new(5, 6));
        assert_eq!(diagnostics[0].message, MESSAGE);
    }

    #[rstest]
    #[case::after_other_mark("كتابٌّت")]
    #[case::after_punctuation("كتابٌ-ت")]
    #[case::word_final_alef("كتابًا")]
    fn letter_later_in_the_word(#[case] text: &str) {
        assert_eq!(check(text).len(), 1);
    }

    #[rstest]
    #[case::word_final("أهلاً وسهلاً")]
    #[case::before_punctuation("أهلاً، وسهلاً.")]
    #[case::end_of_text("كتابٌ")]
    #[case::no_tanween("كتاب")]
    fn accepts(#[case] text: &str) {
        assert!(check(text).is_empty());
    }

    #[test]
    fn consecutive_tanween_each_checked() {
        let diagnostics = check("بًٌت");
        let spans: Vec<_> = diagnostics.iter().map(|d| d.span).collect();
        assert_eq!(spans, vec![Span::new(1, 2), Span::new(2, 3)]);
    }
}
