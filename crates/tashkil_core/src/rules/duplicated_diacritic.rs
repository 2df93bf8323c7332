//! `no_duplicated_diacritics`: the same mark twice on one letter.
//!
//! For each mark `X` the pattern has an alternative `X [other marks]* X`, so a
//! match ends at the nearest repeat of `X`. Scanning is self-overlapping, so a
//! run such as `A B C A B C` is reported from every left edge. The fix deletes
//! the repeated mark at the end of the span.

use std::sync::LazyLock;

use tashkil_text::classes::DIACRITICS;
use tashkil_text::{CodePointSet, Pattern, Span};

use super::{RuleId, compile};
use crate::diagnostic::{Diagnostic, Fix};

const RULE_ID: &str = RuleId::DuplicatedDiacritic.name();
const MESSAGE: &str = "Found duplicated Arabic diacritic on the same letter.";

static PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    let all = DIACRITICS.regex_class_body();
    let alternatives: Vec<String> = DIACRITICS
        .iter()
        .map(|mark| {
            let mark = CodePointSet::from_chars(&[mark]).regex_class_body();
            format!("{mark}[{all}--{mark}]*{mark}")
        })
        .collect();
    compile(Pattern::self_overlapping(&alternatives.join("|")))
});

pub(super) fn check(text: &str) -> Vec<Diagnostic> {
    PATTERN
        .find_matches(text)
        .map(|span| {
            Diagnostic::new(RULE_ID, MESSAGE, span)
                .with_fix(Fix::delete(Span::new(span.end - 1, span.end)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FATHA: char = '\u{064E}';
    const DAMMA: char = '\u{064F}';
    const KASRA: char = '\u{0650}';
    const SHADDA: char = '\u{0651}';

    fn spans(text: &str) -> Vec<Span> {
        check(text).into_iter().map(|d| d.span).collect()
    }

    #[test]
    fn repeated_run_is_reported_from_every_left_edge() {
        let text = format!("يون{FATHA}{KASRA}{DAMMA}{FATHA}{KASRA}{DAMMA}س");

        assert_eq!(
            spans(&text),
            vec![Span::new(3, 7), Span::new(4, 8), Span::new(5, 9)]
        );
    }

    #[test]
    fn fixes_delete_the_last_mark() {
        let text = format!("يون{FATHA}{KASRA}{DAMMA}{FATHA}{KASRA}{DAMMA}س");

        let fixes: Vec<_> = check(&text).into_iter().filter_map(|d| d.fix).collect();
        assert_eq!(
            fixes,
            vec![
                Fix::delete(Span::new(6, 7)),
                Fix::delete(Span::new(7, 8)),
                Fix::delete(Span::new(8, 9)),
            ]
        );
    }

    #[test]
    fn nearest_repeat_ends_the_match() {
        let text = format!("تجربة لشد{SHADDA}{FATHA}{SHADDA}تين على نفس الحرف");

        let diagnostics = check(&text);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span, Span::new(9, 12));
        assert_eq!(diagnostics[0].message, MESSAGE);
    }

    #[test]
    fn match_starts_at_the_first_copy_of_the_repeated_mark() {
        let text = format!("تجربة لشد{FATHA}{SHADDA}{SHADDA}تين");

        let diagnostics = check(&text);
        assert_eq!(spans(&text), vec![Span::new(10, 12)]);
        assert_eq!(diagnostics[0].fix, Some(Fix::delete(Span::new(11, 12))));
    }

    #[test]
    fn long_run_of_one_mark() {
        let text = format!("ب{FATHA}{FATHA}{FATHA}");
        assert_eq!(spans(&text), vec![Span::new(1, 3), Span::new(2, 4)]);
    }

    #[test]
    fn marks_on_different_letters_are_fine() {
        let text = format!("ب{FATHA}ت{FATHA}ث{SHADDA}{FATHA}");
        assert!(check(&text).is_empty());
    }
}
