//! `no_loose_diacritics`: a diacritic written directly after whitespace.
//!
//! Such a mark has no base letter. The optional fix deletes the mark and keeps
//! the whitespace.

use std::sync::LazyLock;

use tashkil_text::classes::DIACRITICS;
use tashkil_text::{Pattern, Span};

use super::{RuleId, class, compile};
use crate::diagnostic::{Diagnostic, Fix};

const RULE_ID: &str = RuleId::LooseDiacritic.name();
const MESSAGE: &str = "Found loose arabic diacritic.";

static PATTERN: LazyLock<Pattern> =
    LazyLock::new(|| compile(Pattern::new(&format!(r"\s{}", class(&DIACRITICS)))));

pub(super) fn check(text: &str, remove: bool) -> Vec<Diagnostic> {
    PATTERN
        .find_matches(text)
        .map(|span| {
            let diagnostic = Diagnostic::new(RULE_ID, MESSAGE, span);
            if remove {
                diagnostic.with_fix(Fix::delete(Span::new(span.start + 1, span.end)))
            } else {
                diagnostic
            }
        })
        .collect()
}
