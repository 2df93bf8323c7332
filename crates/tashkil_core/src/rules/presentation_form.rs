//! `no_presentation_forms`: legacy presentation-form code points.
//!
//! Every finding carries the same fix: the whole text, normalized in one pass.

use std::sync::LazyLock;

use tashkil_text::classes::PRESENTATION_FORMS;
use tashkil_text::normalize::{lookup, normalize};
use tashkil_text::{Pattern, Span, char_len};

use super::{RuleId, class, compile};
use crate::diagnostic::{Diagnostic, Fix};

const RULE_ID: &str = RuleId::PresentationForm.name();

static PATTERN: LazyLock<Pattern> =
    LazyLock::new(|| compile(Pattern::new(&class(&PRESENTATION_FORMS))));

pub(super) fn check(text: &str) -> Vec<Diagnostic> {
    let mut matches = PATTERN.find_matches(text).peekable();
    if matches.peek().is_none() {
        return Vec::new();
    }

    let whole = Span::new(0, char_len(text));
    let normalized = normalize(text).into_owned();
    let mut chars = text.chars();
    let mut consumed = 0;

    matches
        .filter_map(|span| {
            let c = chars.nth((span.start - consumed) as usize)?;
            consumed = span.start + 1;
            let entry = lookup(c)?;
            let message = format!(
                "Found legacy presentation form {} (U+{:04X}); use its canonical form instead.",
                entry.name, entry.source as u32
            );
            Some(
                Diagnostic::new(RULE_ID, message, span)
                    .with_fix(Fix::new(whole, normalized.clone())),
            )
        })
        .collect()
}
