//! `no_invalid_tanween_on_alef`: alef may carry fathatan but not dammatan or
//! kasratan.

use std::sync::LazyLock;

use tashkil_text::Pattern;
use tashkil_text::classes::{ALEF, DAMMATAN_KASRATAN};

use super::{RuleId, class, compile};
use crate::diagnostic::Diagnostic;

const RULE_ID: &str = RuleId::TanweenOnAlef.name();
const MESSAGE: &str = "Found Dammatan or Kasratan on Alef; Alef can only carry Fathatan.";

static PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    compile(Pattern::new(&format!(
        "{}{}",
        class(&ALEF),
        class(&DAMMATAN_KASRATAN)
    )))
});

pub(super) fn check(text: &str) -> Vec<Diagnostic> {
    PATTERN
        .find_matches(text)
        .map(|span| Diagnostic::new(RULE_ID, MESSAGE, span))
        .collect()
}
