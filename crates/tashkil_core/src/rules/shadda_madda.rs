//! `no_shadda_with_madda`: shadda next to madda, or on alef with madda.

use std::sync::LazyLock;

use tashkil_text::classes::{ALEF_MADDA, MADDA, SHADDA};
use tashkil_text::{CodePointSet, Pattern};

use super::{RuleId, class, compile};
use crate::diagnostic::Diagnostic;

const RULE_ID: &str = RuleId::ShaddaWithMadda.name();
const MESSAGE: &str = "Found Shadda combined with Madda.";

static PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    let madda = class(&CodePointSet::union(&[&ALEF_MADDA, &MADDA]));
    let shadda = class(&SHADDA);
    let bare_madda = class(&MADDA);
    compile(Pattern::new(&format!("{madda}{shadda}|{shadda}{bare_madda}")))
});

pub(super) fn check(text: &str) -> Vec<Diagnostic> {
    PATTERN
        .find_matches(text)
        .map(|span| Diagnostic::new(RULE_ID, MESSAGE, span))
        .collect()
}
