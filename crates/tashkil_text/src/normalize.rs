//! Legacy Arabic presentation forms and their canonical replacements.
//!
//! Isolated marks map to the bare combining mark and medial marks map to
//! tatweel followed by the mark. The `SPACE` that Unicode's compatibility
//! decomposition puts in front of isolated forms is dropped.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One row of the normalization table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationEntry {
    /// The legacy presentation-form code point.
    pub source: char,
    /// Official Unicode character name of `source`.
    pub name: &'static str,
    /// Canonical replacement sequence.
    pub canonical: &'static [char],
}

impl NormalizationEntry {
    const fn new(source: char, name: &'static str, canonical: &'static [char]) -> Self {
        Self {
            source,
            name,
            canonical,
        }
    }

    /// The canonical replacement as a string.
    pub fn canonical_str(&self) -> String {
        self.canonical.iter().collect()
    }
}

const TATWEEL: char = '\u{0640}';
const FATHATAN: char = '\u{064B}';
const DAMMATAN: char = '\u{064C}';
const KASRATAN: char = '\u{064D}';
const FATHA: char = '\u{064E}';
const DAMMA: char = '\u{064F}';
const KASRA: char = '\u{0650}';
const SHADDA: char = '\u{0651}';
const SUKUN: char = '\u{0652}';
const SUPERSCRIPT_ALEF: char = '\u{0670}';

/// Every presentation form the linter knows how to normalize, in code-point order.
#[rustfmt::skip]
pub static NORMALIZATION_TABLE: &[NormalizationEntry] = &[
    NormalizationEntry::new('\u{FB50}', "ARABIC LETTER ALEF WASLA ISOLATED FORM", &['\u{0671}']),
    NormalizationEntry::new('\u{FB51}', "ARABIC LETTER ALEF WASLA FINAL FORM", &['\u{0671}']),
    NormalizationEntry::new('\u{FC5E}', "ARABIC LIGATURE SHADDA WITH DAMMATAN ISOLATED FORM", &[DAMMATAN, SHADDA]),
    NormalizationEntry::new('\u{FC5F}', "ARABIC LIGATURE SHADDA WITH KASRATAN ISOLATED FORM", &[KASRATAN, SHADDA]),
    NormalizationEntry::new('\u{FC60}', "ARABIC LIGATURE SHADDA WITH FATHA ISOLATED FORM", &[FATHA, SHADDA]),
    NormalizationEntry::new('\u{FC61}', "ARABIC LIGATURE SHADDA WITH DAMMA ISOLATED FORM", &[DAMMA, SHADDA]),
    NormalizationEntry::new('\u{FC62}', "ARABIC LIGATURE SHADDA WITH KASRA ISOLATED FORM", &[KASRA, SHADDA]),
    NormalizationEntry::new('\u{FC63}', "ARABIC LIGATURE SHADDA WITH SUPERSCRIPT ALEF ISOLATED FORM", &[SHADDA, SUPERSCRIPT_ALEF]),
    NormalizationEntry::new('\u{FCF2}', "ARABIC LIGATURE SHADDA WITH FATHA MEDIAL FORM", &[TATWEEL, FATHA, SHADDA]),
    NormalizationEntry::new('\u{FCF3}', "ARABIC LIGATURE SHADDA WITH DAMMA MEDIAL FORM", &[TATWEEL, DAMMA, SHADDA]),
    NormalizationEntry::new('\u{FCF4}', "ARABIC LIGATURE SHADDA WITH KASRA MEDIAL FORM", &[TATWEEL, KASRA, SHADDA]),
    NormalizationEntry::new('\u{FD3C}', "ARABIC LIGATURE ALEF WITH FATHATAN FINAL FORM", &['\u{0627}', FATHATAN]),
    NormalizationEntry::new('\u{FD3D}', "ARABIC LIGATURE ALEF WITH FATHATAN ISOLATED FORM", &['\u{0627}', FATHATAN]),
    NormalizationEntry::new('\u{FE70}', "ARABIC FATHATAN ISOLATED FORM", &[FATHATAN]),
    NormalizationEntry::new('\u{FE71}', "ARABIC TATWEEL WITH FATHATAN ABOVE", &[TATWEEL, FATHATAN]),
    NormalizationEntry::new('\u{FE72}', "ARABIC DAMMATAN ISOLATED FORM", &[DAMMATAN]),
    NormalizationEntry::new('\u{FE74}', "ARABIC KASRATAN ISOLATED FORM", &[KASRATAN]),
    NormalizationEntry::new('\u{FE76}', "ARABIC FATHA ISOLATED FORM", &[FATHA]),
    NormalizationEntry::new('\u{FE77}', "ARABIC FATHA MEDIAL FORM", &[TATWEEL, FATHA]),
    NormalizationEntry::new('\u{FE78}', "ARABIC DAMMA ISOLATED FORM", &[DAMMA]),
    NormalizationEntry::new('\u{FE79}', "ARABIC DAMMA MEDIAL FORM", &[TATWEEL, DAMMA]),
    NormalizationEntry::new('\u{FE7A}', "ARABIC KASRA ISOLATED FORM", &[KASRA]),
    NormalizationEntry::new('\u{FE7B}', "ARABIC KASRA MEDIAL FORM", &[TATWEEL, KASRA]),
    NormalizationEntry::new('\u{FE7C}', "ARABIC SHADDA ISOLATED FORM", &[SHADDA]),
    NormalizationEntry::new('\u{FE7D}', "ARABIC SHADDA MEDIAL FORM", &[TATWEEL, SHADDA]),
    NormalizationEntry::new('\u{FE7E}', "ARABIC SUKUN ISOLATED FORM", &[SUKUN]),
    NormalizationEntry::new('\u{FE7F}', "ARABIC SUKUN MEDIAL FORM", &[TATWEEL, SUKUN]),
    NormalizationEntry::new('\u{FE81}', "ARABIC LETTER ALEF WITH MADDA ABOVE ISOLATED FORM", &['\u{0622}']),
    NormalizationEntry::new('\u{FE82}', "ARABIC LETTER ALEF WITH MADDA ABOVE FINAL FORM", &['\u{0622}']),
    NormalizationEntry::new('\u{FE83}', "ARABIC LETTER ALEF WITH HAMZA ABOVE ISOLATED FORM", &['\u{0623}']),
    NormalizationEntry::new('\u{FE84}', "ARABIC LETTER ALEF WITH HAMZA ABOVE FINAL FORM", &['\u{0623}']),
    NormalizationEntry::new('\u{FE87}', "ARABIC LETTER ALEF WITH HAMZA BELOW ISOLATED FORM", &['\u{0625}']),
    NormalizationEntry::new('\u{FE88}', "ARABIC LETTER ALEF WITH HAMZA BELOW FINAL FORM", &['\u{0625}']),
    NormalizationEntry::new('\u{FE8D}', "ARABIC LETTER ALEF ISOLATED FORM", &['\u{0627}']),
    NormalizationEntry::new('\u{FE8E}', "ARABIC LETTER ALEF FINAL FORM", &['\u{0627}']),
];

static BY_SOURCE: LazyLock<HashMap<char, &'static NormalizationEntry>> = LazyLock::new(|| {
    NORMALIZATION_TABLE
        .iter()
        .map(|entry| (entry.source, entry))
        .collect()
});

/// Looks up the table entry for a presentation-form code point.
pub fn lookup(c: char) -> Option<&'static NormalizationEntry> {
    BY_SOURCE.get(&c).copied()
}

/// Replaces every presentation form in `text` by its canonical sequence.
///
/// All entries are applied in one pass. Returns the input unchanged (borrowed)
/// when it contains no presentation form.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| BY_SOURCE.contains_key(&c)) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 2);
    for c in text.chars() {
        match lookup(c) {
            Some(entry) => out.extend(entry.canonical.iter()),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}
