//! Named Arabic character classes.
//!
//! Each class lists the canonical code points first and then their legacy
//! presentation-form variants.

use std::sync::LazyLock;

use crate::charset::CodePointSet;
use crate::normalize::NORMALIZATION_TABLE;

/// Combining marks U+064B (fathatan) through U+0653 (maddah above).
pub static DIACRITICS: LazyLock<CodePointSet> =
    LazyLock::new(|| CodePointSet::new(&['\u{064B}'..='\u{0653}'], &[]));

/// Fathatan, dammatan and kasratan, with their isolated forms, tatweel with
/// fathatan, and the alef with fathatan ligatures.
pub static TANWEEN: LazyLock<CodePointSet> = LazyLock::new(|| {
    CodePointSet::new(
        &['\u{064B}'..='\u{064D}'],
        &[
            '\u{FE70}', '\u{FE71}', '\u{FE72}', '\u{FE74}', '\u{FD3C}', '\u{FD3D}',
        ],
    )
});

/// The tanween marks alef may not carry.
pub static DAMMATAN_KASRATAN: LazyLock<CodePointSet> = LazyLock::new(|| {
    CodePointSet::from_chars(&['\u{064C}', '\u{064D}', '\u{FE72}', '\u{FE74}'])
});

/// Shadda, its isolated and medial forms, and the shadda ligatures.
pub static SHADDA: LazyLock<CodePointSet> = LazyLock::new(|| {
    CodePointSet::new(
        &['\u{FC5E}'..='\u{FC63}', '\u{FCF2}'..='\u{FCF4}'],
        &['\u{0651}', '\u{FE7C}', '\u{FE7D}'],
    )
});

/// Maddah above.
pub static MADDA: LazyLock<CodePointSet> =
    LazyLock::new(|| CodePointSet::from_chars(&['\u{0653}']));

/// Sukun and its isolated and medial forms.
pub static SUKUN: LazyLock<CodePointSet> =
    LazyLock::new(|| CodePointSet::from_chars(&['\u{0652}', '\u{FE7E}', '\u{FE7F}']));

/// Alef letters: plain, with madda, with hamza above or below, wasla, and
/// their isolated and final forms.
pub static ALEF: LazyLock<CodePointSet> = LazyLock::new(|| {
    CodePointSet::new(
        &['\u{FE81}'..='\u{FE84}', '\u{FB50}'..='\u{FB51}'],
        &[
            '\u{0622}', '\u{0623}', '\u{0625}', '\u{0627}', '\u{0671}', '\u{FE87}', '\u{FE88}',
            '\u{FE8D}', '\u{FE8E}',
        ],
    )
});

/// Alef with madda above and its isolated and final forms.
pub static ALEF_MADDA: LazyLock<CodePointSet> =
    LazyLock::new(|| CodePointSet::from_chars(&['\u{0622}', '\u{FE81}', '\u{FE82}']));

/// Every code point of the normalization table.
pub static PRESENTATION_FORMS: LazyLock<CodePointSet> = LazyLock::new(|| {
    let sources: Vec<char> = NORMALIZATION_TABLE.iter().map(|e| e.source).collect();
    CodePointSet::from_chars(&sources)
});
