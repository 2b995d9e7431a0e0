//! src/stage/remove_diacritics.rs
//!
//! Removes diacritical marks using NFD (Canonical Decomposition), then
//! recomposes what is left with NFC.

use crate::{stage::Stage, unicode::is_combining_mark};
use icu_normalizer::{ComposingNormalizerBorrowed, DecomposingNormalizerBorrowed};
use std::borrow::Cow;
use std::sync::LazyLock;

static NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfd);
static NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizerBorrowed::new_nfc);

/// Removes accents, vowel points and other combining marks without expanding
/// compatibility characters (ligatures, fractions, superscripts).
///
/// # Normalization Form
///
/// Uses **NFD (Canonical Decomposition)** before filtering:
/// - Precomposed characters decomposed: `é` → `e` + combining acute
/// - **Ligatures preserved**: `ﬁ` remains `ﬁ`
/// - **Superscripts preserved**: `m²` remains `m²`
///
/// The remainder is recomposed with NFC so that scripts whose letters
/// decompose without marks (Hangul) come back unchanged.
pub struct RemoveDiacritics;

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return false;
        }
        !NFC.is_normalized(text) || NFD.normalize(text).chars().any(is_combining_mark)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }

        let decomposed = NFD.normalize(&text);
        let mut stripped = String::with_capacity(decomposed.len());
        stripped.extend(decomposed.chars().filter(|&c| !is_combining_mark(c)));

        Cow::Owned(NFC.normalize(&stripped).into_owned())
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for RemoveDiacritics {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("café", "cafe"),
            ("naïve résumé", "naive resume"),
            ("e\u{0301}", "e"),
            ("Hà Nội", "Ha Noi"),
            ("שָׁלוֹם", "שלום"),
            ("مَرْحَبًا", "مرحبا"),
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================
