use crate::{
    stage::Stage,
    unicode::{contains_format_controls, is_format_control},
};
use std::borrow::Cow;

/// Remove invisible format controls that split a word without a visible gap:
/// - Zero-width spaces and joiners (ZWSP, ZWNJ, ZWJ, word joiner)
/// - Bidirectional marks, embeddings and isolates
/// - Soft hyphen and byte order mark
///
/// Zero-copy when clean. Idempotent.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripFormatControls;

impl Stage for StripFormatControls {
    fn name(&self) -> &'static str {
        "strip_format_controls"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii() && contains_format_controls(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        out.extend(text.chars().filter(|&c| !is_format_control(c)));
        Cow::Owned(out)
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for StripFormatControls {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("b\u{200B}a\u{200C}d", "bad"),
            ("\u{FEFF}word", "word"),
            ("bad\u{00AD}word", "badword"),
            ("\u{202E}drowdab", "drowdab"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stage_contract::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(StripFormatControls);
    }

    #[test]
    fn visible_text_is_borrowed() {
        let input = "visible text only";
        let out = StripFormatControls.apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
