use crate::{stage::Stage, unicode::is_letter};
use std::borrow::Cow;

/// Collapse runs of the same letter into a single letter (`baaaad` → `bad`).
///
/// Digits are left alone so that numbers keep their value.
pub struct CollapseRepeats;

impl Stage for CollapseRepeats {
    fn name(&self) -> &'static str {
        "collapse_repeats"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        let mut prev = None;
        for c in text.chars() {
            if prev == Some(c) && is_letter(c) {
                return true;
            }
            prev = Some(c);
        }
        false
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut prev = None;
        for c in text.chars() {
            if prev == Some(c) && is_letter(c) {
                continue;
            }
            out.push(c);
            prev = Some(c);
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for CollapseRepeats {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("baaaad", "bad"),
            ("bbaadd  woorrdd", "bad  word"),
            ("ааа", "а"),
            ("1000 aaa", "1000 a"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stage_contract::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(CollapseRepeats);
    }

    #[test]
    fn repeated_whitespace_untouched() {
        assert!(!CollapseRepeats.needs_apply("a  b"));
    }

    #[test]
    fn different_letters_untouched() {
        let input = "abcabc";
        let out = CollapseRepeats.apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
