//! stage/transliterate.rs – **Script-to-ASCII transliteration (lossy, opt-in)**
//! * Cyrillic `ж` → "zh", Greek `σ` → "s", Han `中` → "zhong", `é` → "e"
//! * Every non-ASCII scalar is replaced; unmappable ones vanish
//! * Upper case survives only for characters that have a lowercase form,
//!   so uncased scripts never introduce capitals
//! * Zero-copy for pure ASCII input
use crate::stage::Stage;
use std::borrow::Cow;
use unidecode::unidecode_char;

/// Public stage – zero-sized, stateless.
pub struct Transliterate;

#[inline]
fn has_lowercase_form(c: char) -> bool {
    let mut lower = c.to_lowercase();
    !(lower.next() == Some(c) && lower.next().is_none())
}

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.is_ascii() {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii() {
                out.push(c);
            } else if c.is_whitespace() {
                out.push(' ');
            } else {
                // unidecode pads many syllables with a trailing space ("Zhong ")
                let ascii = unidecode_char(c).trim();
                if has_lowercase_form(c) {
                    out.push_str(ascii);
                } else {
                    out.extend(ascii.chars().map(|a| a.to_ascii_lowercase()));
                }
            }
        }

        // Dropped characters at the edges would otherwise leave dangling spaces
        let trimmed = out.trim();
        if trimmed.len() == out.len() {
            Cow::Owned(out)
        } else {
            Cow::Owned(trimmed.to_owned())
        }
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Transliterate {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("жопа", "zhopa"),
            ("Привет", "Privet"),
            ("café", "cafe"),
            ("中国", "zhongguo"),
            ("bad\u{a0}word", "bad word"),
        ]
    }
}
