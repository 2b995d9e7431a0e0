//! stage/fold_case.rs – **Locale-independent case folding**
//! * Per-character Unicode lowercase, so the mapping is context free
//! * Fast ASCII path: in-place lowercase of the owned buffer
//! * Zero-copy when nothing has an uppercase form

use crate::stage::Stage;
use std::borrow::Cow;

/// Public stage – zero-sized, stateless.
pub struct FoldCase;

#[inline(always)]
fn changes_under_lowercase(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    let mut lower = c.to_lowercase();
    !(lower.next() == Some(c) && lower.next().is_none())
}

impl Stage for FoldCase {
    fn name(&self) -> &'static str {
        "fold_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(changes_under_lowercase)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_lowercase();
            return Cow::Owned(owned);
        }
        // `str::to_lowercase` treats a final sigma contextually; folding each
        // scalar on its own keeps the stage idempotent on any substring.
        Cow::Owned(text.chars().flat_map(char::to_lowercase).collect())
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for FoldCase {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("BADWORD", "badword"),
            ("B A D", "b a d"),
            ("ЖОПА", "жопа"),
            ("ΣΚΑΤΑ", "σκατα"),
            ("ＢＡＤ", "ｂａｄ"),
        ]
    }
}
