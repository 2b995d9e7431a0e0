//! stage/replace_homoglyphs.rs
//! Map visually confusable characters onto one canonical Latin letter:
//! * Cyrillic/Greek look-alikes (`раураl` → `paypal`)
//! * Full-width forms (`ＢＡＤ` → `BAD`)
//! * Leet substitutions inside words (`sh1t`, `b@d`) but never in bare
//!   numbers (`$100`, `2024`)
//!
//! Whitespace is copied through byte for byte.

use crate::{
    confusables::{HOMOGLYPHS, LEET},
    stage::{Stage, for_each_run},
    unicode::{fullwidth_to_halfwidth, is_letter},
};
use std::borrow::Cow;

pub struct ReplaceHomoglyphs;

#[inline(always)]
fn map_char(c: char, in_word: bool) -> char {
    let c = fullwidth_to_halfwidth(c);
    let c = HOMOGLYPHS.get(&c).copied().unwrap_or(c);
    if in_word {
        LEET.get(&c).copied().unwrap_or(c)
    } else {
        c
    }
}

#[inline]
fn token_changes(token: &str) -> bool {
    let in_word = token.chars().any(is_letter);
    token.chars().any(|c| map_char(c, in_word) != c)
}

impl Stage for ReplaceHomoglyphs {
    fn name(&self) -> &'static str {
        "replace_homoglyphs"
    }

    fn needs_apply(&self, text: &str) -> bool {
        let mut changes = false;
        for_each_run(text, |run, whitespace| {
            changes = changes || (!whitespace && token_changes(run));
        });
        changes
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        for_each_run(&text, |run, whitespace| {
            if whitespace {
                out.push_str(run);
                return;
            }
            let in_word = run.chars().any(is_letter);
            out.extend(run.chars().map(|c| map_char(c, in_word)));
        });
        Cow::Owned(out)
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for ReplaceHomoglyphs {
    fn should_pass_through() -> &'static [&'static str] {
        &["quick", "brown fox", "$100 2024", "!!!", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("\u{0432}\u{0430}d", "\u{0432}ad"),
            ("b\u{0430}d", "bad"),
            ("\u{0392}\u{0391}D", "BAD"),
            ("ＢＡＤ", "BAD"),
            ("sh1t", "shit"),
            ("b@d w0rd", "bad word"),
            ("a$$ costs $100", "ass costs $100"),
        ]
    }
}
