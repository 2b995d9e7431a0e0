use crate::stage::Stage;
use std::borrow::Cow;

/// Drop every character that is neither alphanumeric nor whitespace.
///
/// Defeats separators inserted inside a word (`b.a.d`, `b-a-d`, `b*d`) and
/// trailing decoration (`bad!!!`). Symbols and emoji go too.
pub struct StripPunctuation;

#[inline(always)]
fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace()
}

impl Stage for StripPunctuation {
    fn name(&self) -> &'static str {
        "strip_punctuation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text
                .bytes()
                .any(|b| !(b.is_ascii_alphanumeric() || b.is_ascii_whitespace() || b == 0x0B));
        }
        !text.chars().all(is_kept)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        out.extend(text.chars().filter(|&c| is_kept(c)));
        Cow::Owned(out)
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for StripPunctuation {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("b.a.d", "bad"),
            ("b-a-d w*rd", "bad wrd"),
            ("bad!!!", "bad"),
            ("«плохо»", "плохо"),
            ("bad 🙂 word", "bad  word"),
        ]
    }
}
