use crate::stage::Stage;
use std::borrow::Cow;

/// Removes leading and trailing Unicode whitespace.
pub struct Trim;

impl Stage for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        let bytes = text.as_bytes();
        // Fast ASCII path: check first/last byte
        if bytes.first().is_some_and(u8::is_ascii_whitespace)
            || bytes.last().is_some_and(u8::is_ascii_whitespace)
        {
            return true;
        }
        // Unicode fallback: only if needed
        text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => {
                let trimmed = s.trim();
                if trimmed.len() == s.len() {
                    Cow::Owned(s)
                } else {
                    Cow::Owned(trimmed.to_owned())
                }
            }
        }
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Trim {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("  bad  ", "bad"),
            ("\t\nbad word\r\n", "bad word"),
            ("\u{3000}bad\u{3000}", "bad"),
            ("   ", ""),
        ]
    }
}
