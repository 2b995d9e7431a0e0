use crate::{stage::Stage, unicode::is_letter};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Re-join words that were spelled out one letter at a time.
///
/// Two or more consecutive single-letter tokens become one token
/// (`b a d w o r d` → `badword`). A lone single letter stays a word of its
/// own (`this is a test` is unchanged). Output tokens are separated by a
/// single ASCII space with no leading or trailing whitespace.
pub struct JoinSpacedLetters;

#[inline(always)]
fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_letter(c))
}

fn flush_run(out: &mut String, run: &mut SmallVec<[&str; 16]>) {
    if run.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.extend(run.drain(..));
}

impl Stage for JoinSpacedLetters {
    fn name(&self) -> &'static str {
        "join_spaced_letters"
    }

    fn needs_apply(&self, text: &str) -> bool {
        // Whitespace layout must already be canonical
        if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
            return true;
        }
        let mut prev_space = false;
        for c in text.chars() {
            let space = c.is_whitespace();
            if space && (c != ' ' || prev_space) {
                return true;
            }
            prev_space = space;
        }

        let mut prev_single = false;
        for token in text.split(' ') {
            let single = is_single_letter(token);
            if single && prev_single {
                return true;
            }
            prev_single = single;
        }
        false
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut run: SmallVec<[&str; 16]> = SmallVec::new();

        for token in text.split_whitespace() {
            if is_single_letter(token) {
                run.push(token);
                continue;
            }
            flush_run(&mut out, &mut run);
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
        }
        flush_run(&mut out, &mut run);

        Cow::Owned(out)
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for JoinSpacedLetters {
    fn should_pass_through() -> &'static [&'static str] {
        &["quick", "quick brown", "this is a test", "a", "x 1 y", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("b a d w o r d", "badword"),
            ("this is b a d", "this is bad"),
            ("  spaced\t\tout  ", "spaced out"),
            ("ж о п а", "жопа"),
            ("a b cd e f", "ab cd ef"),
        ]
    }
}
