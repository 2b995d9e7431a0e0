//! Core normalization stage abstraction.
//!
//! Every capability of the normalizer is expressed as a [`Stage`]: a cheap
//! pre-check plus an allocation-aware transformation on `Cow<str>`. Stages
//! that find nothing to change hand the input back untouched, so a clean
//! ASCII word normally walks the whole pipeline without a single allocation.
//!
//! Stages are total. Normalization has no failure mode: whatever the input,
//! every stage produces a string.

pub mod collapse_repeats;
pub mod fold_case;
pub mod join_spaced_letters;
pub mod remove_diacritics;
pub mod replace_homoglyphs;
pub mod strip_format_controls;
pub mod strip_punctuation;
pub mod transliterate;
pub mod trim;

use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and test failure messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    ///
    /// Must never return `false` for text that `apply` would change.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must be idempotent.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

/// Walk `text` as alternating runs of non-whitespace and whitespace and hand
/// every run to `emit` together with a flag telling which kind it is.
///
/// Used by the word-aware stages, which must preserve the exact whitespace
/// between tokens while rewriting the tokens themselves.
pub(crate) fn for_each_run<'a>(text: &'a str, mut emit: impl FnMut(&'a str, bool)) {
    let mut rest = text;
    while !rest.is_empty() {
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(word_end);
        if !word.is_empty() {
            emit(word, false);
        }
        let space_end = tail
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(tail.len());
        let (space, next) = tail.split_at(space_end);
        if !space.is_empty() {
            emit(space, true);
        }
        rest = next;
    }
}
