//! Token matching against a [`Corpus`].

use crate::{
    corpus::Corpus,
    similarity::{quick_ratio, ratio, real_quick_ratio},
};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ThresholdError {
    #[error("fuzzy threshold must lie strictly between 0 and 1, got {0}")]
    OutOfRange(f64),
}

/// Minimum similarity for a fuzzy match, strictly inside `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Result<Self, ThresholdError> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(ThresholdError::OutOfRange(value))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ThresholdError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// How a token is compared with the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MatchMode {
    /// Set membership of the normalized token.
    #[default]
    Exact,
    /// Exact membership, then any corpus entry whose similarity ratio with
    /// the token is strictly greater than the threshold.
    Fuzzy(Threshold),
}

impl MatchMode {
    /// Interpret a raw threshold: anything outside `(0, 1)`, NaN included,
    /// means exact matching.
    pub fn from_threshold(value: f64) -> Self {
        Threshold::new(value).map_or(Self::Exact, Self::Fuzzy)
    }
}

impl From<Threshold> for MatchMode {
    fn from(threshold: Threshold) -> Self {
        Self::Fuzzy(threshold)
    }
}

/// Decide whether a normalized token is in the corpus.
///
/// Exact mode is a single hash lookup. Fuzzy mode scans the whole corpus, so
/// its cost grows with corpus size times token length; each entry is first
/// screened with cheap upper bounds on the ratio, which can rule a candidate
/// out but never in.
pub fn is_match(token: &str, corpus: &Corpus, mode: MatchMode) -> bool {
    find_match(token, corpus, mode).is_some()
}

/// Like [`is_match`], returning the corpus entry that matched.
pub fn find_match<'c>(token: &str, corpus: &'c Corpus, mode: MatchMode) -> Option<&'c str> {
    if let Some(word) = corpus.get(token) {
        return Some(word);
    }

    let MatchMode::Fuzzy(threshold) = mode else {
        return None;
    };
    let t = threshold.get();

    let hit = corpus.iter().find(|candidate| {
        real_quick_ratio(token, candidate) > t
            && quick_ratio(token, candidate) > t
            && ratio(token, candidate) > t
    });
    if let Some(word) = hit {
        tracing::trace!(token, word, threshold = t, "fuzzy match");
    }
    hit
}
