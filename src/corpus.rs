use crate::normalizer::Normalizer;
use std::collections::HashSet;

/// The working set of normalized disallowed words.
///
/// Grows monotonically: words can be added, never removed. Empty normalized
/// words are dropped, since no token can ever be empty.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: HashSet<String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize every raw word and collect the results.
    pub fn build<I, S>(raw_words: I, normalizer: &Normalizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Self::new();
        corpus.add_words(raw_words, normalizer);
        corpus
    }

    /// Normalize and insert. Returns how many entries were new.
    pub fn add_words<I, S>(&mut self, raw_words: I, normalizer: &Normalizer) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.words.len();
        for raw in raw_words {
            let normalized = normalizer.normalize(raw.as_ref());
            if normalized.is_empty() || self.words.contains(normalized.as_ref()) {
                continue;
            }
            self.words.insert(normalized.into_owned());
        }
        self.words.len() - before
    }

    /// Merge another corpus built with the same normalizer.
    pub fn extend(&mut self, other: Corpus) {
        self.words.extend(other.words);
    }

    #[inline]
    pub fn contains(&self, normalized: &str) -> bool {
        self.words.contains(normalized)
    }

    /// The stored entry equal to `normalized`, if any.
    #[inline]
    pub fn get(&self, normalized: &str) -> Option<&str> {
        self.words.get(normalized).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}
