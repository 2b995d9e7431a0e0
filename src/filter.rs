//! The public facade: corpus construction, checking and redaction.

use crate::{
    corpus::Corpus,
    matcher::{self, MatchMode},
    normalizer::{Normalizer, NormalizerConfig},
    source::{LangCode, LoadError, LoadOutcome, LoadReport, WordSource},
};
use memchr::memmem;
use std::borrow::Cow;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("unsupported language `{0}`")]
    UnsupportedLanguage(String),
    #[error("cannot discover word lists: {0}")]
    Discovery(#[source] LoadError),
}

/// Per-query settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterOptions {
    pub mode: MatchMode,
    /// When set, a profane verdict carries the text with the matched token
    /// masked by this character.
    pub replace_char: Option<char>,
}

impl FilterOptions {
    /// Mode from a raw threshold: fuzzy inside `(0, 1)`, exact otherwise.
    /// See [`MatchMode::from_threshold`].
    pub fn from_threshold(threshold: f64) -> Self {
        Self::default().mode(MatchMode::from_threshold(threshold))
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn replace_with(mut self, mask: char) -> Self {
        self.replace_char = Some(mask);
        self
    }
}

/// Outcome of [`Filter::filter_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    Profane,
    Redacted(String),
}

impl Verdict {
    pub fn is_profane(&self) -> bool {
        !matches!(self, Self::Clean)
    }

    pub fn redacted(&self) -> Option<&str> {
        match self {
            Self::Redacted(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn into_redacted(self) -> Option<String> {
        match self {
            Self::Redacted(text) => Some(text),
            _ => None,
        }
    }
}

/// Multilingual profanity filter.
///
/// Built once from a [`WordSource`]; the normalizer configuration is fixed at
/// that point and applied identically to corpus words and query text.
/// Queries take `&self`; only [`Filter::add_words`] needs exclusive access.
#[derive(Debug)]
pub struct Filter {
    normalizer: Normalizer,
    corpus: Corpus,
    languages: Vec<LangCode>,
    report: LoadReport,
}

impl Filter {
    pub fn builder<'s>() -> FilterBuilder<'s> {
        FilterBuilder::default()
    }

    /// Check `text` against the corpus.
    ///
    /// Tokens of the normalized text are tested in order and the first match
    /// decides. Redaction replaces every literal occurrence of the matched
    /// normalized token inside the original text, so it can miss when
    /// normalization changed the token's surface form.
    pub fn filter_text(&self, text: &str, options: &FilterOptions) -> Verdict {
        let normalized = self.normalizer.normalize(text);
        let Some(token) = normalized
            .split_whitespace()
            .find(|token| matcher::is_match(token, &self.corpus, options.mode))
        else {
            return Verdict::Clean;
        };

        debug!(token, "profane token");
        match options.replace_char {
            Some(mask) => Verdict::Redacted(redact(text, token, mask)),
            None => Verdict::Profane,
        }
    }

    /// Exact-mode check.
    pub fn is_profane(&self, text: &str) -> bool {
        self.filter_text(text, &FilterOptions::default()).is_profane()
    }

    /// Exact-mode redaction. `None` when the text is clean.
    pub fn censor(&self, text: &str, mask: char) -> Option<String> {
        self.filter_text(text, &FilterOptions::default().replace_with(mask))
            .into_redacted()
    }

    /// Normalize and add words to the live corpus. Returns how many were new.
    pub fn add_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = self.corpus.add_words(words, &self.normalizer);
        debug!(added, total = self.corpus.len(), "words added");
        added
    }

    /// Languages the filter was built for: every discovered code, or the
    /// requested subset in request order. Lists that failed to load are
    /// still listed here; see [`Filter::load_report`] for their outcome.
    pub fn languages(&self) -> &[LangCode] {
        &self.languages
    }

    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.normalizer.normalize(text)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    pub fn config(&self) -> NormalizerConfig {
        self.normalizer.config()
    }
}

#[derive(Default)]
pub struct FilterBuilder<'s> {
    source: Option<&'s dyn WordSource>,
    languages: Option<Vec<String>>,
    config: NormalizerConfig,
}

impl<'s> FilterBuilder<'s> {
    pub fn source(mut self, source: &'s dyn WordSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Restrict the corpus to these codes, in this order. Every code must be
    /// offered by the source.
    pub fn languages<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn normalizer(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Filter, FilterError> {
        let normalizer = Normalizer::new(self.config);
        let mut report = LoadReport::default();

        let available = match self.source {
            Some(source) => discover(source, &mut report)?,
            None => Vec::new(),
        };
        let selected = match &self.languages {
            Some(requested) => restrict(requested, &available)?,
            None => available,
        };

        let mut corpus = Corpus::new();
        if let Some(source) = self.source {
            for code in &selected {
                match source.load(code) {
                    Ok(words) => {
                        let added = corpus.add_words(&words, &normalizer);
                        debug!(language = %code, words = words.len(), added, "loaded word list");
                        report.record(
                            code.as_str(),
                            LoadOutcome::Loaded {
                                words: words.len(),
                                added,
                            },
                        );
                    }
                    Err(err) => {
                        warn!(language = %code, error = %err, "skipping word list");
                        report.record(code.as_str(), LoadOutcome::Skipped(err));
                    }
                }
            }
        }

        info!(
            languages = selected.len(),
            words = corpus.len(),
            skipped = report.skipped().count(),
            "filter built"
        );
        Ok(Filter {
            normalizer,
            corpus,
            languages: selected,
            report,
        })
    }
}

/// Sanitized, sorted, deduplicated codes offered by `source`. Invalid
/// identifiers are recorded and skipped.
fn discover(
    source: &dyn WordSource,
    report: &mut LoadReport,
) -> Result<Vec<LangCode>, FilterError> {
    let mut codes = Vec::new();
    for raw in source.discover().map_err(FilterError::Discovery)? {
        match LangCode::parse(&raw) {
            Ok(code) => codes.push(code),
            Err(err) => {
                warn!(language = raw.as_str(), error = %err, "skipping word list");
                report.record(raw, LoadOutcome::Skipped(err));
            }
        }
    }
    codes.sort_unstable();
    codes.dedup();
    Ok(codes)
}

/// Requested codes in caller order, each required to be available.
fn restrict(
    requested: &[String],
    available: &[LangCode],
) -> Result<Vec<LangCode>, FilterError> {
    let mut selected: Vec<LangCode> = Vec::with_capacity(requested.len());
    for raw in requested {
        let code = LangCode::parse(raw)
            .ok()
            .filter(|code| available.contains(code))
            .ok_or_else(|| FilterError::UnsupportedLanguage(raw.clone()))?;
        if !selected.contains(&code) {
            selected.push(code);
        }
    }
    Ok(selected)
}

/// Replace every non-overlapping occurrence of `needle` in `text`, left to
/// right, with `mask` repeated once per scalar of `needle`.
fn redact(text: &str, needle: &str, mask: char) -> String {
    let replacement: String = std::iter::repeat_n(mask, needle.chars().count()).collect();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    // A match of a valid UTF-8 needle always starts on a char boundary
    for start in memmem::find_iter(text.as_bytes(), needle.as_bytes()) {
        out.push_str(&text[last..start]);
        out.push_str(&replacement);
        last = start + needle.len();
    }
    out.push_str(&text[last..]);
    out
}
