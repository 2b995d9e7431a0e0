use crate::{
    pipeline::Pipeline,
    stage::{
        collapse_repeats::CollapseRepeats, fold_case::FoldCase,
        join_spaced_letters::JoinSpacedLetters, remove_diacritics::RemoveDiacritics,
        replace_homoglyphs::ReplaceHomoglyphs, strip_format_controls::StripFormatControls,
        strip_punctuation::StripPunctuation, transliterate::Transliterate, trim::Trim,
    },
};
use std::borrow::Cow;

/// Which normalization capabilities are switched on.
///
/// Every capability defaults to enabled. The same value must be used for the
/// corpus and for every query; [`crate::Filter`] captures it at build time and
/// offers no way to change it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizerConfig {
    /// Trim surrounding whitespace and fold case.
    pub basic: bool,
    /// Strip invisible controls, diacritics and punctuation, collapse repeated
    /// letters and re-join spaced-out words.
    pub aggressive: bool,
    /// Transliterate non-ASCII scripts to ASCII.
    pub transliterate: bool,
    /// Replace look-alike characters and leet substitutions.
    pub homoglyphs: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self::all()
    }
}

impl NormalizerConfig {
    pub const fn all() -> Self {
        Self {
            basic: true,
            aggressive: true,
            transliterate: true,
            homoglyphs: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            basic: false,
            aggressive: false,
            transliterate: false,
            homoglyphs: false,
        }
    }

    pub const fn basic(mut self, on: bool) -> Self {
        self.basic = on;
        self
    }

    pub const fn aggressive(mut self, on: bool) -> Self {
        self.aggressive = on;
        self
    }

    pub const fn transliterate(mut self, on: bool) -> Self {
        self.transliterate = on;
        self
    }

    pub const fn homoglyphs(mut self, on: bool) -> Self {
        self.homoglyphs = on;
        self
    }
}

/// Deterministic, total text canonicalizer.
///
/// Stages run in a fixed order:
///
/// 1. basic: [`Trim`], [`FoldCase`]
/// 2. transliterate: [`Transliterate`]
/// 3. aggressive, first half: [`StripFormatControls`], [`RemoveDiacritics`]
/// 4. homoglyphs: [`ReplaceHomoglyphs`]
/// 5. aggressive, second half: [`StripPunctuation`], [`CollapseRepeats`],
///    [`JoinSpacedLetters`], [`CollapseRepeats`]
///
/// Symbol substitutions (`@`, `$`) must be resolved before punctuation is
/// stripped. Diacritics go before homoglyph replacement because removing a
/// mark can uncover a look-alike (`ѐ` → Cyrillic `е`).
///
/// `normalize(normalize(s)) == normalize(s)` holds for every configuration.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    pipeline: Pipeline,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        let mut pipeline = Pipeline::new();
        if config.basic {
            pipeline = pipeline.push(Trim).push(FoldCase);
        }
        if config.transliterate {
            pipeline = pipeline.push(Transliterate);
        }
        if config.aggressive {
            pipeline = pipeline.push(StripFormatControls).push(RemoveDiacritics);
        }
        if config.homoglyphs {
            pipeline = pipeline.push(ReplaceHomoglyphs);
        }
        if config.aggressive {
            pipeline = pipeline
                .push(StripPunctuation)
                .push(CollapseRepeats)
                .push(JoinSpacedLetters)
                // joining letters can create new runs: "b a a d" → "baad"
                .push(CollapseRepeats);
        }
        Self { config, pipeline }
    }

    pub fn config(&self) -> NormalizerConfig {
        self.config
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Canonicalize `text`. Borrows when no stage had anything to change.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pipeline.process(Cow::Borrowed(text))
    }
}
