//! Multilingual profanity filtering that sees through common evasion:
//! look-alike characters, leet substitutions, transliteration, and letters
//! split up by spaces or punctuation.
//!
//! ```no_run
//! use badwords::{DirectorySource, Filter, FilterOptions};
//!
//! let source = DirectorySource::new("resources");
//! let filter = Filter::builder().source(&source).languages(["en"]).build()?;
//! assert!(filter.is_profane("b@dw0rd"));
//! let redacted = filter.filter_text("a badword here", &FilterOptions::from_threshold(0.8).replace_with('*'));
//! # Ok::<(), badwords::FilterError>(())
//! ```

pub mod confusables;
pub mod corpus;
pub mod filter;
pub mod matcher;
pub mod normalizer;
pub mod pipeline;
pub mod similarity;
pub mod source;
pub mod stage;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use corpus::Corpus;
pub use filter::{Filter, FilterBuilder, FilterError, FilterOptions, Verdict};
pub use matcher::{MatchMode, Threshold, ThresholdError};
pub use normalizer::{Normalizer, NormalizerConfig};
pub use source::{
    DirectorySource, LangCode, LoadError, LoadOutcome, LoadReport, MemorySource, WordSource,
};
pub use stage::Stage;
