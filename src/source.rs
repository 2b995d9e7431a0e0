//! Word-list suppliers.
//!
//! A [`WordSource`] knows which languages it can serve and hands out the raw,
//! un-normalized words of one language at a time. Failures are per language;
//! the filter records them in a [`LoadReport`] and carries on.

use std::{
    collections::BTreeMap,
    fmt, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Default file extension of on-disk word lists.
pub const DEFAULT_EXTENSION: &str = "bdw";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid language code `{0}`: expected two ASCII letters")]
    InvalidCode(String),
    #[error("no word list for language `{code}` at {resource}")]
    Missing { code: String, resource: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: simdutf8::basic::Utf8Error,
    },
    #[error("failed to list word lists in {root}: {source}")]
    Discovery {
        root: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Two-letter lowercase language identifier, e.g. `en`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LangCode(String);

impl LangCode {
    /// Trim, lowercase and validate a raw code. Only two ASCII letters are
    /// accepted, which also keeps codes safe to splice into file names.
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        let code = raw.trim().to_ascii_lowercase();
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase()) {
            Ok(Self(code))
        } else {
            Err(LoadError::InvalidCode(raw.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LangCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for LangCode {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Supplier of raw words per language.
pub trait WordSource {
    /// Raw identifiers of every language this source can serve. They are
    /// sanitized by the caller; invalid ones are skipped, not fatal.
    fn discover(&self) -> Result<Vec<String>, LoadError>;

    /// Raw words of one language.
    fn load(&self, code: &LangCode) -> Result<Vec<String>, LoadError>;
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn discover(&self) -> Result<Vec<String>, LoadError> {
        (**self).discover()
    }

    fn load(&self, code: &LangCode) -> Result<Vec<String>, LoadError> {
        (**self).load(code)
    }
}

/// Word lists stored as `<root>/<code>.<extension>`, one word per line.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, code: &LangCode) -> PathBuf {
        self.root.join(format!("{code}.{}", self.extension))
    }
}

impl WordSource for DirectorySource {
    fn discover(&self) -> Result<Vec<String>, LoadError> {
        let discovery = |source| LoadError::Discovery {
            root: self.root.clone(),
            source,
        };

        let mut codes = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(discovery)? {
            let path = entry.map_err(discovery)?.path();
            if !path.is_file() {
                continue;
            }
            let matches_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == self.extension);
            if !matches_extension {
                continue;
            }
            if let Some(stem) = path.file_stem() {
                codes.push(stem.to_string_lossy().into_owned());
            }
        }
        codes.sort_unstable();
        Ok(codes)
    }

    fn load(&self, code: &LangCode) -> Result<Vec<String>, LoadError> {
        let path = self.path_for(code);
        let bytes = fs::read(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::Missing {
                    code: code.to_string(),
                    resource: path.display().to_string(),
                }
            } else {
                LoadError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        let text = simdutf8::basic::from_utf8(&bytes)
            .map_err(|source| LoadError::Encoding { path, source })?;
        Ok(parse_word_list(text))
    }
}

/// Split a newline-delimited list into trimmed words, dropping blank lines
/// and a leading BOM.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.trim_start_matches('\u{FEFF}')
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Word lists held in memory, keyed by raw language code.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lists: BTreeMap<String, Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language<I, S>(mut self, code: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists
            .entry(code.into())
            .or_default()
            .extend(words.into_iter().map(Into::into));
        self
    }
}

impl WordSource for MemorySource {
    fn discover(&self) -> Result<Vec<String>, LoadError> {
        Ok(self.lists.keys().cloned().collect())
    }

    fn load(&self, code: &LangCode) -> Result<Vec<String>, LoadError> {
        // Keys are raw; match them the same way discovery results are sanitized
        self.lists
            .iter()
            .find(|(raw, _)| LangCode::parse(raw).is_ok_and(|parsed| parsed == *code))
            .map(|(_, words)| words.clone())
            .ok_or_else(|| LoadError::Missing {
                code: code.to_string(),
                resource: "memory".to_owned(),
            })
    }
}

/// Result of loading one language.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded { words: usize, added: usize },
    Skipped(LoadError),
}

#[derive(Debug)]
pub struct LanguageLoad {
    /// Sanitized code when valid, the raw identifier otherwise.
    pub code: String,
    pub outcome: LoadOutcome,
}

/// Per-language record of a corpus build.
#[derive(Debug, Default)]
pub struct LoadReport {
    entries: Vec<LanguageLoad>,
}

impl LoadReport {
    pub(crate) fn record(&mut self, code: impl Into<String>, outcome: LoadOutcome) {
        self.entries.push(LanguageLoad {
            code: code.into(),
            outcome,
        });
    }

    pub fn entries(&self) -> &[LanguageLoad] {
        &self.entries
    }

    pub fn loaded(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().filter_map(|entry| match entry.outcome {
            LoadOutcome::Loaded { .. } => Some(entry.code.as_str()),
            LoadOutcome::Skipped(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, &LoadError)> + '_ {
        self.entries.iter().filter_map(|entry| match &entry.outcome {
            LoadOutcome::Skipped(err) => Some((entry.code.as_str(), err)),
            LoadOutcome::Loaded { .. } => None,
        })
    }

    /// `true` when nothing was skipped.
    pub fn is_complete(&self) -> bool {
        self.skipped().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_code_sanitizing() {
        assert_eq!(LangCode::parse(" EN ").unwrap().as_str(), "en");
        assert_eq!(LangCode::parse("ru").unwrap().to_string(), "ru");
        for bad in ["", "e", "eng", "e1", "../", "é", "e n"] {
            assert!(
                matches!(LangCode::parse(bad), Err(LoadError::InvalidCode(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn word_list_parsing() {
        let words = parse_word_list("\u{FEFF}one\r\ntwo\n\n  \nthree");
        assert_eq!(words, ["one", "two", "three"]);
    }

    #[test]
    fn word_list_lines_are_trimmed() {
        let words = parse_word_list("0 \n\tbad word\t\n  x");
        assert_eq!(words, ["0", "bad word", "x"]);
    }

    #[test]
    fn memory_source_roundtrip() {
        let source = MemorySource::new()
            .with_language("en", ["bad"])
            .with_language("EN ", ["worse"]);
        assert_eq!(source.discover().unwrap(), ["EN ", "en"]);
        let en = LangCode::parse("en").unwrap();
        assert!(!source.load(&en).unwrap().is_empty());
        let de = LangCode::parse("de").unwrap();
        assert!(matches!(source.load(&de), Err(LoadError::Missing { .. })));
    }

    #[test]
    fn report_partitions_outcomes() {
        let mut report = LoadReport::default();
        report.record("en", LoadOutcome::Loaded { words: 3, added: 3 });
        report.record("x1", LoadOutcome::Skipped(LoadError::InvalidCode("x1".into())));
        assert_eq!(report.loaded().collect::<Vec<_>>(), ["en"]);
        assert_eq!(report.skipped().count(), 1);
        assert!(!report.is_complete());
    }
}
