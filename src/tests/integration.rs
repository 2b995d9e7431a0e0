#[cfg(test)]
mod integration_tests {

    use crate::{
        DirectorySource, Filter, FilterError, FilterOptions, LoadError, LoadOutcome,
        NormalizerConfig, Verdict, WordSource,
    };
    use std::fs;
    use tempfile::TempDir;

    fn resources() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.bdw"), "badword\r\nd@rn\n\n").unwrap();
        fs::write(dir.path().join("ru.bdw"), "жопа\n").unwrap();
        fs::write(dir.path().join("de.bdw"), [0x66, 0x6f, 0xff, 0x0a]).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(dir.path().join("xyz.bdw"), "ignored").unwrap();
        dir
    }

    #[test]
    fn directory_discovery_lists_stems_with_extension() {
        let dir = resources();
        let source = DirectorySource::new(dir.path());
        assert_eq!(source.discover().unwrap(), ["de", "en", "ru", "xyz"]);
    }

    #[test]
    fn production_filter_from_directory() {
        let dir = resources();
        let source = DirectorySource::new(dir.path());
        let filter = Filter::builder().source(&source).build().unwrap();

        // `de` was selected but fails to decode; it stays in the constructed set
        let codes: Vec<_> = filter.languages().iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, ["de", "en", "ru"]);

        let report = filter.load_report();
        let mut skipped: Vec<_> = report.skipped().map(|(code, _)| code).collect();
        skipped.sort_unstable();
        assert_eq!(skipped, ["de", "xyz"]);
        assert!(report.skipped().any(|(code, err)| {
            code == "de" && matches!(err, LoadError::Encoding { .. })
        }));
        assert!(report.entries().iter().any(|entry| {
            entry.code == "en" && matches!(entry.outcome, LoadOutcome::Loaded { words: 2, .. })
        }));

        assert!(filter.is_profane("what the DARN"));
        assert!(filter.is_profane("ЖОПА"));
        assert!(filter.is_profane("zhopa"));
        assert!(!filter.is_profane("this is clean text"));
    }

    #[test]
    fn restricted_languages() {
        let dir = resources();
        let source = DirectorySource::new(dir.path());
        let filter = Filter::builder()
            .source(&source)
            .languages(["ru"])
            .build()
            .unwrap();
        assert!(!filter.is_profane("badword"));
        assert!(filter.is_profane("жопа"));

        let err = Filter::builder()
            .source(&source)
            .languages(["zz"])
            .build()
            .unwrap_err();
        assert!(matches!(err, FilterError::UnsupportedLanguage(code) if code == "zz"));
    }

    #[test]
    fn missing_root_fails_discovery() {
        let dir = TempDir::new().unwrap();
        let source = DirectorySource::new(dir.path().join("absent"));
        let err = Filter::builder().source(&source).build().unwrap_err();
        assert!(matches!(err, FilterError::Discovery(LoadError::Discovery { .. })));
    }

    #[test]
    fn padded_list_lines_match_without_normalization() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.bdw"), "0 \n\tdarn  \r\n").unwrap();
        let source = DirectorySource::new(dir.path());
        let filter = Filter::builder()
            .source(&source)
            .normalizer(NormalizerConfig::none())
            .build()
            .unwrap();
        assert!(filter.is_profane("0"));
        assert!(filter.is_profane("well darn"));
    }

    #[test]
    fn custom_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.txt"), "darn\n").unwrap();
        let source = DirectorySource::new(dir.path()).with_extension("txt");
        let filter = Filter::builder().source(&source).build().unwrap();
        assert_eq!(filter.censor("darn it", '#').as_deref(), Some("#### it"));
    }

    #[test]
    fn add_words_extends_live_filter() {
        let dir = resources();
        let source = DirectorySource::new(dir.path());
        let mut filter = Filter::builder()
            .source(&source)
            .languages(["en"])
            .build()
            .unwrap();
        assert!(!filter.is_profane("heck"));
        assert_eq!(filter.add_words(["Heck", "heck", "badword"]), 1);
        assert_eq!(
            filter.filter_text("oh heck", &FilterOptions::default().replace_with('*')),
            Verdict::Redacted("oh ****".to_owned())
        );
    }

    #[test]
    fn filter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Filter>();
    }
}
