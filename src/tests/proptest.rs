mod prop_tests {
    use crate::{
        Corpus, Filter, FilterOptions, MemorySource, Normalizer, NormalizerConfig,
        similarity::{quick_ratio, ratio, real_quick_ratio},
    };
    use proptest::prelude::*;

    fn any_config() -> impl Strategy<Value = NormalizerConfig> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(basic, aggressive, transliterate, homoglyphs)| NormalizerConfig {
                basic,
                aggressive,
                transliterate,
                homoglyphs,
            },
        )
    }

    // Latin, digits, leet symbols, accents, Cyrillic, full-width, zero-width
    // and assorted whitespace.
    const ALPHABET: &str = "[a-zA-Z0-9@$!.,_ \t\n\u{00E0}-\u{00FF}\u{0430}-\u{044F}\u{0410}-\u{042F}\u{FF21}-\u{FF3A}\u{200B}\u{0301}]{0,40}";

    proptest! {
        #[test]
        fn normalize_is_idempotent(config in any_config(), s in ALPHABET) {
            let n = Normalizer::new(config);
            let once = n.normalize(&s).into_owned();
            let twice = n.normalize(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn full_pipeline_idempotent_on_any_text(s in ".{0,200}") {
            let n = Normalizer::default();
            let once = n.normalize(&s).into_owned();
            let twice = n.normalize(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn corpus_words_are_flagged_by_their_own_filter(
            config in any_config(),
            words in prop::collection::vec("[a-zA-Z@$0-9\u{0430}-\u{044F}]{1,12}", 1..8),
        ) {
            let source = MemorySource::new().with_language("en", words.clone());
            let filter = Filter::builder().source(&source).normalizer(config).build().unwrap();
            for word in &words {
                if filter.normalize(word).split_whitespace().next().is_some() {
                    prop_assert!(filter.is_profane(word), "{word}");
                }
            }
        }

        #[test]
        fn add_words_is_monotonic(
            first in prop::collection::vec("[a-z]{1,8}", 0..6),
            second in prop::collection::vec("[a-z]{1,8}", 0..6),
            probe in "[a-z]{1,8}",
        ) {
            let n = Normalizer::default();
            let mut corpus = Corpus::build(&first, &n);
            let before = corpus.len();
            let flagged = corpus.contains(&n.normalize(&probe));
            corpus.add_words(&second, &n);
            prop_assert!(corpus.len() >= before);
            if flagged {
                prop_assert!(corpus.contains(&n.normalize(&probe)));
            }
        }

        #[test]
        fn fuzzy_flags_whatever_exact_flags(
            word in "[a-z]{2,10}",
            text in "[a-z ]{0,30}",
            t in 0.01f64..0.99,
        ) {
            let source = MemorySource::new().with_language("en", [word]);
            let filter = Filter::builder().source(&source).build().unwrap();
            if filter.is_profane(&text) {
                prop_assert!(filter.filter_text(&text, &FilterOptions::from_threshold(t)).is_profane());
            }
        }

        #[test]
        fn ratio_bounds_hold(a in "[a-dж]{0,12}", b in "[a-dж]{0,12}") {
            let r = ratio(&a, &b);
            prop_assert!((0.0..=1.0).contains(&r));
            prop_assert!(quick_ratio(&a, &b) + 1e-12 >= r);
            prop_assert!(real_quick_ratio(&a, &b) + 1e-12 >= quick_ratio(&a, &b));
            prop_assert!((ratio(&a, &a) - 1.0).abs() < 1e-12);
        }
    }
}
