//! Integration tests for wordrank

use wordrank::*;

/// Sample text for testing
const SAMPLE_TEXT: &str = r#"
The plaintiff filed this action for a declaration of title to the premises and
for ejectment of the defendant from the premises. Amaradasa sold the premises to
the plaintiff. The defendant deposited the rent with the Rent Control Board.
The landlord refused the rent. The tenant occupied the premises until her death.
"#;

fn keywords(text: &str, config: TextRankConfig) -> Vec<RankedKeyword> {
    KeywordExtractor::new(Tokenizer::new(), config)
        .unwrap()
        .extract(text)
        .unwrap()
}

#[test]
fn test_full_pipeline() {
    let config = TextRankConfig::default().with_lowercase(true).with_top_n(5);
    let extractor = KeywordExtractor::new(Tokenizer::new(), config).unwrap();
    let analysis = extractor.analyze(SAMPLE_TEXT).unwrap();

    assert!(analysis.vocabulary_size > 0);
    assert!(analysis.pair_count > 0);
    assert!(analysis.iterations >= 1 && analysis.iterations <= 10);

    let top = analysis.top_n(5);
    assert_eq!(top.len(), 5);
    for (i, keyword) in top.iter().enumerate() {
        assert_eq!(keyword.rank, i + 1);
        assert!(keyword.score >= 0.15 - 1e-12);
        assert!(!keyword.word.is_empty());
    }
    for pair in top.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // "premises" appears in most sentences and links to many words
    assert_eq!(top[0].word, "premises");
}

#[test]
fn test_stopwords_never_ranked() {
    let ranked = KeywordExtractor::with_defaults(Tokenizer::new())
        .analyze(SAMPLE_TEXT)
        .unwrap()
        .ranked();

    let filter = StopwordFilter::new("en");
    assert!(ranked.iter().all(|k| !filter.is_stopword(&k.word)));
}

#[test]
fn test_extra_stopwords_removed() {
    let base = keywords(SAMPLE_TEXT, TextRankConfig::default().with_top_n(100));
    assert!(base.iter().any(|k| k.word == "premises"));

    let filtered = keywords(
        SAMPLE_TEXT,
        TextRankConfig::default()
            .with_top_n(100)
            .with_extra_stopwords(["Premises"]),
    );
    assert!(filtered.iter().all(|k| k.word != "premises"));
}

#[test]
fn test_lowercase_merges_case_variants() {
    let text = "Rent board. rent control.";
    let mixed = keywords(text, TextRankConfig::default().with_top_n(100));
    let folded = keywords(text, TextRankConfig::default().with_top_n(100).with_lowercase(true));

    assert!(mixed.iter().any(|k| k.word == "Rent"));
    assert!(folded.iter().all(|k| k.word != "Rent"));
    assert_eq!(folded.len() + 1, mixed.len());
}

#[test]
fn test_deterministic() {
    let config = TextRankConfig::default().with_top_n(20);
    let first = keywords(SAMPLE_TEXT, config.clone());
    let second = keywords(SAMPLE_TEXT, config);

    assert_eq!(first, second);
}

#[test]
fn test_empty_and_stopword_only_text() {
    let config = TextRankConfig::default();
    assert!(keywords("", config.clone()).is_empty());
    assert!(keywords("the and of it was", config).is_empty());
}

#[test]
fn test_json_preprocessor_scenario() {
    let json = r#"{"sentences": [[
        {"text": "alpha", "pos": "NOUN"},
        {"text": "beta", "pos": "NOUN"},
        {"text": "gamma", "pos": "NOUN"}
    ]]}"#;
    let config = TextRankConfig::default().with_window_size(2);
    let analysis = KeywordExtractor::new(JsonPreprocessor, config)
        .unwrap()
        .analyze(json)
        .unwrap();

    let nw = &analysis.node_weight;
    assert!(nw.get("beta").unwrap() > nw.get("alpha").unwrap());
    assert_eq!(nw.get("alpha"), nw.get("gamma"));
    let words: Vec<_> = analysis.ranked().into_iter().map(|k| k.word).collect();
    assert_eq!(words, vec!["beta", "alpha", "gamma"]);
}

#[test]
fn test_json_preprocessor_error_propagates() {
    let err = KeywordExtractor::with_defaults(JsonPreprocessor)
        .analyze("plain text is not a tagged document")
        .unwrap_err();
    assert!(matches!(err, TextRankError::Serialization { .. }));
}

#[test]
fn test_stage_by_stage_matches_extractor() {
    let config = TextRankConfig::default();
    let sentences = Tokenizer::new().tokenize(SAMPLE_TEXT);

    let words = WordSelector::new(&config).select(&sentences);
    let vocab = Vocabulary::from_sentences(&words);
    let pairs = graph::pairs::extract_pairs(&vocab.encode(&words), config.window_size, config.pair_dedup);
    let graph = CooccurrenceGraph::build(vocab.len(), &pairs);
    let result = StandardPageRank::new()
        .with_damping(config.damping)
        .with_threshold(config.convergence_threshold)
        .with_max_steps(config.max_steps)
        .run(&graph);
    let manual = ranking::rank(&NodeWeight::from_scores(&vocab, &result));

    let analysis = analyze_sentences(&sentences, &config).unwrap();
    assert_eq!(analysis.ranked(), manual);
    assert_eq!(analysis.iterations, result.iterations);
}

#[test]
fn test_parallel_runs_share_nothing() {
    let extractor = KeywordExtractor::with_defaults(Tokenizer::new());
    let expected = extractor.extract(SAMPLE_TEXT).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| extractor.extract(SAMPLE_TEXT).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
