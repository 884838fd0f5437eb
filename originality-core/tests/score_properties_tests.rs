// originality-core/tests/score_properties_tests.rs
use originality_core::{
    analyze, compute_dataset_entropy, compute_embedding_diversity, compute_human_signal_score,
    compute_perplexity, ConfigurationError, WeightConfig, SINGLE_DOCUMENT_DIVERSITY,
};
use test_log::test;

const EPSILON: f64 = 1e-6;

fn sample_datasets() -> Vec<Vec<&'static str>> {
    vec![
        vec![],
        vec![""],
        vec!["unique content here"],
        vec!["a a a a", "b b b b"],
        vec!["hello world", "hello world", "hello world"],
        vec!["a quick brown fox", "jumps over the lazy dog"],
        vec!["Numbers 1, 2, 3!", "", "numbers... numbers?", "Ωμέγα καὶ ἄλφα"],
        vec!["the model said the same thing", "the model said the same thing again", "something else entirely"],
    ]
}

#[test]
fn test_metrics_stay_in_bounds() {
    let weights = [
        WeightConfig::default(),
        WeightConfig::from_pairs([("entropy", 0.7), ("diversity", 0.3)]).unwrap(),
        WeightConfig::from_pairs([("perplexity", 2.0), ("diversity", 1.0)]).unwrap(),
    ];

    for docs in sample_datasets() {
        let entropy = compute_dataset_entropy(&docs);
        let perplexity = compute_perplexity(&docs);
        let diversity = compute_embedding_diversity(&docs);
        assert!((0.0..=1.0).contains(&entropy), "entropy {} for {:?}", entropy, docs);
        assert!(perplexity >= 1.0, "perplexity {} for {:?}", perplexity, docs);
        assert!((0.0..=1.0).contains(&diversity), "diversity {} for {:?}", diversity, docs);

        for w in &weights {
            let score = compute_human_signal_score(&docs, Some(w));
            assert!((0.0..=1.0).contains(&score), "score {} for {:?}", score, docs);
        }
    }
}

#[test]
fn test_identical_documents() {
    let docs = ["we value your feedback", "we value your feedback", "we value your feedback"];
    assert!(compute_embedding_diversity(&docs) < EPSILON);
    // Entropy reflects the single document's own token distribution: 4 distinct, uniform.
    assert!((compute_dataset_entropy(&docs) - 1.0).abs() < EPSILON);
}

#[test]
fn test_disjoint_vocabularies() {
    let docs = ["a a a a", "b b b b"];
    assert!((compute_dataset_entropy(&docs) - 1.0).abs() < EPSILON);
    assert!(compute_embedding_diversity(&docs) > 1.0 - EPSILON);
}

#[test]
fn test_degenerate_datasets_do_not_fail() {
    let empty: [&str; 0] = [];
    assert_eq!(compute_dataset_entropy(&empty), 0.0);
    assert_eq!(compute_perplexity(&empty), 1.0);
    let _ = compute_human_signal_score(&empty, None);

    let blank = [""];
    assert_eq!(compute_dataset_entropy(&blank), 0.0);
    assert_eq!(compute_perplexity(&blank), 1.0);
    assert_eq!(compute_embedding_diversity(&blank), SINGLE_DOCUMENT_DIVERSITY);
    let score = compute_human_signal_score(&blank, None);
    assert!((score - 0.5).abs() < EPSILON);
}

#[test]
fn test_weight_override_moves_toward_upweighted_metric() {
    // Identical documents: diversity 0, entropy high.
    let docs = ["red green blue yellow", "red green blue yellow"];
    let entropy = compute_dataset_entropy(&docs);
    let diversity = compute_embedding_diversity(&docs);
    assert!(entropy > diversity);

    let default_score = compute_human_signal_score(&docs, None);
    let entropy_heavy = WeightConfig::from_pairs([("entropy", 0.7), ("diversity", 0.3)]).unwrap();
    let diversity_heavy = WeightConfig::from_pairs([("entropy", 0.3), ("diversity", 0.7)]).unwrap();

    let up = compute_human_signal_score(&docs, Some(&entropy_heavy));
    let down = compute_human_signal_score(&docs, Some(&diversity_heavy));
    assert!(up > default_score);
    assert!(down < default_score);
    assert!((up - (0.7 * entropy + 0.3 * diversity)).abs() < EPSILON);
}

#[test]
fn test_scoring_is_idempotent() {
    let docs = vec![
        "Synthetic data can hide repetition.".to_string(),
        "Human writing tends to wander.".to_string(),
        "Synthetic data can hide repetition!".to_string(),
    ];
    let weights = WeightConfig::from_pairs([("entropy", 0.7), ("diversity", 0.3)]).unwrap();

    let first = compute_human_signal_score(&docs, Some(&weights));
    let second = compute_human_signal_score(&docs, Some(&weights));
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(analyze(&docs, &weights), analyze(&docs, &weights));
}

#[test]
fn test_configuration_errors() {
    assert_eq!(
        WeightConfig::from_pairs([("foo", 1.0)]).unwrap_err(),
        ConfigurationError::UnknownMetric("foo".to_string())
    );
    assert_eq!(
        WeightConfig::from_pairs([("entropy", 0.0), ("diversity", 0.0)]).unwrap_err(),
        ConfigurationError::NoPositiveWeight
    );
}

#[test]
fn test_duplicated_dataset_scores_lower_than_varied_one() {
    let duplicated = ["buy now limited offer"; 5];
    let varied = [
        "The river bent twice before reaching the old mill.",
        "Compilers turn source text into machine instructions.",
        "She planted tomatoes, basil and a stubborn fig tree.",
        "Interest rates rose for the third consecutive quarter.",
        "A chess endgame with two knights rarely forces mate.",
    ];
    assert!(compute_human_signal_score(&varied, None) > compute_human_signal_score(&duplicated, None));
}
