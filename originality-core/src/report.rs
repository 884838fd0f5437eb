// originality-core/src/report.rs
//! One-shot analysis producing every metric plus the final score.

use serde::{Deserialize, Serialize};

use crate::aggregator::{combine, MetricValues};
use crate::config::{MetricKind, WeightConfig};
use crate::metrics::{DiversityEstimate, TokenStatistics};

/// Normalized weight of one metric, as used for the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedWeight {
    pub metric: MetricKind,
    pub weight: f64,
}

/// Everything computed for a dataset in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub documents: usize,
    pub tokens: usize,
    pub vocabulary_size: usize,
    /// Normalized Shannon entropy.
    pub entropy: f64,
    pub perplexity: f64,
    pub normalized_perplexity: f64,
    pub diversity: f64,
    pub similarity_pairs: usize,
    pub similarity_mean: f64,
    pub similarity_std_dev: f64,
    pub weights: Vec<AppliedWeight>,
    pub human_signal_score: f64,
}

impl ScoreReport {
    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Computes all metrics, regardless of weight, and the weighted score.
///
/// The score equals [`compute_human_signal_score`](crate::aggregator::compute_human_signal_score)
/// for the same inputs.
pub fn analyze<S: AsRef<str>>(documents: &[S], weights: &WeightConfig) -> ScoreReport {
    let tokens = TokenStatistics::from_documents(documents);
    let diversity = DiversityEstimate::from_documents(documents);

    let values = MetricValues {
        entropy: tokens.entropy,
        diversity: diversity.diversity,
        perplexity: tokens.normalized_perplexity,
    };
    let score = combine(&values, weights);

    log::info!(
        "Analyzed {} documents ({} tokens, {} distinct): score {:.4}",
        documents.len(),
        tokens.token_count,
        tokens.vocabulary_size,
        score
    );

    ScoreReport {
        documents: documents.len(),
        tokens: tokens.token_count,
        vocabulary_size: tokens.vocabulary_size,
        entropy: tokens.entropy,
        perplexity: tokens.perplexity,
        normalized_perplexity: tokens.normalized_perplexity,
        diversity: diversity.diversity,
        similarity_pairs: diversity.pair_count,
        similarity_mean: diversity.similarity.mean,
        similarity_std_dev: diversity.similarity.std_dev,
        weights: weights
            .normalized()
            .into_iter()
            .filter(|&(_, w)| w > 0.0)
            .map(|(metric, weight)| AppliedWeight { metric, weight })
            .collect(),
        human_signal_score: score,
    }
}
