// originality-core/src/aggregator.rs
//! Fuses the individual metrics into the Human Signal Score.

use std::collections::BTreeMap;

use crate::config::{MetricKind, WeightConfig};
use crate::errors::ConfigurationError;
use crate::metrics::{DiversityEstimate, TokenStatistics};

/// Metric values on a common `[0, 1]` scale, as fed to the aggregator.
///
/// `perplexity` here is the normalized perplexity; the raw value is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricValues {
    pub entropy: f64,
    pub diversity: f64,
    pub perplexity: f64,
}

impl MetricValues {
    pub fn get(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::Entropy => self.entropy,
            MetricKind::Diversity => self.diversity,
            MetricKind::Perplexity => self.perplexity,
        }
    }
}

/// Convex combination of `values` under `weights`, clamped to `[0, 1]`.
///
/// Contributions are summed in [`MetricKind::ALL`] order; zero weights are skipped.
pub fn combine(values: &MetricValues, weights: &WeightConfig) -> f64 {
    let mut score = 0.0;
    for (metric, weight) in weights.normalized() {
        if weight > 0.0 {
            score += weight * values.get(metric);
        }
    }
    score.clamp(0.0, 1.0)
}

/// Computes only the metrics that carry weight.
pub fn compute_weighted_metrics<S: AsRef<str>>(documents: &[S], weights: &WeightConfig) -> MetricValues {
    let mut values = MetricValues::default();

    if weights.is_active(MetricKind::Entropy) || weights.is_active(MetricKind::Perplexity) {
        let tokens = TokenStatistics::from_documents(documents);
        values.entropy = tokens.entropy;
        values.perplexity = tokens.normalized_perplexity;
    }
    if weights.is_active(MetricKind::Diversity) {
        values.diversity = DiversityEstimate::from_documents(documents).diversity;
    }
    values
}

/// The Human Signal Score of `documents`, in `[0, 1]`.
///
/// `None` uses [`DEFAULT_WEIGHTS`](crate::config::DEFAULT_WEIGHTS). The weights
/// were validated when the `WeightConfig` was built, so scoring cannot fail.
pub fn compute_human_signal_score<S: AsRef<str>>(documents: &[S], weights: Option<&WeightConfig>) -> f64 {
    let weights = weights.copied().unwrap_or_default();
    let values = compute_weighted_metrics(documents, &weights);
    let score = combine(&values, &weights);
    log::debug!("Human signal score for {} documents: {:.6}", documents.len(), score);
    score
}

/// Like [`compute_human_signal_score`], taking an unvalidated name-to-weight mapping.
///
/// Fails with a [`ConfigurationError`] for unknown metric names, negative or
/// non-finite weights, or when no weight is positive.
pub fn compute_human_signal_score_from_map<S: AsRef<str>>(
    documents: &[S],
    weights: &BTreeMap<String, f64>,
) -> Result<f64, ConfigurationError> {
    let config = WeightConfig::from_pairs(weights.iter().map(|(k, &v)| (k.as_str(), v)))?;
    Ok(compute_human_signal_score(documents, Some(&config)))
}
