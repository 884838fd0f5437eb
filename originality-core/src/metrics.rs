// originality-core/src/metrics.rs
//! The individual dataset metrics.
//!
//! Each public `compute_*` function is independent of the others. Degenerate
//! inputs never fail:
//!
//! | input                         | entropy | perplexity | diversity |
//! |-------------------------------|---------|------------|-----------|
//! | no documents                  | 0       | 1          | 0         |
//! | one document                  | by text | by text    | 1         |
//! | several, no tokens at all     | 0       | 1          | 0         |

use originality_entropy::entropy::{
    normalized_entropy, normalized_perplexity, perplexity_from_entropy, shannon_entropy_from_counts,
};
use originality_entropy::similarity::pairwise_cosine;
use originality_entropy::statistics::SummaryStats;

use crate::frequency::FrequencyDistribution;
use crate::tfidf::TfIdfModel;

/// Diversity reported for a dataset with a single document: nothing suggests duplication.
pub const SINGLE_DOCUMENT_DIVERSITY: f64 = 1.0;

/// Diversity reported when there is nothing to compare (no documents, or no tokens anywhere).
pub const EMPTY_DATASET_DIVERSITY: f64 = 0.0;

/// Entropy-derived metrics of one frequency distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenStatistics {
    pub token_count: usize,
    pub vocabulary_size: usize,
    /// Raw Shannon entropy in bits per token.
    pub entropy_bits: f64,
    /// Entropy scaled into `[0, 1]`.
    pub entropy: f64,
    /// Effective vocabulary size, `>= 1`.
    pub perplexity: f64,
    /// Perplexity over vocabulary size, in `[0, 1]`.
    pub normalized_perplexity: f64,
}

impl TokenStatistics {
    pub fn from_distribution(dist: &FrequencyDistribution) -> Self {
        let vocabulary_size = dist.vocabulary_size();
        let entropy_bits = shannon_entropy_from_counts(dist.counts());
        let perplexity = perplexity_from_entropy(entropy_bits, vocabulary_size);

        Self {
            token_count: dist.total(),
            vocabulary_size,
            entropy_bits,
            entropy: normalized_entropy(entropy_bits, vocabulary_size),
            perplexity,
            normalized_perplexity: normalized_perplexity(perplexity, vocabulary_size),
        }
    }

    pub fn from_documents<S: AsRef<str>>(documents: &[S]) -> Self {
        let stats = Self::from_distribution(&FrequencyDistribution::from_documents(documents));
        if stats.token_count == 0 {
            log::warn!("Dataset of {} documents contains no tokens.", documents.len());
        }
        stats
    }
}

/// Pairwise-similarity view of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiversityEstimate {
    /// `1 - mean(similarity)`, in `[0, 1]`.
    pub diversity: f64,
    /// Number of unordered document pairs compared.
    pub pair_count: usize,
    /// Mean and spread of the pairwise cosine similarities.
    pub similarity: SummaryStats,
}

impl DiversityEstimate {
    /// Builds TF-IDF vectors and compares every pair of documents.
    ///
    /// Cost is `O(k^2 * d)` for `k` documents and `d` terms per document;
    /// callers with very large datasets should sample.
    pub fn from_documents<S: AsRef<str>>(documents: &[S]) -> Self {
        let fixed = |diversity| Self { diversity, pair_count: 0, similarity: SummaryStats::EMPTY };

        match documents.len() {
            0 => {
                log::warn!("Embedding diversity requested for an empty dataset.");
                return fixed(EMPTY_DATASET_DIVERSITY);
            }
            1 => {
                log::debug!("Single document; diversity defaults to {}.", SINGLE_DOCUMENT_DIVERSITY);
                return fixed(SINGLE_DOCUMENT_DIVERSITY);
            }
            _ => {}
        }

        let model = TfIdfModel::fit(documents);
        if model.vocabulary_size() == 0 {
            log::warn!("No document in the dataset contains tokens; nothing to compare.");
            return fixed(EMPTY_DATASET_DIVERSITY);
        }

        let sims = pairwise_cosine(model.vectors());
        let similarity = SummaryStats::of_similarities(&sims);
        let diversity = (1.0 - similarity.mean).clamp(0.0, 1.0);
        log::debug!(
            "Compared {} document pairs: mean similarity {:.6}, diversity {:.6}.",
            sims.len(),
            similarity.mean,
            diversity
        );

        Self { diversity, pair_count: sims.len(), similarity }
    }
}

/// Normalized Shannon entropy of the dataset's token distribution, in `[0, 1]`.
pub fn compute_dataset_entropy<S: AsRef<str>>(documents: &[S]) -> f64 {
    TokenStatistics::from_documents(documents).entropy
}

/// Perplexity (effective vocabulary size) of the dataset's token distribution, `>= 1`.
pub fn compute_perplexity<S: AsRef<str>>(documents: &[S]) -> f64 {
    TokenStatistics::from_documents(documents).perplexity
}

/// Perplexity divided by vocabulary size, in `[0, 1]`; `1` for a uniform distribution.
pub fn compute_normalized_perplexity<S: AsRef<str>>(documents: &[S]) -> f64 {
    TokenStatistics::from_documents(documents).normalized_perplexity
}

/// `1 - mean pairwise TF-IDF cosine similarity`, in `[0, 1]`.
///
/// A single document scores [`SINGLE_DOCUMENT_DIVERSITY`]; an empty dataset,
/// or one where no document has tokens, scores [`EMPTY_DATASET_DIVERSITY`].
/// A token-less document among others is a zero vector with similarity `0`
/// to everything. Runs in `O(k^2 * d)`.
pub fn compute_embedding_diversity<S: AsRef<str>>(documents: &[S]) -> f64 {
    DiversityEstimate::from_documents(documents).diversity
}
