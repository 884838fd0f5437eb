// originality-core/src/lib.rs
//! # Originality Core Library
//!
//! `originality-core` measures how diverse a text dataset is and fuses the
//! measurements into a single bounded **Human Signal Score**, meant to flag
//! synthetic, duplicated or low-diversity data before it is used for
//! training.
//!
//! The library is pure and stateless: every call tokenizes, counts and
//! compares from scratch, and nothing is cached between calls.
//!
//! ## Modules
//!
//! * `tokenizer`: Lowercase Unicode word tokenization.
//! * `frequency`: Dataset-wide token frequency distribution.
//! * `tfidf`: TF-IDF document vectors over the shared vocabulary.
//! * `metrics`: Entropy, perplexity and embedding diversity.
//! * `config`: `MetricKind` and the validated `WeightConfig`.
//! * `aggregator`: Weighted combination into the Human Signal Score.
//! * `report`: One-shot analysis returning every metric at once.
//! * `errors`: `ConfigurationError` and `SignalError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use originality_core::{compute_human_signal_score, WeightConfig};
//!
//! let docs = ["the quick brown fox", "jumps over the lazy dog"];
//!
//! let default_score = compute_human_signal_score(&docs, None);
//! assert!((0.0..=1.0).contains(&default_score));
//!
//! let weights = WeightConfig::from_pairs([("entropy", 0.7), ("diversity", 0.3)]).unwrap();
//! let weighted = compute_human_signal_score(&docs, Some(&weights));
//! assert!((0.0..=1.0).contains(&weighted));
//! ```
//!
//! ## Error Handling
//!
//! Degenerate datasets (empty, one document, documents without tokens) are
//! not errors. Invalid weights are rejected with a [`ConfigurationError`]
//! when the [`WeightConfig`] is built; file loading adds I/O and parse
//! variants through [`SignalError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod aggregator;
pub mod config;
pub mod errors;
pub mod frequency;
pub mod metrics;
pub mod report;
pub mod tfidf;
pub mod tokenizer;

/// Re-exports the individual metric functions.
pub use metrics::{
    compute_dataset_entropy,
    compute_embedding_diversity,
    compute_normalized_perplexity,
    compute_perplexity,
    DiversityEstimate,
    TokenStatistics,
    EMPTY_DATASET_DIVERSITY,
    SINGLE_DOCUMENT_DIVERSITY,
};

/// Re-exports the score aggregator.
pub use aggregator::{
    combine,
    compute_human_signal_score,
    compute_human_signal_score_from_map,
    MetricValues,
};

/// Re-exports the weight configuration types.
pub use config::{parse_override_pairs, read_weight_file, MetricKind, WeightConfig, DEFAULT_WEIGHTS};

/// Re-exports the custom error types for clear error reporting.
pub use errors::{ConfigurationError, SignalError};

pub use frequency::FrequencyDistribution;
pub use report::{analyze, AppliedWeight, ScoreReport};
pub use tfidf::TfIdfModel;
pub use tokenizer::tokenize;
