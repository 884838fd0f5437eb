// originality-entropy/src/entropy/mod.rs
use libm::{exp2, log2};

/// Calculates the Shannon entropy of a frequency table.
///
/// Returns the entropy in bits per symbol. Zero counts are skipped, so
/// `log2(0)` is never evaluated. Counts are summed in the order given;
/// callers that need bit-for-bit stable results must pass them in a fixed order.
pub fn shannon_entropy_from_counts<I>(counts: I) -> f64
where
    I: IntoIterator<Item = usize> + Clone,
{
    let total: usize = counts.clone().into_iter().sum();
    if total == 0 {
        return 0.0;
    }

    let len = total as f64;
    let mut entropy = 0.0;

    for count in counts {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * log2(p);
        }
    }

    entropy
}

/// Scales raw entropy (bits) into `[0, 1]` by the maximum achievable for
/// `vocabulary_size` distinct symbols.
///
/// A vocabulary of one symbol or none carries no diversity and yields `0.0`.
pub fn normalized_entropy(entropy_bits: f64, vocabulary_size: usize) -> f64 {
    if vocabulary_size <= 1 {
        return 0.0;
    }
    let max_entropy = log2(vocabulary_size as f64);
    (entropy_bits / max_entropy).clamp(0.0, 1.0)
}

/// Effective vocabulary size, `2^H` for an entropy measured in bits.
///
/// Defined as `1.0` when the vocabulary has at most one symbol.
pub fn perplexity_from_entropy(entropy_bits: f64, vocabulary_size: usize) -> f64 {
    if vocabulary_size <= 1 {
        return 1.0;
    }
    exp2(entropy_bits).max(1.0)
}

/// Perplexity divided by the vocabulary size, in `(0, 1]`.
///
/// An empty vocabulary yields `0.0`.
pub fn normalized_perplexity(perplexity: f64, vocabulary_size: usize) -> f64 {
    if vocabulary_size == 0 {
        return 0.0;
    }
    (perplexity / vocabulary_size as f64).clamp(0.0, 1.0)
}
