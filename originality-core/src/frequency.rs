// originality-core/src/frequency.rs
//! Dataset-wide token frequency model.

use std::collections::BTreeMap;

use crate::tokenizer::tokenize;

/// Token counts accumulated over every document of a dataset.
///
/// Keys iterate in sorted order, so anything summed over the distribution
/// is computed in the same order on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyDistribution {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl FrequencyDistribution {
    /// Tokenizes each document and merges all tokens into one distribution.
    pub fn from_documents<S: AsRef<str>>(documents: &[S]) -> Self {
        let mut dist = Self::default();
        for doc in documents {
            dist.extend(tokenize(doc.as_ref()));
        }
        log::debug!(
            "Frequency model built from {} documents: {} tokens, {} distinct.",
            documents.len(),
            dist.total,
            dist.counts.len()
        );
        dist
    }

    /// Adds tokens to the distribution.
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, tokens: I) {
        for token in tokens {
            *self.counts.entry(token).or_insert(0) += 1;
            self.total += 1;
        }
    }

    /// Total token count `N`.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens `V`.
    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// `(token, count)` pairs in sorted token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + Clone + '_ {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// Counts in sorted token order.
    pub fn counts(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.counts.values().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset() {
        let empty: [&str; 0] = [];
        let dist = FrequencyDistribution::from_documents(&empty);
        assert!(dist.is_empty());
        assert_eq!(dist.vocabulary_size(), 0);

        let blank = FrequencyDistribution::from_documents(&["", "  ,. "]);
        assert!(blank.is_empty());
    }

    #[test]
    fn test_counts_span_all_documents() {
        let dist = FrequencyDistribution::from_documents(&["a a b", "B c", ""]);
        assert_eq!(dist.total(), 5);
        assert_eq!(dist.vocabulary_size(), 3);
        assert_eq!(dist.count("a"), 2);
        assert_eq!(dist.count("b"), 2);
        assert_eq!(dist.count("c"), 1);
        assert_eq!(dist.count("missing"), 0);
    }

    #[test]
    fn test_sum_of_counts_equals_total() {
        let dist = FrequencyDistribution::from_documents(&["the cat sat on the mat", "the end"]);
        assert_eq!(dist.counts().sum::<usize>(), dist.total());
        assert!(dist.counts().all(|c| c >= 1));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let dist = FrequencyDistribution::from_documents(&["zeta alpha mu alpha"]);
        let tokens: Vec<&str> = dist.iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec!["alpha", "mu", "zeta"]);
    }
}
