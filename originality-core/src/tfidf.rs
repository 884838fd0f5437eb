// originality-core/src/tfidf.rs
//! TF-IDF document vectors over a dataset's shared vocabulary.
//!
//! Weighting follows the common smoothed scheme: raw term counts as TF,
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, and every document vector
//! scaled to unit length. The `+ 1` keeps terms present in every document
//! from vanishing entirely.

use std::collections::{BTreeMap, BTreeSet};

use originality_entropy::similarity::SparseVector;

use crate::tokenizer::tokenize;

/// A fitted TF-IDF model: vocabulary, IDF weights and one vector per document.
#[derive(Debug, Clone, Default)]
pub struct TfIdfModel {
    /// term -> dimension, assigned in sorted term order
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

impl TfIdfModel {
    /// Fits the model on `documents` and vectorizes each of them.
    ///
    /// Documents without tokens get a zero vector.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (dim, (term, df)) in doc_freq.iter().enumerate() {
            vocabulary.insert((*term).to_string(), dim);
            idf.push(((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0);
        }

        let vectors = tokenized
            .iter()
            .map(|tokens| {
                let entries = tokens
                    .iter()
                    .filter_map(|t| vocabulary.get(t.as_str()).map(|&dim| (dim, 1.0)))
                    .collect();
                let tf = SparseVector::from_entries(entries);
                let weighted = tf.entries().iter().map(|&(dim, count)| (dim, count * idf[dim])).collect();
                SparseVector::from_entries(weighted).l2_normalized()
            })
            .collect();

        log::debug!(
            "TF-IDF model fitted on {} documents with {} terms.",
            documents.len(),
            vocabulary.len()
        );

        Self { vocabulary, idf, vectors }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// IDF weight of `term`, if it occurs in the fitted dataset.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&dim| self.idf[dim])
    }

    /// Unit-length (or zero) vectors, one per document, in input order.
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }
}
