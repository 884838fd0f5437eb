// originality-entropy/src/similarity/mod.rs
//! Sparse vectors and cosine similarity.
//!
//! A [`SparseVector`] stores `(dimension, weight)` pairs sorted by dimension,
//! which lets dot products run as a single merge pass.

extern crate alloc;
use alloc::vec::Vec;
use libm::sqrt;

/// A sparse vector with entries sorted by strictly increasing dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds a vector from arbitrary `(dimension, weight)` pairs.
    ///
    /// Entries are sorted, duplicate dimensions are summed and zero weights dropped.
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|&(dim, _)| dim);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (dim, weight) in entries {
            match merged.last_mut() {
                Some(last) if last.0 == dim => last.1 += weight,
                _ => merged.push((dim, weight)),
            }
        }
        merged.retain(|&(_, w)| w != 0.0);

        Self { entries: merged }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        sqrt(self.entries.iter().map(|&(_, w)| w * w).sum::<f64>())
    }

    /// Returns a copy scaled to unit length. A zero vector stays zero.
    pub fn l2_normalized(&self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            return self.clone();
        }
        Self {
            entries: self.entries.iter().map(|&(d, w)| (d, w / norm)).collect(),
        }
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let (a, b) = (&self.entries, &other.entries);
        let mut sum = 0.0;

        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                core::cmp::Ordering::Less => i += 1,
                core::cmp::Ordering::Greater => j += 1,
                core::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Cosine of the angle between two sparse vectors.
///
/// Returns `0.0` when either vector has zero magnitude.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Cosine similarity of every unordered pair `(i, j)`, `i < j`, in row-major order.
///
/// Runs in `O(k^2 * d)` for `k` vectors with `d` non-zero entries each.
pub fn pairwise_cosine(vectors: &[SparseVector]) -> Vec<f64> {
    let k = vectors.len();
    let mut sims = Vec::with_capacity(k.saturating_sub(1) * k / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            sims.push(cosine_similarity(&vectors[i], &vectors[j]));
        }
    }
    sims
}
