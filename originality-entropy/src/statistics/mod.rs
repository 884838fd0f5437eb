// originality-entropy/src/statistics/mod.rs
use libm::sqrt;

/// Mean and spread of a set of pairwise document similarities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    /// Arithmetic mean; `1 - mean` is the dataset's diversity.
    pub mean: f64,
    /// Population standard deviation. High spread means a few near-duplicate
    /// pairs inside an otherwise varied dataset.
    pub std_dev: f64,
}

impl SummaryStats {
    /// Reported when there are no pairs to compare.
    pub const EMPTY: SummaryStats = SummaryStats { mean: 0.0, std_dev: 0.0 };

    /// Summarizes `similarities` in one pass (Welford's update).
    ///
    /// Values are folded left to right, so a fixed pair order gives a fixed result.
    pub fn of_similarities(similarities: &[f64]) -> Self {
        if similarities.is_empty() {
            return Self::EMPTY;
        }

        let (mut mean, mut sq_dev) = (0.0, 0.0);
        for (seen, &sim) in similarities.iter().enumerate() {
            let delta = sim - mean;
            mean += delta / (seen + 1) as f64;
            sq_dev += delta * (sim - mean);
        }

        let variance = (sq_dev / similarities.len() as f64).max(0.0);
        Self { mean, std_dev: sqrt(variance) }
    }
}
