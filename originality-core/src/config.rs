//! Weight configuration for the Human Signal Score.
//!
//! Metric names are resolved to a closed [`MetricKind`] set when a
//! [`WeightConfig`] is built, so scoring never matches strings. Weights can
//! come from code, from `KEY=VALUE` command-line overrides, or from a YAML
//! file mapping metric names to weights:
//!
//! ```yaml
//! entropy: 0.7
//! diversity: 0.3
//! ```
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigurationError, SignalError};

/// The metrics a weight can be attached to.
///
/// Declaration order is the fixed order in which weighted contributions are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Entropy,
    Diversity,
    Perplexity,
}

impl MetricKind {
    /// All metrics in summation order.
    pub const ALL: [MetricKind; 3] = [MetricKind::Entropy, MetricKind::Diversity, MetricKind::Perplexity];

    pub fn name(self) -> &'static str {
        match self {
            MetricKind::Entropy => "entropy",
            MetricKind::Diversity => "diversity",
            MetricKind::Perplexity => "perplexity",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "entropy" => Ok(MetricKind::Entropy),
            "diversity" => Ok(MetricKind::Diversity),
            "perplexity" => Ok(MetricKind::Perplexity),
            other => Err(ConfigurationError::UnknownMetric(other.to_string())),
        }
    }
}

/// Validated, non-negative weights with at least one positive entry.
///
/// Metrics that are not mentioned carry weight `0` and are not computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightConfig {
    weights: [f64; 3],
}

/// Equal weighting of entropy and diversity; perplexity does not participate.
pub const DEFAULT_WEIGHTS: WeightConfig = WeightConfig { weights: [0.5, 0.5, 0.0] };

impl Default for WeightConfig {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl WeightConfig {
    /// Builds a configuration from `(metric name, weight)` pairs.
    ///
    /// Later pairs override earlier ones for the same metric.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut weights = [0.0; 3];
        for (key, value) in pairs {
            let metric: MetricKind = key.as_ref().parse()?;
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidWeight {
                    metric: metric.name().to_string(),
                    value,
                });
            }
            weights[metric.index()] = value;
        }

        if !weights.iter().any(|&w| w > 0.0) {
            return Err(ConfigurationError::NoPositiveWeight);
        }

        debug!("Weight configuration accepted: {:?}", weights);
        Ok(Self { weights })
    }

    /// Parses command-line overrides such as `entropy=0.7` or `entropy=0.7,diversity=0.3`.
    pub fn parse_overrides(items: &[String]) -> Result<Self, ConfigurationError> {
        Self::from_pairs(parse_override_pairs(items)?)
    }

    /// Loads weights from a YAML mapping of metric name to weight.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SignalError> {
        let pairs = read_weight_file(path)?;
        Ok(Self::from_pairs(pairs)?)
    }

    /// The raw (unnormalized) weight of `metric`.
    pub fn weight(&self, metric: MetricKind) -> f64 {
        self.weights[metric.index()]
    }

    /// Weights divided by their sum, in summation order. Zero weights are kept.
    ///
    /// Weights are first scaled by the largest one so the sum cannot overflow
    /// to infinity for large finite inputs.
    pub fn normalized(&self) -> [(MetricKind, f64); 3] {
        let max = self.weights.iter().copied().fold(0.0, f64::max);
        let scaled = self.weights.map(|w| w / max);
        let total: f64 = scaled.iter().sum();
        MetricKind::ALL.map(|m| (m, scaled[m.index()] / total))
    }

    /// Whether `metric` contributes to the score.
    pub fn is_active(&self, metric: MetricKind) -> bool {
        self.weights[metric.index()] > 0.0
    }
}

/// Splits `KEY=VALUE` items (each possibly comma-separated) into raw pairs.
///
/// Metric names are not checked here; [`WeightConfig::from_pairs`] does that.
pub fn parse_override_pairs(items: &[String]) -> Result<Vec<(String, f64)>, ConfigurationError> {
    let mut pairs = Vec::new();
    for item in items {
        for entry in item.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| ConfigurationError::MalformedOverride(entry.to_string()))?;
            let value: f64 = value
                .trim()
                .parse()
                .map_err(|_| ConfigurationError::MalformedOverride(entry.to_string()))?;
            pairs.push((key.trim().to_string(), value));
        }
    }
    Ok(pairs)
}

/// Reads a YAML weight file into raw pairs, sorted by metric name.
pub fn read_weight_file<P: AsRef<Path>>(path: P) -> Result<Vec<(String, f64)>, SignalError> {
    let path = path.as_ref();
    info!("Loading weights from: {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| SignalError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let map: BTreeMap<String, f64> = serde_yml::from_str(&text).map_err(|e| SignalError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    debug!("Read {} weight entries from {}.", map.len(), path.display());
    Ok(map.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = WeightConfig::default();
        assert_eq!(w.weight(MetricKind::Entropy), 0.5);
        assert_eq!(w.weight(MetricKind::Diversity), 0.5);
        assert!(!w.is_active(MetricKind::Perplexity));
    }

    #[test]
    fn test_unknown_metric_rejected() {
        let err = WeightConfig::from_pairs([("foo", 1.0)]).unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownMetric("foo".to_string()));
    }

    #[test]
    fn test_all_zero_rejected() {
        let err = WeightConfig::from_pairs([("entropy", 0.0), ("diversity", 0.0)]).unwrap_err();
        assert_eq!(err, ConfigurationError::NoPositiveWeight);
        let empty: [(&str, f64); 0] = [];
        assert_eq!(WeightConfig::from_pairs(empty).unwrap_err(), ConfigurationError::NoPositiveWeight);
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert!(matches!(
            WeightConfig::from_pairs([("entropy", -1.0), ("diversity", 1.0)]),
            Err(ConfigurationError::InvalidWeight { .. })
        ));
        assert!(matches!(
            WeightConfig::from_pairs([("diversity", f64::NAN)]),
            Err(ConfigurationError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_normalized_sums_to_one() {
        let w = WeightConfig::from_pairs([("entropy", 3.0), ("diversity", 1.0)]).unwrap();
        let n = w.normalized();
        assert_eq!(n[0], (MetricKind::Entropy, 0.75));
        assert_eq!(n[1], (MetricKind::Diversity, 0.25));
        assert_eq!(n[2], (MetricKind::Perplexity, 0.0));
    }

    #[test]
    fn test_normalized_huge_weights_stay_convex() {
        let w = WeightConfig::from_pairs([("entropy", 1e308), ("diversity", 1e308)]).unwrap();
        let n = w.normalized();
        assert_eq!(n[0], (MetricKind::Entropy, 0.5));
        assert_eq!(n[1], (MetricKind::Diversity, 0.5));
        assert_eq!(n[2], (MetricKind::Perplexity, 0.0));

        let tiny = WeightConfig::from_pairs([("entropy", f64::MIN_POSITIVE), ("diversity", 0.0)]).unwrap();
        assert_eq!(tiny.normalized()[0], (MetricKind::Entropy, 1.0));
    }

    #[test]
    fn test_later_pairs_override() {
        let w = WeightConfig::from_pairs([("entropy", 1.0), ("entropy", 2.0)]).unwrap();
        assert_eq!(w.weight(MetricKind::Entropy), 2.0);
        assert_eq!(w.weight(MetricKind::Diversity), 0.0);
    }

    #[test]
    fn test_parse_overrides_comma_separated() {
        let items = vec!["entropy=0.7,diversity=0.3".to_string(), " perplexity = 1 ".to_string()];
        let w = WeightConfig::parse_overrides(&items).unwrap();
        assert_eq!(w.weight(MetricKind::Entropy), 0.7);
        assert_eq!(w.weight(MetricKind::Diversity), 0.3);
        assert_eq!(w.weight(MetricKind::Perplexity), 1.0);
    }

    #[test]
    fn test_parse_overrides_malformed() {
        let missing_eq = vec!["entropy".to_string()];
        assert_eq!(
            parse_override_pairs(&missing_eq).unwrap_err(),
            ConfigurationError::MalformedOverride("entropy".to_string())
        );
        let bad_value = vec!["entropy=lots".to_string()];
        assert!(matches!(
            WeightConfig::parse_overrides(&bad_value),
            Err(ConfigurationError::MalformedOverride(_))
        ));
    }

    #[test]
    fn test_metric_kind_round_trip_names() {
        for m in MetricKind::ALL {
            assert_eq!(m.name().parse::<MetricKind>().unwrap(), m);
        }
    }
}
