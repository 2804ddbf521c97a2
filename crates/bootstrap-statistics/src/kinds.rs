//! The statistic registry
//!
//! [`StatisticKind`] is a closed set of named statistics, one variant per
//! kernel in [`crate::functions`]. Names are stable snake-case identifiers so
//! a configuration layer can select statistics by string.

use crate::functions;
use crate::kmeans::{KMeans1d, DEFAULT_CLUSTERS};
use bootstrap_core::{Error, Result, Statistic};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A statistic from the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticKind {
    Mean,
    Variance,
    #[serde(rename = "std")]
    StdDev,
    /// Nearest-rank percentile, `p` in `[0, 100]`
    Percentile(u8),
    Max,
    Min,
    NonZeroAvg,
    TopKAvg,
    EvenNumberAvg,
    NonZeroMin,
    NonZeroMode,
    /// Mean of k-means centroids; non-deterministic unless seeded
    AverageOfKmeans { clusters: usize, seed: Option<u64> },
}

impl StatisticKind {
    /// Median, i.e. the nearest-rank 50th percentile
    pub const MEDIAN: Self = Self::Percentile(50);
    pub const P95: Self = Self::Percentile(95);
    pub const P99: Self = Self::Percentile(99);

    /// Unseeded k-means average with the default cluster count
    pub fn average_of_kmeans() -> Self {
        Self::AverageOfKmeans {
            clusters: DEFAULT_CLUSTERS,
            seed: None,
        }
    }

    /// Seeded k-means average, reproducible across runs
    pub fn seeded_kmeans(seed: u64) -> Self {
        Self::AverageOfKmeans {
            clusters: DEFAULT_CLUSTERS,
            seed: Some(seed),
        }
    }

    /// Every registry member, in reporting order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Mean,
            Self::StdDev,
            Self::Variance,
            Self::P99,
            Self::P95,
            Self::NonZeroAvg,
            Self::TopKAvg,
            Self::EvenNumberAvg,
            Self::MEDIAN,
            Self::average_of_kmeans(),
            Self::Max,
            Self::NonZeroMin,
            Self::NonZeroMode,
            Self::Min,
        ]
    }

    /// Stable identifier, accepted by [`FromStr`]
    pub fn name(&self) -> String {
        match self {
            Self::Mean => "mean".into(),
            Self::Variance => "variance".into(),
            Self::StdDev => "std".into(),
            Self::Percentile(50) => "median".into(),
            Self::Percentile(p) => format!("percentile_{p}"),
            Self::Max => "max".into(),
            Self::Min => "min".into(),
            Self::NonZeroAvg => "non_zero_avg".into(),
            Self::TopKAvg => "top_k_avg".into(),
            Self::EvenNumberAvg => "even_number_avg".into(),
            Self::NonZeroMin => "non_zero_min".into(),
            Self::NonZeroMode => "non_zero_mode".into(),
            Self::AverageOfKmeans { .. } => "average_of_kmeans".into(),
        }
    }

    /// Human-readable label for reports
    pub fn label(&self) -> String {
        match self {
            Self::Mean => "Mean".into(),
            Self::Variance => "Variance".into(),
            Self::StdDev => "Standard Deviation".into(),
            Self::Percentile(50) => "Median".into(),
            Self::Percentile(p) => format!("{p}th Percentile"),
            Self::Max => "Max".into(),
            Self::Min => "Min".into(),
            Self::NonZeroAvg => "Non Zero Average".into(),
            Self::TopKAvg => "Top K Average".into(),
            Self::EvenNumberAvg => "Average of Even Numbers".into(),
            Self::NonZeroMin => "Non-Zero Min".into(),
            Self::NonZeroMode => "Non-Zero Mode".into(),
            Self::AverageOfKmeans { .. } => "Average of K-Means".into(),
        }
    }

    /// Evaluate on `data`
    pub fn compute(&self, data: &[f64]) -> Result<f64> {
        match *self {
            Self::Mean => functions::mean(data),
            Self::Variance => functions::variance(data),
            Self::StdDev => functions::std_dev(data),
            Self::Percentile(p) => functions::percentile(data, f64::from(p)),
            Self::Max => functions::max(data),
            Self::Min => functions::min(data),
            Self::NonZeroAvg => functions::non_zero_avg(data),
            Self::TopKAvg => functions::top_k_avg(data),
            Self::EvenNumberAvg => functions::even_number_avg(data),
            Self::NonZeroMin => functions::non_zero_min(data),
            Self::NonZeroMode => functions::non_zero_mode(data),
            Self::AverageOfKmeans { clusters, seed } => {
                let mut rng = match seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                KMeans1d::new(clusters).centroid_mean(data, &mut rng)
            }
        }
    }
}

impl fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for StatisticKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let kind = match normalized.as_str() {
            "mean" => Self::Mean,
            "variance" | "var" => Self::Variance,
            "std" | "std_dev" | "stddev" => Self::StdDev,
            "median" => Self::MEDIAN,
            "max" => Self::Max,
            "min" => Self::Min,
            "non_zero_avg" => Self::NonZeroAvg,
            "top_k_avg" => Self::TopKAvg,
            "even_number_avg" => Self::EvenNumberAvg,
            "non_zero_min" => Self::NonZeroMin,
            "non_zero_mode" => Self::NonZeroMode,
            "average_of_kmeans" | "kmeans" => Self::average_of_kmeans(),
            other => {
                let p = other
                    .strip_prefix("percentile_")
                    .or_else(|| other.strip_prefix('p'))
                    .and_then(|p| p.parse::<u8>().ok())
                    .filter(|p| *p <= 100)
                    .ok_or_else(|| Error::UnknownStatistic(s.to_string()))?;
                Self::Percentile(p)
            }
        };
        Ok(kind)
    }
}

/// A registry statistic bundled with its precomputed name
///
/// [`Statistic::name`] returns `&str`, so the enum's formatted name is cached
/// here once instead of being rebuilt per evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedStatistic {
    kind: StatisticKind,
    name: String,
}

impl NamedStatistic {
    pub fn new(kind: StatisticKind) -> Self {
        Self {
            name: kind.name(),
            kind,
        }
    }

    pub fn kind(&self) -> StatisticKind {
        self.kind
    }
}

impl From<StatisticKind> for NamedStatistic {
    fn from(kind: StatisticKind) -> Self {
        Self::new(kind)
    }
}

impl Statistic for NamedStatistic {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        self.kind.compute(sample)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_deterministic(&self) -> bool {
        !matches!(self.kind, StatisticKind::AverageOfKmeans { seed: None, .. })
    }

    fn closed_form_standard_error(&self, sample: &[f64]) -> Option<f64> {
        match self.kind {
            StatisticKind::Mean => functions::mean_standard_error(sample).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_name_round_trip() {
        for kind in StatisticKind::all() {
            let parsed: StatisticKind = kind.name().parse().unwrap();
            assert_eq!(parsed, kind, "round trip failed for {kind}");
        }
        assert_eq!("percentile_95".parse::<StatisticKind>().unwrap(), StatisticKind::P95);
        assert_eq!("p99".parse::<StatisticKind>().unwrap(), StatisticKind::P99);
        assert_eq!("percentile_50".parse::<StatisticKind>().unwrap(), StatisticKind::MEDIAN);
        assert_eq!(" Mean ".parse::<StatisticKind>().unwrap(), StatisticKind::Mean);
    }

    #[test]
    fn test_unknown_names() {
        for bad in ["geomean", "percentile_101", "p", "percentile_x", ""] {
            assert!(
                matches!(bad.parse::<StatisticKind>(), Err(Error::UnknownStatistic(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(StatisticKind::StdDev.label(), "Standard Deviation");
        assert_eq!(StatisticKind::P99.label(), "99th Percentile");
        assert_eq!(StatisticKind::MEDIAN.label(), "Median");
    }

    #[test]
    fn test_compute_dispatch() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_relative_eq!(StatisticKind::Mean.compute(&data).unwrap(), 5.5);
        assert_eq!(StatisticKind::MEDIAN.compute(&data).unwrap(), 6.0);
        assert_eq!(StatisticKind::Max.compute(&data).unwrap(), 10.0);
        assert_relative_eq!(StatisticKind::EvenNumberAvg.compute(&data).unwrap(), 6.0);
        assert!(StatisticKind::TopKAvg.compute(&data).is_err());
    }

    #[test]
    fn test_seeded_kmeans_is_deterministic() {
        let data: Vec<f64> = (0..50).map(|i| (i % 7) as f64 * 3.0).collect();
        let stat = NamedStatistic::new(StatisticKind::seeded_kmeans(42));
        assert!(stat.is_deterministic());
        assert_eq!(stat.evaluate(&data).unwrap(), stat.evaluate(&data).unwrap());

        let unseeded = NamedStatistic::new(StatisticKind::average_of_kmeans());
        assert!(!unseeded.is_deterministic());
        assert!(unseeded.evaluate(&data).unwrap().is_finite());
    }

    #[test]
    fn test_closed_form_only_for_mean() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let mean = NamedStatistic::new(StatisticKind::Mean);
        assert!(mean.closed_form_standard_error(&data).is_some());
        let max = NamedStatistic::new(StatisticKind::Max);
        assert!(max.closed_form_standard_error(&data).is_none());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&StatisticKind::StdDev).unwrap();
        assert_eq!(json, "\"std\"");
        let kind: StatisticKind = serde_json::from_str("{\"percentile\":95}").unwrap();
        assert_eq!(kind, StatisticKind::P95);
    }
}
