//! Common types for resampling results

use bootstrap_core::{utils, Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level; `level` must lie in (0, 1)
    pub fn new(level: f64) -> Result<Self> {
        if level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(Error::InvalidParameter(format!(
                "Confidence level {level} must be in (0, 1)"
            )))
        }
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Two-sided standard normal critical value, 1.96 at 95%
    pub fn z_score(&self) -> Result<f64> {
        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| Error::Computation(format!("Standard normal unavailable: {e}")))?;
        Ok(normal.inverse_cdf(1.0 - self.tail_probability()))
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Scalar estimates from independent resamples at one target size
///
/// Standard deviations are the population form, matching the `std`
/// statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingDistribution {
    statistic: String,
    sample_size: usize,
    estimates: Vec<f64>,
}

impl SamplingDistribution {
    pub fn new(statistic: impl Into<String>, sample_size: usize, estimates: Vec<f64>) -> Self {
        Self {
            statistic: statistic.into(),
            sample_size,
            estimates,
        }
    }

    /// Name of the statistic that produced the estimates
    pub fn statistic(&self) -> &str {
        &self.statistic
    }

    /// Length of each resample
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// One estimate per resample, in resample index order
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    /// Number of resamples
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    pub fn mean(&self) -> f64 {
        utils::mean(&self.estimates)
    }

    pub fn std_dev(&self) -> f64 {
        utils::population_std(&self.estimates)
    }

    /// `std_dev / |reference|`
    pub fn relative_error(&self, reference: f64) -> f64 {
        utils::relative_spread(self.std_dev(), reference)
    }

    /// Normal-approximation error bars: `mean ± z * std_dev`
    pub fn error_bars(&self, level: f64) -> Result<ConfidenceInterval> {
        if self.estimates.is_empty() {
            return Err(Error::empty_input("error bars"));
        }
        let level = ConfidenceLevel::new(level)?;
        let (mean, sd) = (self.mean(), self.std_dev());
        let margin = level.z_score()? * sd;
        Ok(ConfidenceInterval::new(
            mean - margin,
            mean + margin,
            mean,
            level.value(),
        ))
    }

    /// Condensed, serializable view
    pub fn summary(&self) -> DistributionSummary {
        DistributionSummary {
            statistic: self.statistic.clone(),
            sample_size: self.sample_size,
            n_resamples: self.len(),
            mean: self.mean(),
            std_dev: self.std_dev(),
        }
    }
}

/// Mean and spread of a [`SamplingDistribution`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub statistic: String,
    pub sample_size: usize,
    pub n_resamples: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl fmt::Display for DistributionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (m={}, B={}): mean={:.4}, sd={:.4}",
            self.statistic, self.sample_size, self.n_resamples, self.mean, self.std_dev
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_confidence_interval() {
        let ci = ConfidenceInterval::new(2.0, 8.0, 5.0, 0.95);

        assert_eq!(ci.width(), 6.0);
        assert_eq!(ci.margin_of_error(), 3.0);
        assert!(ci.contains(5.0));
        assert!(!ci.contains(1.0));
        assert!(!ci.contains(9.0));
    }

    #[test]
    fn test_confidence_level() {
        let level = ConfidenceLevel::new(0.95).unwrap();
        assert_eq!(level.value(), 0.95);
        assert!((level.alpha() - 0.05).abs() < 1e-10);
        assert!((level.tail_probability() - 0.025).abs() < 1e-10);
        assert_relative_eq!(level.z_score().unwrap(), 1.959964, epsilon = 1e-5);

        assert!(ConfidenceLevel::new(1.5).is_err());
        assert!(ConfidenceLevel::new(0.0).is_err());
        assert_eq!(format!("{level}"), "95.0%");
    }

    #[test]
    fn test_distribution_moments() {
        let dist = SamplingDistribution::new("mean", 10, vec![4.0, 5.0, 6.0, 5.0]);
        assert_eq!(dist.len(), 4);
        assert_relative_eq!(dist.mean(), 5.0);
        assert_relative_eq!(dist.std_dev(), 0.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(dist.relative_error(-5.0), 0.5_f64.sqrt() / 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_error_bars() {
        let dist = SamplingDistribution::new("mean", 10, vec![9.0, 11.0]);
        // mean 10, population sd 1
        let bars = dist.error_bars(0.95).unwrap();
        assert_relative_eq!(bars.lower, 10.0 - 1.96, epsilon = 1e-2);
        assert_relative_eq!(bars.upper, 10.0 + 1.96, epsilon = 1e-2);
        assert_eq!(bars.estimate, 10.0);

        assert!(dist.error_bars(1.0).is_err());
        let empty = SamplingDistribution::new("mean", 10, vec![]);
        assert!(matches!(empty.error_bars(0.95), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_summary_serializes() {
        let dist = SamplingDistribution::new("std", 5, vec![1.0, 3.0]);
        let summary = dist.summary();
        assert_eq!(summary.n_resamples, 2);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"statistic\":\"std\""));
        assert!(summary.to_string().starts_with("std (m=5, B=2)"));
    }
}
