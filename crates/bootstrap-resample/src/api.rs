//! High-level API for bootstrap resampling
//!
//! Thin wrappers over [`UniformBootstrap`] and [`StratifiedBootstrap`] on the
//! feature-selected engine with an entropy seed. Build the engines directly
//! for seeded or engine-specific runs.

use crate::bootstrap::{StratifiedBootstrap, UniformBootstrap};
use crate::types::SamplingDistribution;
use bootstrap_core::{auto_engine, Result, Statistic};
use bootstrap_strata::Stratification;

pub use crate::bootstrap::DEFAULT_RESAMPLES;

/// Uniform bootstrap of `statistic` over `n_samples` resamples of `sample_size`
///
/// # Example
/// ```rust
/// use bootstrap_resample::api::uniform_bootstrap;
/// use bootstrap_core::{statistic_fn, utils};
///
/// let data: Vec<f64> = (1..=10).map(f64::from).collect();
/// let mean = statistic_fn("mean", |xs: &[f64]| Ok(utils::mean(xs)));
///
/// let dist = uniform_bootstrap(&data, &mean, data.len(), 200).unwrap();
/// assert_eq!(dist.len(), 200);
/// assert!((dist.mean() - 5.5).abs() < 0.5);
/// ```
pub fn uniform_bootstrap<S>(
    data: &[f64],
    statistic: &S,
    sample_size: usize,
    n_samples: usize,
) -> Result<SamplingDistribution>
where
    S: Statistic + ?Sized,
{
    UniformBootstrap::new(auto_engine())
        .with_resamples(n_samples)
        .resample_distribution(data, statistic, sample_size)
}

/// Stratified bootstrap of `statistic` at `target_ratio` of the dataset size
///
/// # Example
/// ```rust
/// use bootstrap_resample::api::stratified_bootstrap;
/// use bootstrap_strata::build_strata;
/// use bootstrap_core::{statistic_fn, utils};
///
/// let data: Vec<f64> = (0..1000).map(|i| f64::from(i % 37)).collect();
/// let strata = build_strata(&data, 10).unwrap();
/// let mean = statistic_fn("mean", |xs: &[f64]| Ok(utils::mean(xs)));
///
/// let dist = stratified_bootstrap(&strata, &mean, 0.1, 100).unwrap();
/// assert!(dist.sample_size() >= strata.len());
/// ```
pub fn stratified_bootstrap<S>(
    strata: &Stratification,
    statistic: &S,
    target_ratio: f64,
    n_samples: usize,
) -> Result<SamplingDistribution>
where
    S: Statistic + ?Sized,
{
    StratifiedBootstrap::new(auto_engine())
        .with_resamples(n_samples)
        .resample_distribution(strata, statistic, target_ratio)
}
