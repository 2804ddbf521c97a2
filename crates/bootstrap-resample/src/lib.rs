//! Bootstrap resampling for sampling-error estimation
//!
//! This crate approximates the sampling distribution of a statistic by
//! repeatedly resampling with replacement:
//!
//! - **Uniform bootstrap**: resamples drawn uniformly from the whole dataset
//! - **Stratified bootstrap**: proportional resamples drawn within each stratum
//!   of a [`bootstrap_strata::Stratification`], keeping rare values represented
//!
//! Every resample draws from its own indexed RNG stream, so runs with the same
//! seed agree across the sequential and parallel engines.
//!
//! # Examples
//!
//! ```rust
//! use bootstrap_resample::UniformBootstrap;
//! use bootstrap_core::{sequential, statistic_fn, utils};
//!
//! let data: Vec<f64> = (1..=10).map(f64::from).collect();
//! let mean = statistic_fn("mean", |xs: &[f64]| Ok(utils::mean(xs)));
//!
//! let dist = UniformBootstrap::new(sequential())
//!     .with_resamples(500)
//!     .with_seed(42)
//!     .resample_distribution(&data, &mean, data.len())
//!     .unwrap();
//!
//! let bars = dist.error_bars(0.95).unwrap();
//! println!("{bars}");
//! assert!(bars.contains(5.5));
//! ```

pub mod api;
mod bootstrap;
mod types;
pub mod workspace;

// Re-exports
pub use api::{stratified_bootstrap, uniform_bootstrap, DEFAULT_RESAMPLES};
pub use bootstrap::{StratifiedBootstrap, UniformBootstrap};
pub use types::{ConfidenceInterval, ConfidenceLevel, DistributionSummary, SamplingDistribution};
