//! # bootstrap-stats
//!
//! Estimate how far a summary statistic computed on a sample is from its
//! value on the full dataset, and check that estimate against reality.
//!
//! The toolkit is split into focused crates, re-exported here:
//!
//! - [`core`]: errors, the [`Statistic`] trait, execution engines and RNG streams
//! - [`statistics`]: the named statistic registry (mean, percentiles, k-means, ..)
//! - [`strata`]: frequency-balanced stratification of a dataset
//! - [`resample`]: uniform and stratified bootstrap resampling
//! - [`sweep`]: bootstrap versus ground-truth error curves across sample sizes
//!
//! ## Quick start
//!
//! ```rust
//! use bootstrap_stats::prelude::*;
//!
//! let data: Vec<f64> = (0..4_000).map(|i| f64::from((i * 13) % 200)).collect();
//!
//! let config = SweepConfig::default()
//!     .with_sizes(SizeRange::explicit(vec![400, 1_000]).unwrap())
//!     .with_resamples(50)
//!     .with_seed(3);
//! let mut estimator = ErrorSweepEstimator::new(config);
//! let report = estimator
//!     .run_all(&data, &[NamedStatistic::new(StatisticKind::Mean), StatisticKind::P95.into()])
//!     .unwrap();
//!
//! assert_eq!(report.curves.len(), 2);
//! assert_eq!(estimator.strata_builds(), 1);
//! ```

pub use bootstrap_core as core;
pub use bootstrap_resample as resample;
pub use bootstrap_statistics as statistics;
pub use bootstrap_strata as strata;
pub use bootstrap_sweep as sweep;

pub use bootstrap_core::{Error, Result, Statistic};
pub use bootstrap_resample::{stratified_bootstrap, uniform_bootstrap, SamplingDistribution};
pub use bootstrap_statistics::{registry, NamedStatistic, StatisticKind};
pub use bootstrap_strata::{build_strata, Stratification, Stratum};
pub use bootstrap_sweep::{run_error_sweep, ErrorCurve, ErrorSweepEstimator, SweepConfig, SweepReport};

/// Prelude for convenient imports
pub mod prelude {
    pub use bootstrap_core::prelude::*;
    pub use bootstrap_core::{statistic_fn, utils};
    pub use bootstrap_resample::{
        stratified_bootstrap, uniform_bootstrap, ConfidenceInterval, SamplingDistribution,
        StratifiedBootstrap, UniformBootstrap,
    };
    pub use bootstrap_statistics::{registry, NamedStatistic, StatisticKind};
    pub use bootstrap_strata::{build_strata, FrequencyStrataBuilder, StrataBuilder, Stratification};
    pub use bootstrap_sweep::{
        run_error_sweep, BootstrapMode, ErrorCurve, ErrorSweepEstimator, SizeRange, SweepConfig,
        SweepReport,
    };
}
