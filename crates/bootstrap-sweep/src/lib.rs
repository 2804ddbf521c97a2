//! # Error Sweeps
//!
//! How accurate is a statistic computed on a sample of size `s`? This crate
//! answers that twice for a range of sizes and puts the answers side by side:
//!
//! - **Bootstrap error**: resample a draw of size `s` (stratified over the
//!   whole dataset by default) and measure the spread of the statistic
//! - **Ground-truth error**: cut the dataset into disjoint chunks of size `s`,
//!   evaluate the statistic on each and measure their spread against the
//!   answer on the full dataset
//!
//! Where the two curves agree, the bootstrap can be trusted for that
//! statistic at that size.
//!
//! ## Example
//!
//! ```rust
//! use bootstrap_sweep::{ErrorSweepEstimator, SizeRange, SweepConfig};
//! use bootstrap_core::{statistic_fn, utils};
//!
//! let data: Vec<f64> = (0..5_000).map(|i| f64::from((i * 31) % 97)).collect();
//! let mean = statistic_fn("mean", |xs: &[f64]| Ok(utils::mean(xs)));
//!
//! let config = SweepConfig::default()
//!     .with_sizes(SizeRange::stepped(500, 2_500, 500).unwrap())
//!     .with_resamples(100)
//!     .with_seed(1);
//! let mut estimator = ErrorSweepEstimator::new(config);
//! let curve = estimator.run_sweep(&data, &mean).unwrap();
//!
//! assert_eq!(curve.rows.len(), 4);
//! for row in &curve.rows {
//!     assert!(row.bootstrap_relative_error >= 0.0);
//!     assert!(row.ground_truth_relative_error >= 0.0);
//! }
//! ```

pub mod config;
pub mod ground_truth;
mod sweep;
pub mod types;

// Re-exports
pub use config::{BootstrapMode, ScanLimits, SizeRange, SweepConfig};
pub use ground_truth::{scan_chunks, GroundTruth};
pub use sweep::{run_error_sweep, ErrorSweepEstimator};
pub use types::{
    ErrorCurve, ErrorCurveRow, FailedStatistic, SkippedCell, StabilityPoint, StabilitySeries,
    SweepReport,
};
