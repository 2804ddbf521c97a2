//! Summary statistics for bootstrap error estimation
//!
//! This crate is the statistic registry: a closed [`StatisticKind`] enum with
//! one kernel per member, plus the kernels themselves in [`functions`] and the
//! one-dimensional k-means used by the clustering-based center estimate.
//!
//! # Features
//!
//! - **Nearest-rank percentiles**: `sorted[floor(len * p / 100)]`, no interpolation
//! - **Population moments**: variance and standard deviation are not sample-corrected
//! - **Filtered averages**: non-zero, even-valued and top-k means
//! - **Name lookup**: every kind parses from its stable snake-case name
//!
//! # Example
//!
//! ```rust
//! use bootstrap_statistics::{NamedStatistic, StatisticKind};
//! use bootstrap_core::Statistic;
//!
//! let kind: StatisticKind = "percentile_95".parse().unwrap();
//! let stat = NamedStatistic::from(kind);
//!
//! let data: Vec<f64> = (1..=20).map(f64::from).collect();
//! assert_eq!(stat.name(), "percentile_95");
//! assert_eq!(stat.evaluate(&data).unwrap(), 20.0);
//! ```

pub mod functions;
pub mod kinds;
pub mod kmeans;

pub use kinds::{NamedStatistic, StatisticKind};
pub use kmeans::{KMeans1d, DEFAULT_CLUSTERS};

// Re-export from bootstrap-core
pub use bootstrap_core::{Error, Result, Statistic};

/// Registry statistics for every kind in [`StatisticKind::all`]
pub fn registry() -> Vec<NamedStatistic> {
    StatisticKind::all().into_iter().map(NamedStatistic::new).collect()
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{functions, registry, NamedStatistic, StatisticKind};
    pub use bootstrap_core::{Error, Result, Statistic};
}
