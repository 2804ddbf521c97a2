//! Core traits and types for bootstrap error estimation
//!
//! This crate provides the pieces every other bootstrap-stats crate builds on:
//!
//! 1. **Errors** - one [`Error`] enum and [`Result`] alias for the workspace
//! 2. **Statistics** - the [`Statistic`] capability trait and closure adapter
//! 3. **Execution** - sequential or Rayon-backed batch engines
//! 4. **Randomness** - indexed, independent RNG streams per worker
//!
//! # Example
//!
//! ```rust
//! use bootstrap_core::{
//!     adapters::statistic_fn,
//!     execution::{sequential, ExecutionEngine},
//!     utils, Statistic,
//! };
//!
//! let mean = statistic_fn("mean", |xs: &[f64]| Ok(utils::mean(xs)));
//! let engine = sequential();
//!
//! let chunks = [vec![1.0, 2.0], vec![3.0, 5.0]];
//! let means = engine.execute_batch(chunks.len(), |i| mean.evaluate(&chunks[i]));
//! assert_eq!(means[1].as_ref().unwrap(), &4.0);
//! ```

pub mod adapters;
pub mod error;
pub mod execution;
pub mod rng;
pub mod traits;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{auto_engine, sequential, AutoEngine, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use adapters::{statistic_fn, FnStatistic};
pub use rng::RngStreams;
pub use traits::Statistic;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ExecutionEngine, ExecutionStrategy, Result, RngStreams, SequentialEngine, Statistic,
    };

    pub use crate::error::Error;

    #[cfg(feature = "parallel")]
    pub use crate::execution::parallel;
    pub use crate::execution::{auto_engine, sequential};
}
