//! Error types for bootstrap error estimation
//!
//! Provides a unified error type for all bootstrap-stats crates.

use thiserror::Error;

/// Core error type for resampling and error-estimation operations
#[derive(Error, Debug)]
pub enum Error {
    /// A statistic was applied to an empty (or fully filtered-out) sequence
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Target sampling ratio outside (0, 1]
    #[error("Invalid sampling ratio {0}: must be in (0, 1]")]
    InvalidRatio(f64),

    /// Requested sample size is zero or larger than the source allows
    #[error("Invalid sample size {size}{}", max_suffix(.max))]
    InvalidSampleSize { size: usize, max: Option<usize> },

    /// A stratum turned out empty after stratification
    #[error("Degenerate bin: stratum {index} is empty")]
    DegenerateBin { index: usize },

    /// The strata no longer partition the dataset
    #[error("Stratification invariant violated: {0}")]
    StratificationInvariant(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Statistic name not present in the registry
    #[error("Unknown statistic: {0}")]
    UnknownStatistic(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

fn max_suffix(max: &Option<usize>) -> String {
    match max {
        Some(m) => format!(" (maximum {m})"),
        None => String::new(),
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyInput(format!("{operation} requires at least one value"))
    }

    /// Create an error for an out-of-range sampling ratio
    pub fn invalid_ratio(ratio: f64) -> Self {
        Self::InvalidRatio(ratio)
    }

    /// Create an error for an invalid sample size
    pub fn invalid_sample_size(size: usize, max: Option<usize>) -> Self {
        Self::InvalidSampleSize { size, max }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error signals a broken invariant rather than a bad cell.
    ///
    /// Sweeps skip non-fatal errors and abort on fatal ones.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DegenerateBin { .. } | Self::StratificationInvariant(_)
        )
    }
}
