//! Core traits for stratification

use crate::types::Stratification;
use bootstrap_core::Result;

/// Trait for partitioning a dataset into strata
pub trait StrataBuilder {
    /// Build strata from the given dataset
    fn build(&self, data: &[f64]) -> Result<Stratification>;

    /// Get the target number of strata (if known)
    ///
    /// The built stratification may hold fewer when the data has fewer
    /// distinct values than requested.
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
