//! Frequency-preserving stratification for skewed datasets
//!
//! Skewed data (long tails, heavy repeats) loses its rare values under plain
//! uniform subsampling. This crate partitions a dataset into ordered strata
//! of consecutive distinct values so a resampler can draw from every stratum
//! proportionally and keep the rare ones represented.
//!
//! # Key Features
//!
//! - **Multiplicity preserved**: every occurrence of a value lands in its stratum
//! - **Shuffled strata**: prefixes of a stratum are unbiased draws from it
//! - **Invariant checks**: strata must partition the dataset's multiset exactly
//! - **Frequency histograms**: distinct-value counts and tail reports
//!
//! # Example
//!
//! ```rust
//! use bootstrap_strata::build_strata;
//!
//! let data = vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 5.0, 5.0];
//! let strata = build_strata(&data, 3).unwrap();
//!
//! assert_eq!(strata.len(), 3);
//! assert_eq!(strata.sizes(), vec![3, 3, 2]);
//! strata.verify_against(&data).unwrap();
//! ```

pub mod builders;
pub mod histogram;
pub mod ops;
pub mod traits;
pub mod types;

pub use builders::{FrequencyStrataBuilder, DEFAULT_NUM_BINS};
pub use histogram::{FrequencyHistogram, TailPoint, ValueCount};
pub use ops::{draw_count, validate_ratio};
pub use traits::StrataBuilder;
pub use types::{Stratification, Stratum};

use bootstrap_core::Result;

/// Stratify `data` into at most `k_bins` strata
///
/// Shuffles are drawn from OS entropy; use
/// [`FrequencyStrataBuilder::with_seed`] for reproducible strata.
pub fn build_strata(data: &[f64], k_bins: usize) -> Result<Stratification> {
    FrequencyStrataBuilder::new(k_bins).build(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstrap_core::Error;
    use proptest::prelude::*;

    #[test]
    fn test_three_value_example() {
        let data = vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 5.0, 5.0];
        let strata = build_strata(&data, 3).unwrap();

        assert_eq!(strata.len(), 3);
        let five = strata.find_stratum(5.0).unwrap();
        assert_eq!(strata.strata()[five].len(), 2);

        let mut combined = strata.flatten();
        combined.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(combined, vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 5.0, 5.0]);
    }

    #[test]
    fn test_identical_values_single_stratum() {
        let data = vec![7.0; 40];
        let strata = build_strata(&data, 100).unwrap();
        assert_eq!(strata.len(), 1);
        assert_eq!(strata.sizes(), vec![40]);
        strata.verify_against(&data).unwrap();
    }

    #[test]
    fn test_empty_dataset() {
        assert!(matches!(build_strata(&[], 10), Err(Error::EmptyInput(_))));
    }

    proptest! {
        #[test]
        fn prop_multiset_preserved(
            data in prop::collection::vec(-50i32..50, 1..400),
            k_bins in 1usize..150,
            seed in any::<u64>(),
        ) {
            let data: Vec<f64> = data.into_iter().map(f64::from).collect();
            let strata = FrequencyStrataBuilder::new(k_bins).with_seed(seed).build(&data).unwrap();

            prop_assert!(strata.len() <= k_bins);
            prop_assert!(strata.strata().iter().all(|s| !s.is_empty()));
            prop_assert!(strata.verify_against(&data).is_ok());

            // Strata are ordered and do not overlap
            for pair in strata.strata().windows(2) {
                prop_assert!(pair[0].high < pair[1].low);
            }
        }
    }
}
