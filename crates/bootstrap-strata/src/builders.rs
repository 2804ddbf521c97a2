//! Stratification strategies

use crate::histogram::FrequencyHistogram;
use crate::traits::StrataBuilder;
use crate::types::{Stratification, Stratum};
use bootstrap_core::{Error, Result, RngStreams};
use rand::seq::SliceRandom;

/// Default number of strata
pub const DEFAULT_NUM_BINS: usize = 100;

/// Frequency-preserving stratification builder
///
/// Sorts the distinct values, cuts them into runs of
/// `ceil(distinct / num_bins)` consecutive values, and fills each stratum
/// with every occurrence of its values. Each stratum is then shuffled
/// independently, so any prefix of a stratum is an unbiased draw from it.
///
/// Only non-empty strata are produced: a dataset with fewer distinct values
/// than `num_bins` yields fewer strata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyStrataBuilder {
    num_bins: usize,
    seed: Option<u64>,
}

impl Default for FrequencyStrataBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_BINS)
    }
}

impl FrequencyStrataBuilder {
    /// Create a builder targeting `num_bins` strata
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins,
            seed: None,
        }
    }

    /// Seed the per-stratum shuffles
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Shuffle seed, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Distinct values per stratum for a histogram with `distinct` entries
    pub fn values_per_bin(&self, distinct: usize) -> usize {
        distinct.div_ceil(self.num_bins.max(1)).max(1)
    }

    /// Stratify from an already computed histogram
    pub fn build_from_histogram(&self, hist: &FrequencyHistogram) -> Result<Stratification> {
        if self.num_bins == 0 {
            return Err(Error::InvalidParameter(
                "stratification needs at least one bin".to_string(),
            ));
        }

        let per_bin = self.values_per_bin(hist.distinct_count());
        let streams = RngStreams::new(self.seed);
        let mut strata = Vec::with_capacity(self.num_bins.min(hist.distinct_count()));

        for (index, run) in hist.entries().chunks(per_bin).enumerate() {
            let count: usize = run.iter().map(|e| e.count).sum();
            let mut values = Vec::with_capacity(count);
            for entry in run {
                values.extend(std::iter::repeat(entry.value).take(entry.count));
            }
            values.shuffle(&mut streams.stream(index));

            // `chunks` never yields an empty run
            let low = run[0].value;
            let high = run[run.len() - 1].value;
            strata.push(Stratum::new(low, high, run.len(), values));
        }

        log::debug!(
            "Stratified {} values ({} distinct) into {} strata of {} distinct values each",
            hist.total_count(),
            hist.distinct_count(),
            strata.len(),
            per_bin
        );

        let stratification = Stratification::new(strata, hist.total_count());
        stratification.check_sizes()?;
        Ok(stratification)
    }
}

impl StrataBuilder for FrequencyStrataBuilder {
    fn build(&self, data: &[f64]) -> Result<Stratification> {
        let hist = FrequencyHistogram::from_data(data)?;
        self.build_from_histogram(&hist)
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}
