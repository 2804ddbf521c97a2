//! Uniform and stratified bootstrap engines
//!
//! Both engines draw `n_resamples` independent resamples with replacement,
//! evaluate a statistic on each and collect the estimates into a
//! [`SamplingDistribution`]. Resample `i` always draws from RNG stream `i`
//! of the run seed, so a seeded run gives the same distribution on the
//! sequential and parallel engines.

use crate::types::SamplingDistribution;
use crate::workspace::with_resample_buffer;
use bootstrap_core::{Error, ExecutionEngine, Result, RngStreams, Statistic};
use bootstrap_strata::{validate_ratio, Stratification};
use rand::distributions::{Distribution, Uniform};
use tracing::{debug, instrument};

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 300;

fn check_resamples(n_resamples: usize) -> Result<()> {
    if n_resamples == 0 {
        return Err(Error::InvalidParameter(
            "Number of resamples must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Bootstrap by uniform resampling with replacement from the whole dataset
#[derive(Debug, Clone)]
pub struct UniformBootstrap<E> {
    engine: E,
    n_resamples: usize,
    seed: Option<u64>,
}

impl<E: ExecutionEngine> UniformBootstrap<E> {
    /// Create a new bootstrap engine
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            n_resamples: DEFAULT_RESAMPLES,
            seed: None,
        }
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the random seed
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Sampling distribution of `statistic` over resamples of `sample_size`
    ///
    /// Indices are drawn uniformly from `[0, data.len())`. Fails on empty
    /// data, a zero sample size, or the first resample the statistic
    /// rejects.
    #[instrument(
        skip(self, data, statistic),
        fields(statistic = statistic.name(), n = data.len(), n_resamples = self.n_resamples)
    )]
    pub fn resample_distribution<S>(
        &self,
        data: &[f64],
        statistic: &S,
        sample_size: usize,
    ) -> Result<SamplingDistribution>
    where
        S: Statistic + ?Sized,
    {
        if data.is_empty() {
            return Err(Error::empty_input("uniform bootstrap"));
        }
        if sample_size == 0 {
            return Err(Error::invalid_sample_size(0, None));
        }
        check_resamples(self.n_resamples)?;

        let streams = RngStreams::new(self.seed);
        let index = Uniform::new(0, data.len());

        let estimates = self
            .engine
            .execute_batch(self.n_resamples, |i| {
                let mut rng = streams.stream(i);
                with_resample_buffer(sample_size, |resample| {
                    resample.extend((0..sample_size).map(|_| data[index.sample(&mut rng)]));
                    statistic.evaluate(resample)
                })
            })
            .into_iter()
            .collect::<Result<Vec<f64>>>()?;

        let distribution = SamplingDistribution::new(statistic.name(), sample_size, estimates);
        debug!(
            mean = distribution.mean(),
            std_dev = distribution.std_dev(),
            "uniform bootstrap complete"
        );
        Ok(distribution)
    }
}

/// Bootstrap by proportional resampling with replacement within each stratum
///
/// Stratum `b` contributes `max(1, floor(len_b * ratio))` draws to every
/// combined resample, so no stratum vanishes at small ratios.
#[derive(Debug, Clone)]
pub struct StratifiedBootstrap<E> {
    engine: E,
    n_resamples: usize,
    seed: Option<u64>,
}

impl<E: ExecutionEngine> StratifiedBootstrap<E> {
    /// Create a new bootstrap engine
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            n_resamples: DEFAULT_RESAMPLES,
            seed: None,
        }
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the random seed
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Sampling distribution of `statistic` over proportional resamples
    ///
    /// `target_ratio` is the desired overall sample size over the dataset
    /// size and must lie in `(0, 1]`.
    #[instrument(
        skip(self, strata, statistic),
        fields(statistic = statistic.name(), strata = strata.len(), n_resamples = self.n_resamples)
    )]
    pub fn resample_distribution<S>(
        &self,
        strata: &Stratification,
        statistic: &S,
        target_ratio: f64,
    ) -> Result<SamplingDistribution>
    where
        S: Statistic + ?Sized,
    {
        validate_ratio(target_ratio)?;
        if strata.is_empty() {
            return Err(Error::empty_input("stratified bootstrap"));
        }
        strata.check_sizes()?;
        check_resamples(self.n_resamples)?;

        let counts = strata.draw_counts(target_ratio)?;
        let combined: usize = counts.iter().sum();
        // `check_sizes` guarantees every stratum is non-empty
        let plan: Vec<(&[f64], Uniform<usize>, usize)> = strata
            .strata()
            .iter()
            .zip(&counts)
            .map(|(stratum, &m)| (stratum.values(), Uniform::new(0, stratum.len()), m))
            .collect();

        debug!(combined, "drawing stratified resamples");

        let streams = RngStreams::new(self.seed);
        let estimates = self
            .engine
            .execute_batch(self.n_resamples, |i| {
                let mut rng = streams.stream(i);
                with_resample_buffer(combined, |resample| {
                    for (values, index, m) in &plan {
                        resample.extend((0..*m).map(|_| values[index.sample(&mut rng)]));
                    }
                    statistic.evaluate(resample)
                })
            })
            .into_iter()
            .collect::<Result<Vec<f64>>>()?;

        let distribution = SamplingDistribution::new(statistic.name(), combined, estimates);
        debug!(
            mean = distribution.mean(),
            std_dev = distribution.std_dev(),
            "stratified bootstrap complete"
        );
        Ok(distribution)
    }
}
