//! Error sweeps across target sample sizes
//!
//! For every target size the estimator produces two views of the same
//! question: how much the bootstrap thinks an estimate at that size is off,
//! and how much direct measurements on disjoint chunks of that size actually
//! vary. Sizes are independent cells; a failing cell is logged and skipped,
//! while a broken stratification aborts the run.

use crate::config::{BootstrapMode, SizeRange, SweepConfig};
use crate::ground_truth::{scan_chunks, GroundTruth};
use crate::types::{ErrorCurve, ErrorCurveRow, FailedStatistic, SkippedCell, StabilitySeries, SweepReport};
use bootstrap_core::{auto_engine, utils, AutoEngine, Error, ExecutionEngine, Result, RngStreams, Statistic};
use bootstrap_resample::{SamplingDistribution, StratifiedBootstrap, UniformBootstrap};
use bootstrap_strata::{FrequencyStrataBuilder, StrataBuilder, Stratification};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Identity of a dataset for stratification reuse
fn fingerprint(data: &[f64]) -> u64 {
    let mut hasher = DefaultHasher::new();
    data.len().hash(&mut hasher);
    for x in data {
        x.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

#[derive(Debug, Clone)]
struct CachedStrata {
    fingerprint: u64,
    strata: Arc<Stratification>,
}

/// Runs bootstrap-versus-ground-truth sweeps
///
/// Owns the stratification of the most recent dataset so repeated sweeps
/// over the same data (one per statistic, say) stratify only once.
#[derive(Debug, Clone)]
pub struct ErrorSweepEstimator<E = AutoEngine> {
    config: SweepConfig,
    engine: E,
    cache: Option<CachedStrata>,
    strata_builds: usize,
}

impl ErrorSweepEstimator<AutoEngine> {
    /// Estimator on the feature-selected engine
    pub fn new(config: SweepConfig) -> Self {
        Self::with_engine(config, auto_engine())
    }
}

impl Default for ErrorSweepEstimator<AutoEngine> {
    fn default() -> Self {
        Self::new(SweepConfig::default())
    }
}

impl<E: ExecutionEngine> ErrorSweepEstimator<E> {
    pub fn with_engine(config: SweepConfig, engine: E) -> Self {
        Self {
            config,
            engine,
            cache: None,
            strata_builds: 0,
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Number of stratifications built so far
    pub fn strata_builds(&self) -> usize {
        self.strata_builds
    }

    /// Stratification of the most recent dataset, if one was built
    pub fn stratification(&self) -> Option<&Stratification> {
        self.cache.as_ref().map(|c| c.strata.as_ref())
    }

    /// Cached stratification of `data`, rebuilt when the dataset changes
    ///
    /// A freshly built stratification is verified against `data`; a
    /// violation is fatal.
    pub fn strata_for(&mut self, data: &[f64]) -> Result<Arc<Stratification>> {
        let fp = fingerprint(data);
        if let Some(cached) = self.cache.as_ref().filter(|c| c.fingerprint == fp) {
            return Ok(Arc::clone(&cached.strata));
        }

        let mut builder = FrequencyStrataBuilder::new(self.config.num_bins);
        if let Some(seed) = self.config.seed {
            builder = builder.with_seed(seed);
        }
        let strata = builder.build(data)?;
        strata.verify_against(data)?;
        self.strata_builds += 1;
        info!(
            strata = strata.len(),
            n = data.len(),
            builds = self.strata_builds,
            "built stratification"
        );

        let strata = Arc::new(strata);
        self.cache = Some(CachedStrata {
            fingerprint: fp,
            strata: Arc::clone(&strata),
        });
        Ok(strata)
    }

    /// Error curve of `statistic` over every configured size
    ///
    /// Fails only when the whole curve is meaningless: empty or non-finite
    /// data, an invalid configuration, a statistic that cannot be computed
    /// on the full dataset, or a broken stratification. Individual sizes
    /// that fail end up in [`ErrorCurve::skipped`].
    #[instrument(skip(self, data, statistic), fields(statistic = statistic.name(), n = data.len()))]
    pub fn run_sweep<S>(&mut self, data: &[f64], statistic: &S) -> Result<ErrorCurve>
    where
        S: Statistic + ?Sized,
    {
        if data.is_empty() {
            return Err(Error::empty_input("error sweep"));
        }
        self.config.validate()?;
        utils::ensure_finite(data, "dataset")?;

        let true_answer = statistic.evaluate(data)?;
        info!(true_answer, "true answer");

        let strata = match self.config.mode {
            BootstrapMode::Stratified => Some(self.strata_for(data)?),
            BootstrapMode::Uniform => None,
        };

        let sizes = self.config.sizes.sizes();
        let streams = RngStreams::new(self.config.seed);
        let cells = self.engine.execute_batch(sizes.len(), |i| {
            let seed = streams.child(i).base_seed();
            self.run_cell(data, strata.as_deref(), statistic, true_answer, sizes[i], seed)
        });

        let mut curve = ErrorCurve::new(statistic.name(), true_answer, self.config.mode);
        for (size, cell) in sizes.into_iter().zip(cells) {
            match cell {
                Ok((row, series)) => {
                    info!(
                        size,
                        bootstrap = row.bootstrap_relative_error,
                        ground_truth = row.ground_truth_relative_error,
                        "row complete"
                    );
                    curve.rows.push(row);
                    curve.stability.push(series);
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(statistic = statistic.name(), size, error = %e, "skipping cell");
                    curve.skipped.push(SkippedCell {
                        statistic: statistic.name().to_string(),
                        size,
                        reason: e.to_string(),
                    });
                }
            }
        }
        Ok(curve)
    }

    /// Curves for several statistics over the same dataset
    ///
    /// The stratification is built once and shared. A statistic without a
    /// curve is recorded in [`SweepReport::failed`]; fatal errors abort.
    pub fn run_all<S>(&mut self, data: &[f64], statistics: &[S]) -> Result<SweepReport>
    where
        S: Statistic,
    {
        let mut report = SweepReport::default();
        for statistic in statistics {
            match self.run_sweep(data, statistic) {
                Ok(curve) => report.curves.push(curve),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(statistic = statistic.name(), error = %e, "statistic failed");
                    report.failed.push(FailedStatistic {
                        statistic: statistic.name().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }

    fn run_cell<S>(
        &self,
        data: &[f64],
        strata: Option<&Stratification>,
        statistic: &S,
        true_answer: f64,
        size: usize,
        seed: u64,
    ) -> Result<(ErrorCurveRow, StabilitySeries)>
    where
        S: Statistic + ?Sized,
    {
        let (estimate, distribution, closed_form) = match strata {
            Some(strata) => self.stratified_column(data, strata, statistic, size, seed)?,
            None => self.uniform_column(data, statistic, size, seed)?,
        };
        debug!(size, estimate, std_dev = distribution.std_dev(), "bootstrap");

        let GroundTruth {
            chunk_count,
            relative_error,
            stability,
            reference_stability,
            ..
        } = scan_chunks(&self.engine, data, statistic, size, &self.config.scan, true_answer)?;

        let row = ErrorCurveRow {
            size,
            bootstrap_estimate: estimate,
            bootstrap_std_dev: distribution.std_dev(),
            bootstrap_relative_error: distribution.relative_error(estimate),
            ground_truth_relative_error: relative_error,
            reference_stability,
            closed_form_relative_error: closed_form.map(|se| utils::relative_spread(se, estimate)),
            chunk_count,
        };
        Ok((row, stability))
    }

    fn stratified_column<S>(
        &self,
        data: &[f64],
        strata: &Stratification,
        statistic: &S,
        size: usize,
        seed: u64,
    ) -> Result<(f64, SamplingDistribution, Option<f64>)>
    where
        S: Statistic + ?Sized,
    {
        let ratio = size as f64 / data.len() as f64;
        debug!(size, ratio, "sampling ratio");

        let reference = strata.reference_draw(ratio)?;
        let estimate = statistic.evaluate(&reference)?;
        let distribution = StratifiedBootstrap::new(self.engine.clone())
            .with_resamples(self.config.n_resamples)
            .with_seed(seed)
            .resample_distribution(strata, statistic, ratio)?;
        Ok((estimate, distribution, statistic.closed_form_standard_error(&reference)))
    }

    fn uniform_column<S>(
        &self,
        data: &[f64],
        statistic: &S,
        size: usize,
        seed: u64,
    ) -> Result<(f64, SamplingDistribution, Option<f64>)>
    where
        S: Statistic + ?Sized,
    {
        if size > data.len() {
            return Err(Error::invalid_sample_size(size, Some(data.len())));
        }
        let first = &data[..size];
        let estimate = statistic.evaluate(first)?;
        let distribution = UniformBootstrap::new(self.engine.clone())
            .with_resamples(self.config.n_resamples)
            .with_seed(seed)
            .resample_distribution(first, statistic, size)?;
        Ok((estimate, distribution, statistic.closed_form_standard_error(first)))
    }
}

/// Error curve of `statistic` over `size_range` with default settings
///
/// # Example
/// ```rust
/// use bootstrap_sweep::{run_error_sweep, SizeRange};
/// use bootstrap_core::{statistic_fn, utils};
///
/// let data: Vec<f64> = (0..2_000).map(|i| f64::from(i % 50)).collect();
/// let mean = statistic_fn("mean", |xs: &[f64]| Ok(utils::mean(xs)));
///
/// let curve = run_error_sweep(&data, &mean, SizeRange::explicit(vec![100, 500]).unwrap()).unwrap();
/// assert_eq!(curve.rows.len(), 2);
/// ```
pub fn run_error_sweep<S>(data: &[f64], statistic: &S, size_range: SizeRange) -> Result<ErrorCurve>
where
    S: Statistic + ?Sized,
{
    ErrorSweepEstimator::new(SweepConfig::default().with_sizes(size_range)).run_sweep(data, statistic)
}
