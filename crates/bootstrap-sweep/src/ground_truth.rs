//! Ground-truth error by direct repeated measurement
//!
//! The dataset is cut into consecutive, disjoint chunks of the target size
//! and the statistic is evaluated on each. How much those chunk estimates
//! vary is the error a sample of that size really carries, which is what the
//! bootstrap column is validated against.

use crate::config::ScanLimits;
use crate::types::{StabilityPoint, StabilitySeries};
use bootstrap_core::{utils, Error, ExecutionEngine, Result, Statistic};
use tracing::debug;

/// Outcome of scanning one chunk size
#[derive(Debug, Clone, PartialEq)]
pub struct GroundTruth {
    /// Full chunks evaluated
    pub chunk_count: usize,
    /// Mean of all chunk estimates
    pub mean: f64,
    /// Population standard deviation of all chunk estimates
    pub std_dev: f64,
    /// `std_dev / |true_answer|`
    pub relative_error: f64,
    /// Checkpoints every `checkpoint_interval` chunks up to `checkpoint_limit`
    pub stability: StabilitySeries,
    /// Relative spread at `reference_checkpoint`, when reached
    pub reference_stability: Option<f64>,
}

fn stability_at(estimates: &[f64]) -> StabilityPoint {
    let mean = utils::mean(estimates);
    let std_dev = utils::population_std(estimates);
    StabilityPoint {
        chunks: estimates.len(),
        mean,
        std_dev,
        relative_spread: utils::relative_spread(std_dev, mean),
    }
}

/// Evaluate `statistic` on up to `limits.max_chunks` chunks of `chunk_size`
///
/// A trailing partial chunk is ignored. Fails when the dataset holds no full
/// chunk or the statistic rejects any chunk.
pub fn scan_chunks<E, S>(
    engine: &E,
    data: &[f64],
    statistic: &S,
    chunk_size: usize,
    limits: &ScanLimits,
    true_answer: f64,
) -> Result<GroundTruth>
where
    E: ExecutionEngine,
    S: Statistic + ?Sized,
{
    if chunk_size == 0 {
        return Err(Error::invalid_sample_size(0, None));
    }
    let chunk_count = (data.len() / chunk_size).min(limits.max_chunks);
    if chunk_count == 0 {
        return Err(Error::InsufficientData {
            expected: chunk_size,
            actual: data.len(),
        });
    }

    let estimates = engine
        .execute_batch(chunk_count, |j| {
            statistic.evaluate(&data[j * chunk_size..(j + 1) * chunk_size])
        })
        .into_iter()
        .collect::<Result<Vec<f64>>>()?;

    let mut points = Vec::new();
    let mut reference_stability = None;
    if limits.checkpoint_interval > 0 {
        let last = chunk_count.min(limits.checkpoint_limit);
        for chunks in (limits.checkpoint_interval..=last).step_by(limits.checkpoint_interval) {
            let point = stability_at(&estimates[..chunks]);
            debug!(
                size = chunk_size,
                chunks,
                mean = point.mean,
                std_dev = point.std_dev,
                "variation of chunk estimates"
            );
            if chunks == limits.reference_checkpoint {
                reference_stability = Some(point.relative_spread);
            }
            points.push(point);
        }
    }

    let (mean, std_dev) = utils::mean_and_std(&estimates, "ground truth")?;
    let relative_error = utils::relative_spread(std_dev, true_answer);
    debug!(size = chunk_size, chunk_count, true_answer, std_dev, "ground truth");

    Ok(GroundTruth {
        chunk_count,
        mean,
        std_dev,
        relative_error,
        stability: StabilitySeries {
            size: chunk_size,
            points,
        },
        reference_stability,
    })
}
