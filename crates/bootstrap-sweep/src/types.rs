//! Report types produced by error sweeps

use crate::config::BootstrapMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Running spread of chunk-level estimates after `chunks` chunks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityPoint {
    /// Number of chunk estimates accumulated
    pub chunks: usize,
    /// Running average of the chunk estimates
    pub mean: f64,
    /// Population standard deviation of the chunk estimates
    pub std_dev: f64,
    /// `std_dev / |mean|`
    pub relative_spread: f64,
}

/// Stability checkpoints recorded while scanning one chunk size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilitySeries {
    pub size: usize,
    pub points: Vec<StabilityPoint>,
}

impl StabilitySeries {
    /// Checkpoint recorded at exactly `chunks` chunks
    pub fn at(&self, chunks: usize) -> Option<&StabilityPoint> {
        self.points.iter().find(|p| p.chunks == chunks)
    }

    /// `(chunk_count, relative_spread)` pairs
    pub fn pairs(&self) -> Vec<(usize, f64)> {
        self.points
            .iter()
            .map(|p| (p.chunks, p.relative_spread))
            .collect()
    }
}

/// One row of an error curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorCurveRow {
    /// Target sample size
    pub size: usize,
    /// Statistic on the reference draw (or first chunk in uniform mode)
    pub bootstrap_estimate: f64,
    /// Standard deviation of the bootstrap sampling distribution
    pub bootstrap_std_dev: f64,
    /// `bootstrap_std_dev / |bootstrap_estimate|`
    pub bootstrap_relative_error: f64,
    /// Spread of chunk estimates over the true answer
    pub ground_truth_relative_error: f64,
    /// Stability at the reference checkpoint, when the scan reached it
    pub reference_stability: Option<f64>,
    /// Analytical relative error, for statistics that have one
    pub closed_form_relative_error: Option<f64>,
    /// Full chunks scanned for the ground truth
    pub chunk_count: usize,
}

/// A `(statistic, size)` cell left out of a curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCell {
    pub statistic: String,
    pub size: usize,
    pub reason: String,
}

impl fmt::Display for SkippedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}: {}", self.statistic, self.size, self.reason)
    }
}

/// Bootstrap versus ground-truth relative error of one statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorCurve {
    pub statistic: String,
    /// Statistic on the full dataset
    pub true_answer: f64,
    pub mode: BootstrapMode,
    /// One row per size that succeeded, ascending
    pub rows: Vec<ErrorCurveRow>,
    /// Stability checkpoints, one series per row
    pub stability: Vec<StabilitySeries>,
    /// Sizes that failed, with the reason
    pub skipped: Vec<SkippedCell>,
}

impl ErrorCurve {
    pub fn new(statistic: impl Into<String>, true_answer: f64, mode: BootstrapMode) -> Self {
        Self {
            statistic: statistic.into(),
            true_answer,
            mode,
            rows: Vec::new(),
            stability: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for `size`, if it succeeded
    pub fn row(&self, size: usize) -> Option<&ErrorCurveRow> {
        self.rows.iter().find(|r| r.size == size)
    }

    /// `(size, bootstrap_relative_error)` pairs
    pub fn bootstrap_errors(&self) -> Vec<(usize, f64)> {
        self.rows
            .iter()
            .map(|r| (r.size, r.bootstrap_relative_error))
            .collect()
    }

    /// `(size, ground_truth_relative_error)` pairs
    pub fn ground_truth_errors(&self) -> Vec<(usize, f64)> {
        self.rows
            .iter()
            .map(|r| (r.size, r.ground_truth_relative_error))
            .collect()
    }
}

impl fmt::Display for ErrorCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({:?}, true answer {:.6}): {} rows, {} skipped",
            self.statistic,
            self.mode,
            self.true_answer,
            self.rows.len(),
            self.skipped.len()
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "  {:>8}  bootstrap {:.6}  ground truth {:.6}",
                row.size, row.bootstrap_relative_error, row.ground_truth_relative_error
            )?;
        }
        Ok(())
    }
}

/// A statistic that produced no curve at all
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedStatistic {
    pub statistic: String,
    pub reason: String,
}

/// Curves for several statistics over one dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub curves: Vec<ErrorCurve>,
    pub failed: Vec<FailedStatistic>,
}

impl SweepReport {
    /// Curve for the statistic named `name`
    pub fn curve(&self, name: &str) -> Option<&ErrorCurve> {
        self.curves.iter().find(|c| c.statistic == name)
    }
}
