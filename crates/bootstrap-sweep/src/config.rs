//! Sweep configuration

use bootstrap_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target sample sizes visited by a sweep, ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SizeRange {
    /// `start, start + step, ..` strictly below `end`
    Stepped {
        start: usize,
        end: usize,
        step: usize,
    },
    /// Explicit list
    Explicit { sizes: Vec<usize> },
}

impl Default for SizeRange {
    fn default() -> Self {
        Self::Stepped {
            start: 1_000,
            end: 11_000,
            step: 1_000,
        }
    }
}

impl SizeRange {
    /// Stepped span with an exclusive end
    pub fn stepped(start: usize, end: usize, step: usize) -> Result<Self> {
        let range = Self::Stepped { start, end, step };
        range.validate()?;
        Ok(range)
    }

    /// Explicit strictly ascending sizes
    pub fn explicit(sizes: impl Into<Vec<usize>>) -> Result<Self> {
        let range = Self::Explicit {
            sizes: sizes.into(),
        };
        range.validate()?;
        Ok(range)
    }

    /// Check the invariants the constructors enforce
    ///
    /// Deserialized ranges bypass the constructors, so sweeps call this
    /// before running.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Stepped { start, end, step } => {
                if *step == 0 {
                    return Err(Error::InvalidParameter("size step must be positive".into()));
                }
                if *start == 0 {
                    return Err(Error::invalid_sample_size(0, None));
                }
                if start >= end {
                    return Err(Error::InvalidParameter(format!(
                        "size range {start}..{end} is empty"
                    )));
                }
            }
            Self::Explicit { sizes } => {
                if sizes.is_empty() {
                    return Err(Error::InvalidParameter("size list is empty".into()));
                }
                if sizes.contains(&0) {
                    return Err(Error::invalid_sample_size(0, None));
                }
                if sizes.windows(2).any(|w| w[0] >= w[1]) {
                    return Err(Error::InvalidParameter(
                        "sizes must be strictly ascending".into(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Materialised sizes
    pub fn sizes(&self) -> Vec<usize> {
        match self {
            Self::Stepped { start, end, step } => {
                (*start..*end).step_by((*step).max(1)).collect()
            }
            Self::Explicit { sizes } => sizes.clone(),
        }
    }

    /// Whether `size` is visited
    pub fn contains(&self, size: usize) -> bool {
        match self {
            Self::Stepped { start, end, step } => {
                *step > 0 && size >= *start && size < *end && (size - start) % step == 0
            }
            Self::Explicit { sizes } => sizes.binary_search(&size).is_ok(),
        }
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stepped { start, end, step } => write!(f, "{start}..{end} step {step}"),
            Self::Explicit { sizes } => write!(f, "{sizes:?}"),
        }
    }
}

/// How the bootstrap column of a sweep is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapMode {
    /// Proportional resampling within strata of the whole dataset
    #[default]
    Stratified,
    /// Uniform resampling of the first `size` records
    Uniform,
}

/// Limits of the ground-truth chunk scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanLimits {
    /// Chunks scanned at most
    pub max_chunks: usize,
    /// Record a stability checkpoint every this many chunks
    pub checkpoint_interval: usize,
    /// No checkpoints past this many chunks
    pub checkpoint_limit: usize,
    /// Checkpoint reported as the reference stability column
    pub reference_checkpoint: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_chunks: 2_000,
            checkpoint_interval: 50,
            checkpoint_limit: 600,
            reference_checkpoint: 300,
        }
    }
}

/// Configuration for an error sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Target sample sizes
    pub sizes: SizeRange,
    /// Bootstrap resamples per size
    pub n_resamples: usize,
    /// Requested number of strata
    pub num_bins: usize,
    /// Ground-truth scan limits
    #[serde(flatten)]
    pub scan: ScanLimits,
    pub mode: BootstrapMode,
    /// Seed for strata shuffles and resampling; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: SizeRange::default(),
            n_resamples: 300,
            num_bins: 100,
            scan: ScanLimits::default(),
            mode: BootstrapMode::default(),
            seed: None,
        }
    }
}

impl SweepConfig {
    pub fn with_sizes(mut self, sizes: SizeRange) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = num_bins;
        self
    }

    pub fn with_scan_limits(mut self, scan: ScanLimits) -> Self {
        self.scan = scan;
        self
    }

    pub fn with_max_chunks(mut self, max_chunks: usize) -> Self {
        self.scan.max_chunks = max_chunks;
        self
    }

    pub fn with_mode(mut self, mode: BootstrapMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations a sweep cannot run
    pub fn validate(&self) -> Result<()> {
        self.sizes.validate()?;
        for (name, value) in [
            ("n_resamples", self.n_resamples),
            ("num_bins", self.num_bins),
            ("max_chunks", self.scan.max_chunks),
            ("checkpoint_interval", self.scan.checkpoint_interval),
        ] {
            if value == 0 {
                return Err(Error::InvalidParameter(format!("{name} must be positive")));
            }
        }
        Ok(())
    }
}
