//! Frequency histogram of distinct values

use bootstrap_core::{utils, Error, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One distinct value and how often it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: f64,
    pub count: usize,
}

/// One row of a tail report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TailPoint {
    /// `100 * rank / distinct_count`, rank being 1-based among all distinct values
    pub percentile_rank: f64,
    /// Occurrences of the value at that rank
    pub frequency: usize,
}

/// Distinct values in ascending order with their multiplicities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyHistogram {
    entries: Vec<ValueCount>,
    total_count: usize,
}

/// -0.0 and 0.0 are one value
fn canonical(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

impl FrequencyHistogram {
    /// Count every distinct value in `data`
    ///
    /// Fails on empty input or on NaN/infinite values, which have no place
    /// in an ordered distinct-value space.
    pub fn from_data(data: &[f64]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::empty_input("frequency histogram"));
        }
        utils::ensure_finite(data, "dataset")?;

        let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
        for &x in data {
            *counts.entry(OrderedFloat(canonical(x))).or_insert(0) += 1;
        }

        let entries = counts
            .into_iter()
            .map(|(value, count)| ValueCount {
                value: value.into_inner(),
                count,
            })
            .collect();

        Ok(Self {
            entries,
            total_count: data.len(),
        })
    }

    /// Distinct values, ascending
    pub fn entries(&self) -> &[ValueCount] {
        &self.entries
    }

    /// Number of distinct values
    pub fn distinct_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of observations
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Occurrences of `value`, zero when absent
    pub fn frequency(&self, value: f64) -> usize {
        let value = canonical(value);
        self.entries
            .binary_search_by(|e| e.value.total_cmp(&value))
            .map(|i| self.entries[i].count)
            .unwrap_or(0)
    }

    /// Most frequent value; ties go to the smallest
    pub fn most_frequent(&self) -> Option<ValueCount> {
        self.entries
            .iter()
            .copied()
            .reduce(|best, e| if e.count > best.count { e } else { best })
    }

    /// Percentile rank and frequency of the largest `n` distinct values
    ///
    /// Points come out in ascending value order, so the last point is the
    /// maximum at rank 100.
    pub fn tail(&self, n: usize) -> Vec<TailPoint> {
        let distinct = self.entries.len();
        let start = distinct.saturating_sub(n);
        self.entries[start..]
            .iter()
            .enumerate()
            .map(|(offset, e)| TailPoint {
                percentile_rank: 100.0 * (start + offset + 1) as f64 / distinct as f64,
                frequency: e.count,
            })
            .collect()
    }
}

impl fmt::Display for FrequencyHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FrequencyHistogram({} distinct, n={})",
            self.distinct_count(),
            self.total_count
        )
    }
}
