//! Core types for stratification

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stratum: every occurrence of a contiguous run of distinct values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stratum {
    /// Smallest distinct value assigned to this stratum
    pub low: f64,
    /// Largest distinct value assigned to this stratum
    pub high: f64,
    /// Number of distinct values assigned to this stratum
    pub distinct: usize,
    /// Contents, one entry per occurrence, in shuffled order
    values: Vec<f64>,
}

impl Stratum {
    pub fn new(low: f64, high: f64, distinct: usize, values: Vec<f64>) -> Self {
        Self {
            low,
            high,
            distinct,
            values,
        }
    }

    /// Contents in their stored (shuffled) order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations in this stratum
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if a value falls within this stratum's value range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Share of `total_count` held by this stratum
    pub fn weight(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.len() as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for Stratum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]: distinct={}, count={}",
            self.low,
            self.high,
            self.distinct,
            self.len()
        )
    }
}

/// Ordered strata partitioning a dataset's multiset
///
/// Strata are indexed `0..len()` in ascending value order. Built once per
/// dataset and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stratification {
    strata: Vec<Stratum>,
    total_count: usize,
}

impl Stratification {
    pub fn new(strata: Vec<Stratum>, total_count: usize) -> Self {
        Self {
            strata,
            total_count,
        }
    }

    /// Get the strata
    pub fn strata(&self) -> &[Stratum] {
        &self.strata
    }

    /// Get one stratum by index
    pub fn get(&self, index: usize) -> Option<&Stratum> {
        self.strata.get(index)
    }

    /// Number of strata
    pub fn len(&self) -> usize {
        self.strata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strata.is_empty()
    }

    /// Size of the stratified dataset
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Per-stratum observation counts
    pub fn sizes(&self) -> Vec<usize> {
        self.strata.iter().map(Stratum::len).collect()
    }

    /// Index of the stratum whose value range holds `value`
    pub fn find_stratum(&self, value: f64) -> Option<usize> {
        self.strata.iter().position(|s| s.contains(value))
    }

    /// All contents, stratum after stratum
    pub fn flatten(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.total_count);
        for stratum in &self.strata {
            out.extend_from_slice(stratum.values());
        }
        out
    }
}

impl fmt::Display for Stratification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stratification({} strata, n={})",
            self.len(),
            self.total_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Stratification {
        Stratification::new(
            vec![
                Stratum::new(1.0, 2.0, 2, vec![2.0, 1.0, 1.0]),
                Stratum::new(5.0, 5.0, 1, vec![5.0, 5.0]),
            ],
            5,
        )
    }

    #[test]
    fn test_stratum() {
        let s = Stratum::new(1.0, 3.0, 2, vec![3.0, 1.0, 1.0, 3.0]);
        assert_eq!(s.len(), 4);
        assert!(s.contains(2.0));
        assert!(s.contains(3.0));
        assert!(!s.contains(3.5));
        assert_eq!(s.weight(8), 0.5);
        assert_eq!(s.weight(0), 0.0);
    }

    #[test]
    fn test_stratification() {
        let strat = sample();
        assert_eq!(strat.len(), 2);
        assert_eq!(strat.total_count(), 5);
        assert_eq!(strat.sizes(), vec![3, 2]);
        assert_eq!(strat.find_stratum(5.0), Some(1));
        assert_eq!(strat.find_stratum(4.0), None);
        assert_eq!(strat.flatten(), vec![2.0, 1.0, 1.0, 5.0, 5.0]);
        assert_eq!(strat.to_string(), "Stratification(2 strata, n=5)");
    }
}
