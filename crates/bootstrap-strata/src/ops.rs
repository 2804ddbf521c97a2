//! Operations on stratifications
//!
//! Invariant checks and proportional allocation. The allocation rule is
//! `max(1, floor(len * ratio))` per stratum, so every stratum contributes at
//! least one observation however small the ratio.

use crate::types::Stratification;
use bootstrap_core::{Error, Result};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Reject ratios outside `(0, 1]`
pub fn validate_ratio(ratio: f64) -> Result<f64> {
    if ratio > 0.0 && ratio <= 1.0 {
        Ok(ratio)
    } else {
        Err(Error::invalid_ratio(ratio))
    }
}

/// Observations to draw from a stratum of `len` at `ratio`
#[inline]
pub fn draw_count(len: usize, ratio: f64) -> usize {
    ((len as f64 * ratio).floor() as usize).max(1)
}

impl Stratification {
    /// Cheap structural check: no empty stratum, sizes add up
    pub fn check_sizes(&self) -> Result<()> {
        if let Some(index) = self.strata().iter().position(|s| s.is_empty()) {
            return Err(Error::DegenerateBin { index });
        }
        let sum: usize = self.strata().iter().map(|s| s.len()).sum();
        if sum != self.total_count() {
            return Err(Error::StratificationInvariant(format!(
                "strata hold {sum} values but the dataset has {}",
                self.total_count()
            )));
        }
        Ok(())
    }

    /// Full check that the strata partition exactly the multiset `data`
    pub fn verify_against(&self, data: &[f64]) -> Result<()> {
        self.check_sizes()?;
        if data.len() != self.total_count() {
            return Err(Error::StratificationInvariant(format!(
                "stratification covers {} values, dataset has {}",
                self.total_count(),
                data.len()
            )));
        }

        let mut balance: BTreeMap<OrderedFloat<f64>, i64> = BTreeMap::new();
        for &x in data {
            *balance.entry(canonical(x)).or_insert(0) += 1;
        }
        for stratum in self.strata() {
            for &x in stratum.values() {
                *balance.entry(canonical(x)).or_insert(0) -= 1;
            }
        }

        match balance.into_iter().find(|(_, diff)| *diff != 0) {
            None => Ok(()),
            Some((value, diff)) if diff > 0 => Err(Error::StratificationInvariant(format!(
                "value {} lost {diff} occurrence(s)",
                value.into_inner()
            ))),
            Some((value, diff)) => Err(Error::StratificationInvariant(format!(
                "value {} duplicated {} time(s)",
                value.into_inner(),
                -diff
            ))),
        }
    }

    /// Per-stratum draw counts at `ratio`
    pub fn draw_counts(&self, ratio: f64) -> Result<Vec<usize>> {
        let ratio = validate_ratio(ratio)?;
        Ok(self.strata().iter().map(|s| draw_count(s.len(), ratio)).collect())
    }

    /// Total size of one combined draw at `ratio`
    pub fn combined_draw_size(&self, ratio: f64) -> Result<usize> {
        Ok(self.draw_counts(ratio)?.iter().sum())
    }

    /// One proportional draw without replacement
    ///
    /// Takes the first `draw_count` elements of every stratum. Strata are
    /// stored shuffled, so each prefix is an unbiased sample of its stratum.
    pub fn reference_draw(&self, ratio: f64) -> Result<Vec<f64>> {
        let counts = self.draw_counts(ratio)?;
        let mut out = Vec::with_capacity(counts.iter().sum());
        for (stratum, &m) in self.strata().iter().zip(&counts) {
            let values = stratum.values();
            out.extend_from_slice(&values[..m.min(values.len())]);
        }
        Ok(out)
    }
}

fn canonical(x: f64) -> OrderedFloat<f64> {
    OrderedFloat(if x == 0.0 { 0.0 } else { x })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stratum;

    fn strat() -> Stratification {
        Stratification::new(
            vec![
                Stratum::new(1.0, 1.0, 1, vec![1.0; 30]),
                Stratum::new(2.0, 3.0, 2, vec![2.0, 3.0, 3.0, 2.0, 3.0]),
                Stratum::new(9.0, 9.0, 1, vec![9.0]),
            ],
            36,
        )
    }

    #[test]
    fn test_validate_ratio() {
        assert!(validate_ratio(0.5).is_ok());
        assert!(validate_ratio(1.0).is_ok());
        for bad in [0.0, -0.1, 1.01, f64::NAN] {
            assert!(matches!(validate_ratio(bad), Err(Error::InvalidRatio(_))));
        }
    }

    #[test]
    fn test_draw_counts_floor_of_one() {
        let s = strat();
        assert_eq!(s.draw_counts(0.1).unwrap(), vec![3, 1, 1]);
        assert_eq!(s.draw_counts(1.0).unwrap(), vec![30, 5, 1]);
        assert_eq!(s.draw_counts(0.001).unwrap(), vec![1, 1, 1]);
        assert_eq!(s.combined_draw_size(0.5).unwrap(), 15 + 2 + 1);
        assert!(s.draw_counts(2.0).is_err());
    }

    #[test]
    fn test_reference_draw_takes_prefixes() {
        let s = strat();
        let draw = s.reference_draw(0.4).unwrap();
        // 12 ones, then the first 2 of the middle stratum, then the single 9
        assert_eq!(draw.len(), 15);
        assert_eq!(&draw[12..], &[2.0, 3.0, 9.0]);
    }

    #[test]
    fn test_verify_against() {
        let s = strat();
        let mut data = vec![1.0; 30];
        data.extend([2.0, 2.0, 3.0, 3.0, 3.0, 9.0]);
        assert!(s.verify_against(&data).is_ok());

        // Same length, one value swapped
        data[35] = 8.0;
        assert!(matches!(
            s.verify_against(&data),
            Err(Error::StratificationInvariant(_))
        ));

        assert!(s.verify_against(&data[..10]).is_err());
    }

    #[test]
    fn test_degenerate_bin_detected() {
        let s = Stratification::new(
            vec![
                Stratum::new(1.0, 1.0, 1, vec![1.0]),
                Stratum::new(2.0, 2.0, 1, vec![]),
            ],
            1,
        );
        let err = s.check_sizes().unwrap_err();
        assert!(matches!(err, Error::DegenerateBin { index: 1 }));
        assert!(err.is_fatal());
    }
}
