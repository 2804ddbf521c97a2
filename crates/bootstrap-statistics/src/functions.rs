//! Plain statistic kernels over `&[f64]`
//!
//! Each function fails with [`Error::EmptyInput`] when the values it looks at
//! are empty, including when a filter (non-zero, even) removes everything.
//!
//! A few semantics are reproduced literally rather than "improved":
//! percentiles are nearest-rank at `floor(len * p / 100)` with no
//! interpolation, variance is the population form, and `top_k_avg` averages
//! the 99 largest values while demanding at least 100.

use bootstrap_core::{utils, Error, Result};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Number of values averaged by [`top_k_avg`]
pub const TOP_K: usize = 99;

/// Minimum input length accepted by [`top_k_avg`]
pub const TOP_K_MIN_LEN: usize = 100;

fn non_empty<'a>(data: &'a [f64], operation: &str) -> Result<&'a [f64]> {
    if data.is_empty() {
        Err(Error::empty_input(operation))
    } else {
        Ok(data)
    }
}

/// Arithmetic mean
pub fn mean(data: &[f64]) -> Result<f64> {
    Ok(utils::mean(non_empty(data, "mean")?))
}

/// Population variance
pub fn variance(data: &[f64]) -> Result<f64> {
    Ok(utils::population_variance(non_empty(data, "variance")?))
}

/// Population standard deviation
pub fn std_dev(data: &[f64]) -> Result<f64> {
    Ok(utils::population_std(non_empty(data, "std")?))
}

/// Nearest-rank percentile on sorted data: `sorted[floor(len * p / 100)]`
///
/// `p` must lie in `[0, 100]`; `p == 100` clamps to the maximum.
///
/// # Examples
///
/// ```rust
/// use bootstrap_statistics::functions::percentile_sorted;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// // floor(4 * 50 / 100) = 2
/// assert_eq!(percentile_sorted(&sorted, 50.0).unwrap(), 3.0);
/// ```
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    let sorted = non_empty(sorted, "percentile")?;
    if !(0.0..=100.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "Percentile {p} must be in [0, 100]"
        )));
    }
    let index = ((sorted.len() as f64 * p) / 100.0).floor() as usize;
    Ok(sorted[index.min(sorted.len() - 1)])
}

/// Nearest-rank percentile; sorts a copy of `data` first
pub fn percentile(data: &[f64], p: f64) -> Result<f64> {
    let sorted = utils::sorted(non_empty(data, "percentile")?);
    percentile_sorted(&sorted, p)
}

/// Largest value
pub fn max(data: &[f64]) -> Result<f64> {
    Ok(non_empty(data, "max")?
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max))
}

/// Smallest value
pub fn min(data: &[f64]) -> Result<f64> {
    Ok(non_empty(data, "min")?
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min))
}

fn non_zero(data: &[f64]) -> impl Iterator<Item = f64> + '_ {
    data.iter().copied().filter(|&x| x != 0.0)
}

/// Mean of the non-zero values
pub fn non_zero_avg(data: &[f64]) -> Result<f64> {
    let (sum, count) = non_zero(data).fold((0.0, 0usize), |(s, c), x| (s + x, c + 1));
    if count == 0 {
        return Err(Error::empty_input("non_zero_avg"));
    }
    Ok(sum / count as f64)
}

/// Mean of the [`TOP_K`] largest values
///
/// Requires at least [`TOP_K_MIN_LEN`] values, one more than it averages.
pub fn top_k_avg(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("top_k_avg"));
    }
    if data.len() < TOP_K_MIN_LEN {
        return Err(Error::InsufficientData {
            expected: TOP_K_MIN_LEN,
            actual: data.len(),
        });
    }
    let sorted = utils::sorted(data);
    Ok(utils::mean(&sorted[sorted.len() - TOP_K..]))
}

/// Mean of the values exactly divisible by two
pub fn even_number_avg(data: &[f64]) -> Result<f64> {
    let (sum, count) = data
        .iter()
        .copied()
        .filter(|x| x % 2.0 == 0.0)
        .fold((0.0, 0usize), |(s, c), x| (s + x, c + 1));
    if count == 0 {
        return Err(Error::empty_input("even_number_avg"));
    }
    Ok(sum / count as f64)
}

/// Smallest non-zero value
pub fn non_zero_min(data: &[f64]) -> Result<f64> {
    non_zero(data)
        .reduce(f64::min)
        .ok_or_else(|| Error::empty_input("non_zero_min"))
}

/// Most frequent non-zero value; ties go to the smallest value
pub fn non_zero_mode(data: &[f64]) -> Result<f64> {
    let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for x in non_zero(data) {
        *counts.entry(OrderedFloat(x)).or_insert(0) += 1;
    }

    let mut best: Option<(f64, usize)> = None;
    // Ascending key order; strict `>` keeps the smallest value among ties.
    for (value, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((value.into_inner(), count));
        }
    }
    best.map(|(v, _)| v)
        .ok_or_else(|| Error::empty_input("non_zero_mode"))
}

/// Analytical standard error of the mean: `population_std / sqrt(n)`
pub fn mean_standard_error(data: &[f64]) -> Result<f64> {
    let data = non_empty(data, "mean_standard_error")?;
    Ok(utils::population_std(data) / (data.len() as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_variance_std() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_relative_eq!(mean(&data).unwrap(), 5.5);
        assert_relative_eq!(variance(&data).unwrap(), 8.25, epsilon = 1e-12);
        assert_relative_eq!(std_dev(&data).unwrap(), 8.25_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [f64; 0] = [];
        for result in [
            mean(&empty),
            variance(&empty),
            std_dev(&empty),
            percentile(&empty, 50.0),
            max(&empty),
            min(&empty),
            non_zero_avg(&empty),
            top_k_avg(&empty),
            even_number_avg(&empty),
            non_zero_min(&empty),
            non_zero_mode(&empty),
        ] {
            assert!(matches!(result, Err(Error::EmptyInput(_))));
        }
    }

    #[test]
    fn test_percentile_nearest_rank() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        // floor(10 * 50 / 100) = 5 -> sorted[5] = 6
        assert_eq!(percentile(&data, 50.0).unwrap(), 6.0);
        // floor(10 * 95 / 100) = 9 -> 10
        assert_eq!(percentile(&data, 95.0).unwrap(), 10.0);
        assert_eq!(percentile(&data, 99.0).unwrap(), 10.0);
        assert_eq!(percentile(&data, 0.0).unwrap(), 1.0);
        assert_eq!(percentile(&data, 100.0).unwrap(), 10.0);
    }

    #[test]
    fn test_percentile_unsorted_input() {
        let data = [5.0, 1.0, 4.0, 2.0, 3.0];
        // floor(5 * 50 / 100) = 2 -> 3
        assert_eq!(percentile(&data, 50.0).unwrap(), 3.0);
    }

    #[test]
    fn test_percentile_out_of_range() {
        assert!(matches!(
            percentile(&[1.0], 101.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(percentile(&[1.0], -1.0).is_err());
    }

    #[test]
    fn test_min_max() {
        let data = [3.0, -2.0, 7.5, 0.0];
        assert_eq!(max(&data).unwrap(), 7.5);
        assert_eq!(min(&data).unwrap(), -2.0);
    }

    #[test]
    fn test_non_zero_family_all_zero() {
        let zeros = [0.0, 0.0, 0.0];
        assert!(matches!(non_zero_avg(&zeros), Err(Error::EmptyInput(_))));
        assert!(matches!(non_zero_min(&zeros), Err(Error::EmptyInput(_))));
        assert!(matches!(non_zero_mode(&zeros), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_non_zero_avg_and_min() {
        let data = [0.0, 4.0, 0.0, 2.0, -3.0];
        assert_relative_eq!(non_zero_avg(&data).unwrap(), 1.0);
        assert_eq!(non_zero_min(&data).unwrap(), -3.0);
    }

    #[test]
    fn test_non_zero_mode_tie_break() {
        // 2 and 5 both appear twice; zero appears most but is excluded
        let data = [0.0, 0.0, 0.0, 5.0, 2.0, 5.0, 2.0, 9.0];
        assert_eq!(non_zero_mode(&data).unwrap(), 2.0);

        let data = [7.0, 3.0, 7.0];
        assert_eq!(non_zero_mode(&data).unwrap(), 7.0);
    }

    #[test]
    fn test_top_k_avg() {
        let data: Vec<f64> = (1..=100).map(f64::from).collect();
        // The 99 largest are 2..=100, mean = 51
        assert_relative_eq!(top_k_avg(&data).unwrap(), 51.0);

        let short: Vec<f64> = (1..=99).map(f64::from).collect();
        assert!(matches!(
            top_k_avg(&short),
            Err(Error::InsufficientData { expected: 100, actual: 99 })
        ));
    }

    #[test]
    fn test_even_number_avg() {
        let data = [1.0, 2.0, 3.0, 4.0, -6.0, 2.5];
        assert_relative_eq!(even_number_avg(&data).unwrap(), 0.0);
        assert!(matches!(even_number_avg(&[1.0, 3.0]), Err(Error::EmptyInput(_))));
        assert_eq!(even_number_avg(&[0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_mean_standard_error() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let expected = 8.25_f64.sqrt() / 10_f64.sqrt();
        assert_relative_eq!(mean_standard_error(&data).unwrap(), expected, epsilon = 1e-12);
    }
}
