//! Utility functions for working with data slices
//!
//! Moments here are the biased (population) forms, dividing by `n`, which is
//! what every error ratio in this workspace is defined against.

use crate::{Error, Result};

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use bootstrap_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

/// Sort a slice ascending, NaN values last
pub fn sort_in_place(data: &mut [f64]) {
    data.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use bootstrap_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance: `sum((x - mean)^2) / n`
///
/// Returns 0.0 for empty slices.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64
}

/// Population standard deviation
///
/// # Examples
///
/// ```rust
/// use bootstrap_core::utils::population_std;
///
/// let sd = population_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((sd - 2.0).abs() < 1e-12);
/// ```
pub fn population_std(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Mean and population standard deviation in one call, failing on empty input
pub fn mean_and_std(data: &[f64], context: &str) -> Result<(f64, f64)> {
    if data.is_empty() {
        return Err(Error::empty_input(context));
    }
    Ok((mean(data), population_std(data)))
}

/// Spread relative to a reference value: `sd / |reference|`
///
/// A zero reference yields an infinite (or NaN for `sd == 0`) ratio, which
/// callers report as-is.
pub fn relative_spread(sd: f64, reference: f64) -> f64 {
    sd / reference.abs()
}

/// Check that every value is finite
pub fn ensure_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, 2.0];
        let sorted_data = sorted(&data);
        assert_eq!(&sorted_data[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted_data[3].is_nan());
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let _ = sorted(&data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[-10.0, 10.0]), 0.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_population_moments() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        // sum of squared deviations = 10, n = 5
        assert_relative_eq!(population_variance(&data), 2.0, epsilon = 1e-12);
        assert_relative_eq!(population_std(&data), 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_population_std_single_and_identical() {
        assert_eq!(population_std(&[42.0]), 0.0);
        assert_eq!(population_std(&[5.0, 5.0, 5.0]), 0.0);
        assert_eq!(population_std(&[]), 0.0);
    }

    #[test]
    fn test_population_std_one_to_ten() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        // variance = (n^2 - 1) / 12 = 8.25
        assert_relative_eq!(population_std(&data), 8.25_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_mean_and_std_empty() {
        assert!(matches!(mean_and_std(&[], "chunks"), Err(Error::EmptyInput(_))));
        let (m, s) = mean_and_std(&[1.0, 3.0], "chunks").unwrap();
        assert_eq!(m, 2.0);
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_relative_spread() {
        assert_eq!(relative_spread(1.0, 4.0), 0.25);
        assert_eq!(relative_spread(1.0, -4.0), 0.25);
        assert!(relative_spread(1.0, 0.0).is_infinite());
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(&[1.0, 2.0], "data").is_ok());
        assert!(ensure_finite(&[1.0, f64::NAN], "data").is_err());
        assert!(ensure_finite(&[f64::INFINITY], "data").is_err());
    }
}
