//! Core traits for statistic evaluation
//!
//! Every summary statistic the resamplers and sweeps work with implements
//! [`Statistic`]: a single-signature capability mapping a non-empty sample
//! to one real value. Concrete statistics live in `bootstrap-statistics`;
//! ad-hoc closures can be wrapped with [`crate::adapters::FnStatistic`].

use crate::Result;

/// A named, pure mapping from a sample of reals to a single real
///
/// Implementations must be `Send + Sync` so the same statistic can be shared
/// by reference across parallel resampling workers.
///
/// # Example
///
/// ```rust
/// use bootstrap_core::{Error, Result, Statistic};
///
/// struct Range;
///
/// impl Statistic for Range {
///     fn evaluate(&self, sample: &[f64]) -> Result<f64> {
///         if sample.is_empty() {
///             return Err(Error::empty_input("range"));
///         }
///         let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
///         let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
///         Ok(max - min)
///     }
///
///     fn name(&self) -> &str {
///         "range"
///     }
/// }
///
/// assert_eq!(Range.evaluate(&[3.0, 1.0, 7.0]).unwrap(), 6.0);
/// ```
pub trait Statistic: Send + Sync {
    /// Evaluate the statistic on a sample
    ///
    /// Fails with [`crate::Error::EmptyInput`] when the sample (or the part
    /// of it the statistic looks at) is empty.
    fn evaluate(&self, sample: &[f64]) -> Result<f64>;

    /// Name used for reporting and registry lookup
    fn name(&self) -> &str;

    /// Whether repeated evaluation on identical input yields identical output
    ///
    /// Randomized statistics (e.g. clustering-based centers) return `false`.
    fn is_deterministic(&self) -> bool {
        true
    }

    /// Analytical standard error of the statistic on `sample`, if one exists
    fn closed_form_standard_error(&self, _sample: &[f64]) -> Option<f64> {
        None
    }
}

impl<S: Statistic + ?Sized> Statistic for &S {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        (**self).evaluate(sample)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_deterministic(&self) -> bool {
        (**self).is_deterministic()
    }

    fn closed_form_standard_error(&self, sample: &[f64]) -> Option<f64> {
        (**self).closed_form_standard_error(sample)
    }
}

impl<S: Statistic + ?Sized> Statistic for Box<S> {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        (**self).evaluate(sample)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_deterministic(&self) -> bool {
        (**self).is_deterministic()
    }

    fn closed_form_standard_error(&self, sample: &[f64]) -> Option<f64> {
        (**self).closed_form_standard_error(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct First;

    impl Statistic for First {
        fn evaluate(&self, sample: &[f64]) -> Result<f64> {
            sample.first().copied().ok_or_else(|| Error::empty_input("first"))
        }

        fn name(&self) -> &str {
            "first"
        }
    }

    #[test]
    fn test_defaults() {
        assert!(First.is_deterministic());
        assert_eq!(First.closed_form_standard_error(&[1.0, 2.0]), None);
    }

    #[test]
    fn test_reference_and_box_forwarding() {
        let by_ref: &dyn Statistic = &First;
        assert_eq!(by_ref.evaluate(&[4.0, 5.0]).unwrap(), 4.0);
        assert_eq!(by_ref.name(), "first");

        let boxed: Box<dyn Statistic> = Box::new(First);
        assert_eq!(boxed.evaluate(&[9.0]).unwrap(), 9.0);
        assert!(boxed.evaluate(&[]).is_err());
    }
}
