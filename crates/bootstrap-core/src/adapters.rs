//! Adapters for bridging plain functions to the [`Statistic`] trait
//!
//! The registry in `bootstrap-statistics` is a closed enum. Callers that need
//! a one-off statistic can wrap a closure instead of extending the enum.

use crate::{Result, Statistic};

/// Named closure adapter
///
/// # Examples
///
/// ```rust
/// use bootstrap_core::{adapters::FnStatistic, Statistic};
///
/// let sum = FnStatistic::new("sum", |xs: &[f64]| Ok(xs.iter().sum()));
/// assert_eq!(sum.evaluate(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
/// assert_eq!(sum.name(), "sum");
/// ```
#[derive(Clone)]
pub struct FnStatistic<F> {
    name: String,
    func: F,
    deterministic: bool,
}

impl<F> FnStatistic<F>
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    /// Wrap a deterministic function
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            deterministic: true,
        }
    }

    /// Wrap a function whose output may differ between calls on the same input
    pub fn randomized(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            deterministic: false,
        }
    }
}

impl<F> Statistic for FnStatistic<F>
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    #[inline]
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        (self.func)(sample)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_deterministic(&self) -> bool {
        self.deterministic
    }
}

impl<F> std::fmt::Debug for FnStatistic<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStatistic")
            .field("name", &self.name)
            .field("deterministic", &self.deterministic)
            .finish()
    }
}

/// Convenience constructor for [`FnStatistic::new`]
pub fn statistic_fn<F>(name: impl Into<String>, func: F) -> FnStatistic<F>
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    FnStatistic::new(name, func)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_closure_adapter() {
        let last = statistic_fn("last", |xs: &[f64]| {
            xs.last().copied().ok_or_else(|| Error::empty_input("last"))
        });
        assert_eq!(last.evaluate(&[1.0, 2.0]).unwrap(), 2.0);
        assert!(matches!(last.evaluate(&[]), Err(Error::EmptyInput(_))));
        assert!(last.is_deterministic());
    }

    #[test]
    fn test_randomized_flag() {
        let noisy = FnStatistic::randomized("noisy", |_: &[f64]| Ok(0.0));
        assert!(!noisy.is_deterministic());
        assert!(format!("{noisy:?}").contains("noisy"));
    }
}
