//! Property-based tests for the statistic registry
//!
//! Percentiles must not depend on input order, filtered statistics must fail
//! cleanly when the filter leaves nothing, and names must round-trip.

use bootstrap_core::Error;
use bootstrap_statistics::{functions, registry, StatisticKind};
use bootstrap_core::Statistic;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, LogNormal};

fn finite_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..300)
}

proptest! {
    // Property: sorting first never changes a percentile
    #[test]
    fn prop_percentile_idempotent_on_sorted(data in finite_values(), p in 0u8..=100) {
        let mut sorted = data.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let direct = functions::percentile(&data, f64::from(p)).unwrap();
        let presorted = functions::percentile(&sorted, f64::from(p)).unwrap();
        let kernel = functions::percentile_sorted(&sorted, f64::from(p)).unwrap();

        prop_assert_eq!(direct, presorted);
        prop_assert_eq!(direct, kernel);
    }

    // Property: a percentile is always an observed value between min and max
    #[test]
    fn prop_percentile_is_observed(data in finite_values(), p in 0u8..=100) {
        let value = functions::percentile(&data, f64::from(p)).unwrap();
        prop_assert!(data.contains(&value));
        prop_assert!(value >= functions::min(&data).unwrap());
        prop_assert!(value <= functions::max(&data).unwrap());
    }

    // Property: the non-zero family fails on all-zero input of any length
    #[test]
    fn prop_non_zero_family_rejects_zeros(len in 1usize..200) {
        let zeros = vec![0.0; len];
        prop_assert!(matches!(functions::non_zero_avg(&zeros), Err(Error::EmptyInput(_))));
        prop_assert!(matches!(functions::non_zero_min(&zeros), Err(Error::EmptyInput(_))));
        prop_assert!(matches!(functions::non_zero_mode(&zeros), Err(Error::EmptyInput(_))));
    }

    // Property: zeros never influence the non-zero family
    #[test]
    fn prop_zeros_are_ignored(data in prop::collection::vec(1.0..1000.0f64, 1..100), zeros in 0usize..100) {
        let mut padded = data.clone();
        padded.extend(std::iter::repeat(0.0).take(zeros));

        prop_assert_eq!(functions::non_zero_min(&padded).unwrap(), functions::non_zero_min(&data).unwrap());
        prop_assert_eq!(functions::non_zero_mode(&padded).unwrap(), functions::non_zero_mode(&data).unwrap());
        let a = functions::non_zero_avg(&padded).unwrap();
        let b = functions::non_zero_avg(&data).unwrap();
        prop_assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0));
    }

    // Property: every percentile name parses back to itself
    #[test]
    fn prop_percentile_name_round_trip(p in 0u8..=100) {
        let kind = StatisticKind::Percentile(p);
        let parsed: StatisticKind = kind.name().parse().unwrap();
        prop_assert_eq!(parsed, kind);
    }
}

#[test]
fn test_registry_names_are_unique_and_parse() {
    let stats = registry();
    let mut names: Vec<&str> = stats.iter().map(|s| s.name()).collect();
    for name in &names {
        assert!(name.parse::<StatisticKind>().is_ok(), "{name} should parse");
    }
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), stats.len());
}

#[test]
fn test_registry_on_skewed_data() {
    // Heavy right tail with a block of zeros, like a usage-count column
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let dist = LogNormal::new(2.0_f64, 1.0).unwrap();
    let mut data: Vec<f64> = (0..2_000).map(|_| dist.sample(&mut rng).round()).collect();
    data.extend(std::iter::repeat(0.0).take(500));

    for stat in registry() {
        let value = stat.evaluate(&data);
        assert!(
            value.as_ref().is_ok_and(|v| v.is_finite()),
            "{} failed on skewed data: {value:?}",
            stat.name()
        );
    }

    let mean = functions::mean(&data).unwrap();
    let non_zero = functions::non_zero_avg(&data).unwrap();
    assert!(non_zero > mean);
    assert!(functions::top_k_avg(&data).unwrap() >= functions::percentile(&data, 95.0).unwrap());
}
