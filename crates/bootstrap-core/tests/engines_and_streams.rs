//! Engine selection, stream independence and numeric helpers

use approx::assert_relative_eq;
use bootstrap_core::{auto_engine, sequential, utils, ExecutionEngine, RngStreams};
use proptest::prelude::*;
use rand::Rng;

#[test]
fn test_auto_engine_matches_features() {
    let engine = auto_engine();

    #[cfg(feature = "parallel")]
    {
        assert!(engine.is_parallel(), "auto_engine() should be parallel with the parallel feature");
        let results = engine.execute_batch(4, |i| i * 10);
        assert_eq!(results, vec![0, 10, 20, 30]);
    }

    #[cfg(not(feature = "parallel"))]
    {
        assert!(!engine.is_parallel());
        assert_eq!(engine.num_threads(), 1);
    }
}

#[test]
fn test_streams_identical_across_engines() {
    let streams = RngStreams::from_seed(99);
    let draw = |i: usize| -> Vec<u32> {
        let mut rng = streams.stream(i);
        (0..16).map(|_| rng.gen_range(0..1_000)).collect()
    };

    let seq = sequential().execute_batch(32, draw);
    let auto = auto_engine().execute_batch(32, draw);
    assert_eq!(seq, auto);
    // Neighbouring streams never coincide
    assert!(seq.windows(2).all(|w| w[0] != w[1]));
}

#[test]
fn test_entropy_seeds_differ() {
    let a = RngStreams::from_entropy();
    let b = RngStreams::from_entropy();
    assert_ne!(a.base_seed(), b.base_seed());
}

#[test]
fn test_population_moments() {
    let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_relative_eq!(utils::mean(&data), 5.0);
    assert_relative_eq!(utils::population_variance(&data), 4.0);
    assert_relative_eq!(utils::population_std(&data), 2.0);
    let (mean, sd) = utils::mean_and_std(&data, "moments").unwrap();
    assert_relative_eq!(mean, 5.0);
    assert_relative_eq!(sd, 2.0);
    assert!(utils::mean_and_std(&[], "moments").is_err());
}

proptest! {
    // Property: the population std is shift invariant and never negative
    #[test]
    fn prop_std_shift_invariant(
        data in prop::collection::vec(-1e3f64..1e3, 1..200),
        shift in -1e3f64..1e3,
    ) {
        let shifted: Vec<f64> = data.iter().map(|x| x + shift).collect();
        let sd = utils::population_std(&data);
        prop_assert!(sd >= 0.0);
        prop_assert!((sd - utils::population_std(&shifted)).abs() < 1e-6);
    }

    // Property: sorting yields an ascending permutation
    #[test]
    fn prop_sorted_is_ascending(data in prop::collection::vec(-1e6f64..1e6, 0..300)) {
        let sorted = utils::sorted(&data);
        prop_assert_eq!(sorted.len(), data.len());
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }
}
