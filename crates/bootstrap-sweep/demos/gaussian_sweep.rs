//! Bootstrap versus ground-truth error for a handful of statistics
//!
//! Run with `RUST_LOG=bootstrap_sweep=info cargo run --example gaussian_sweep`
//! to watch rows complete; `debug` shows every checkpoint.

use anyhow::Result;
use bootstrap_statistics::{NamedStatistic, StatisticKind};
use bootstrap_sweep::{ErrorSweepEstimator, SizeRange, SweepConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, LogNormal, Normal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let normal = Normal::new(100.0_f64, 15.0)?;
    let heavy = LogNormal::new(0.0_f64, 1.5)?;
    let mut data: Vec<f64> = (0..80_000).map(|_| normal.sample(&mut rng).round()).collect();
    data.extend((0..20_000).map(|_| (heavy.sample(&mut rng) * 50.0).round()));

    let statistics: Vec<NamedStatistic> = [
        StatisticKind::Mean,
        StatisticKind::MEDIAN,
        StatisticKind::P99,
        StatisticKind::Max,
        StatisticKind::TopKAvg,
    ]
    .into_iter()
    .map(NamedStatistic::new)
    .collect();

    let config = SweepConfig::default()
        .with_sizes(SizeRange::stepped(1_000, 11_000, 1_000)?)
        .with_seed(7);
    let mut estimator = ErrorSweepEstimator::new(config);
    let report = estimator.run_all(&data, &statistics)?;

    for curve in &report.curves {
        println!("{curve}");
        for skipped in &curve.skipped {
            println!("  skipped {skipped}");
        }
    }
    for failed in &report.failed {
        println!("{}: no curve ({})", failed.statistic, failed.reason);
    }
    println!("strata built: {}", estimator.strata_builds());

    if std::env::args().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
