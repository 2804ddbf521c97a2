//! One-dimensional k-means clustering
//!
//! Lloyd iterations started from `k` distinct randomly chosen observations,
//! repeated `restarts` times; the codebook with the lowest distortion (mean
//! distance from each observation to its centroid) wins. Clusters that lose
//! all members are dropped, so the result may hold fewer than `k` centroids.
//!
//! The result depends on the random initialisation. Pass a seeded generator
//! for reproducible output.

use bootstrap_core::{Error, Result};
use rand::seq::index;
use rand::Rng;
use tracing::trace;

/// Default number of clusters for the k-means statistic
pub const DEFAULT_CLUSTERS: usize = 5;

/// k-means configuration for one-dimensional data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeans1d {
    /// Requested number of clusters
    pub clusters: usize,
    /// Independent random restarts
    pub restarts: usize,
    /// Stop once distortion improves by no more than this
    pub threshold: f64,
    /// Upper bound on Lloyd iterations per restart
    pub max_iter: usize,
}

impl Default for KMeans1d {
    fn default() -> Self {
        Self {
            clusters: DEFAULT_CLUSTERS,
            restarts: 20,
            threshold: 1e-5,
            max_iter: 300,
        }
    }
}

impl KMeans1d {
    pub fn new(clusters: usize) -> Self {
        Self {
            clusters,
            ..Self::default()
        }
    }

    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts.max(1);
        self
    }

    /// Fit and return the best codebook, ascending
    pub fn fit<R: Rng + ?Sized>(&self, data: &[f64], rng: &mut R) -> Result<Vec<f64>> {
        if data.is_empty() {
            return Err(Error::empty_input("kmeans"));
        }
        if self.clusters == 0 {
            return Err(Error::InvalidParameter(
                "kmeans needs at least one cluster".to_string(),
            ));
        }
        let k = self.clusters.min(data.len());

        let mut best: Option<(Vec<f64>, f64)> = None;
        for restart in 0..self.restarts.max(1) {
            let init: Vec<f64> = index::sample(rng, data.len(), k)
                .into_iter()
                .map(|i| data[i])
                .collect();
            let (codebook, distortion) = self.lloyd(data, init);
            trace!(restart, distortion, centroids = codebook.len(), "kmeans restart");
            if best.as_ref().map_or(true, |(_, d)| distortion < *d) {
                best = Some((codebook, distortion));
            }
        }

        let (mut codebook, _) = best.ok_or_else(|| Error::Computation("kmeans produced no codebook".into()))?;
        codebook.sort_by(|a, b| a.total_cmp(b));
        Ok(codebook)
    }

    /// Mean of the fitted centroids
    pub fn centroid_mean<R: Rng + ?Sized>(&self, data: &[f64], rng: &mut R) -> Result<f64> {
        let codebook = self.fit(data, rng)?;
        Ok(codebook.iter().sum::<f64>() / codebook.len() as f64)
    }

    fn lloyd(&self, data: &[f64], mut codebook: Vec<f64>) -> (Vec<f64>, f64) {
        let mut previous = f64::INFINITY;
        let mut distortion = f64::INFINITY;

        for _ in 0..self.max_iter {
            let mut sums = vec![0.0; codebook.len()];
            let mut counts = vec![0usize; codebook.len()];
            let mut total = 0.0;

            for &x in data {
                let (j, d) = nearest(&codebook, x);
                sums[j] += x;
                counts[j] += 1;
                total += d;
            }
            distortion = total / data.len() as f64;

            codebook = sums
                .iter()
                .zip(&counts)
                .filter(|(_, &c)| c > 0)
                .map(|(s, &c)| s / c as f64)
                .collect();

            if previous - distortion <= self.threshold {
                break;
            }
            previous = distortion;
        }

        (codebook, distortion)
    }
}

/// Index of and distance to the closest centroid; ties go to the lower index
fn nearest(codebook: &[f64], x: f64) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (j, &c) in codebook.iter().enumerate() {
        let d = (x - c).abs();
        if d < best.1 {
            best = (j, d);
        }
    }
    best
}
