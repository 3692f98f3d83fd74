//! Reference distributions, empirical summaries, and divergence metrics.
//!
//! The ideal separation distribution for a deck of `N` cards puts weight
//! proportional to `(N - d)` on each distance `d` in `[1, N-1]`: in a
//! uniformly random permutation there are `(N - d)` position pairs exactly
//! `d` apart. Empirical results from [`simulate`](crate::sim::simulate) are
//! summarized per round and compared against the ideal via KL divergence.

use serde::{Deserialize, Serialize};

use crate::errors::StatsError;
use crate::sim::SimResult;

/// Guard added to the reference weights inside [`kl_divergence`] so a zero
/// mass point in the comparison distribution stays finite.
pub const KL_EPSILON: f64 = 1e-6;

/// A discrete probability distribution over separation distances: parallel
/// support values and non-negative weights summing to 1 within floating
/// tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    support: Vec<u32>,
    weights: Vec<f64>,
}

impl Distribution {
    pub fn new(support: Vec<u32>, weights: Vec<f64>) -> Result<Self, StatsError> {
        if support.len() != weights.len() {
            return Err(StatsError::SupportMismatch {
                p: support.len(),
                q: weights.len(),
            });
        }
        Ok(Self { support, weights })
    }

    pub fn support(&self) -> &[u32] {
        &self.support
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.support.len()
    }

    pub fn is_empty(&self) -> bool {
        self.support.is_empty()
    }
}

/// Scalar summary of an analytic distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistroStats {
    pub mean: f64,
    pub p5: u32,
    pub p25: u32,
    pub p75: u32,
    pub p95: u32,
}

/// Per-round summary of a simulation run: parallel vectors aligned to
/// `rounds`, the sorted round numbers. This is the contract surface the
/// external plotting collaborator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimStats {
    pub rounds: Vec<u32>,
    pub mean: Vec<f64>,
    pub median: Vec<f64>,
    pub p5: Vec<f64>,
    pub p25: Vec<f64>,
    pub p75: Vec<f64>,
    pub p95: Vec<f64>,
}

/// Analytic distribution of the separation distance between two fixed cards
/// in a uniformly random permutation of a `deck_len`-card deck.
pub fn ideal_distro(deck_len: usize) -> Result<Distribution, StatsError> {
    if deck_len < 2 {
        return Err(StatsError::DegenerateDeck(deck_len));
    }
    let n = deck_len as u32;
    let support: Vec<u32> = (1..n).collect();
    let total: f64 = support.iter().map(|&d| (n - d) as f64).sum();
    let weights = support.iter().map(|&d| (n - d) as f64 / total).collect();
    Ok(Distribution { support, weights })
}

/// Mean and percentiles of an analytic distribution. Percentiles are found
/// by cumulative-sum threshold crossing: the first support value where the
/// cdf exceeds the quantile level.
pub fn ideal_distro_stats(distro: &Distribution) -> DistroStats {
    let mean = distro
        .support
        .iter()
        .zip(&distro.weights)
        .map(|(&d, &w)| d as f64 * w)
        .sum();
    DistroStats {
        mean,
        p5: cdf_crossing(distro, 0.05),
        p25: cdf_crossing(distro, 0.25),
        p75: cdf_crossing(distro, 0.75),
        p95: cdf_crossing(distro, 0.95),
    }
}

fn cdf_crossing(distro: &Distribution, level: f64) -> u32 {
    let mut cdf = 0.0;
    for (&d, &w) in distro.support.iter().zip(&distro.weights) {
        cdf += w;
        if cdf > level {
            return d;
        }
    }
    // cdf rounds to just under 1.0; the crossing is the last support value
    distro.support.last().copied().unwrap_or(0)
}

/// Mean, median, and 5/25/75/95th percentiles of each round's observations,
/// aligned to sorted round numbers.
pub fn sim_stats(results: &SimResult) -> Result<SimStats, StatsError> {
    if results.is_empty() {
        return Err(StatsError::EmptyResult);
    }

    let mut stats = SimStats {
        rounds: Vec::with_capacity(results.n_rounds()),
        mean: Vec::with_capacity(results.n_rounds()),
        median: Vec::with_capacity(results.n_rounds()),
        p5: Vec::with_capacity(results.n_rounds()),
        p25: Vec::with_capacity(results.n_rounds()),
        p75: Vec::with_capacity(results.n_rounds()),
        p95: Vec::with_capacity(results.n_rounds()),
    };

    for (round, distances) in results.rounds() {
        if distances.is_empty() {
            return Err(StatsError::EmptyResult);
        }
        let mut sorted = distances.to_vec();
        sorted.sort_unstable();

        let sum: u64 = sorted.iter().map(|&d| d as u64).sum();
        stats.rounds.push(round);
        stats.mean.push(sum as f64 / sorted.len() as f64);
        stats.median.push(quantile(&sorted, 0.5));
        stats.p5.push(quantile(&sorted, 0.05));
        stats.p25.push(quantile(&sorted, 0.25));
        stats.p75.push(quantile(&sorted, 0.75));
        stats.p95.push(quantile(&sorted, 0.95));
    }

    Ok(stats)
}

/// Linear-interpolation quantile of already-sorted observations.
fn quantile(sorted: &[u32], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let pos = q * last as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] as f64 + (sorted[hi] as f64 - sorted[lo] as f64) * frac
}

/// Normalized histogram of observed distances over the fixed support
/// `[1, max_distance]`. Observations outside the support are dropped; if
/// nothing lands inside it the histogram is degenerate and rejected rather
/// than normalized into NaNs.
pub fn empirical_distro(distances: &[u32], max_distance: u32) -> Result<Distribution, StatsError> {
    let support: Vec<u32> = (1..=max_distance).collect();
    let mut counts = vec![0u64; support.len()];
    for &d in distances {
        if (1..=max_distance).contains(&d) {
            counts[(d - 1) as usize] += 1;
        }
    }
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return Err(StatsError::EmptyHistogram);
    }
    let weights = counts.iter().map(|&c| c as f64 / total as f64).collect();
    Ok(Distribution { support, weights })
}

/// Kullback-Leibler divergence `sum(p_i * ln(p_i / (q_i + eps)))` over the
/// support points where `p_i != 0`.
///
/// Asymmetric by convention: `p` is the empirical distribution, `q` the
/// ideal reference. The epsilon guard keeps the sum finite when `q` carries
/// zero mass at a point where `p` does not.
pub fn kl_divergence(p: &Distribution, q: &Distribution) -> Result<f64, StatsError> {
    if p.len() != q.len() {
        return Err(StatsError::SupportMismatch {
            p: p.len(),
            q: q.len(),
        });
    }
    Ok(p.weights
        .iter()
        .zip(&q.weights)
        .filter(|(&pi, _)| pi != 0.0)
        .map(|(&pi, &qi)| pi * (pi / (qi + KL_EPSILON)).ln())
        .sum())
}

/// Per-round KL divergence of the empirical separation distribution against
/// the ideal, in ascending round order.
pub fn kl_divergences(results: &SimResult, ideal: &Distribution) -> Result<Vec<f64>, StatsError> {
    if results.is_empty() {
        return Err(StatsError::EmptyResult);
    }
    let max_distance = ideal
        .support
        .last()
        .copied()
        .ok_or(StatsError::EmptyHistogram)?;

    results
        .rounds()
        .map(|(_, distances)| {
            let empirical = empirical_distro(distances, max_distance)?;
            kl_divergence(&empirical, ideal)
        })
        .collect()
}
