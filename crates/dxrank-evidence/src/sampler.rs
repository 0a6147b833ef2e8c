//! Deterministic Monte Carlo sampling of the combined likelihood.
//!
//! The combined likelihood — a fixed-weight mixture of two Beta posteriors
//! and a noise-perturbed prior — has no tractable closed-form percentiles,
//! so credible intervals come from Monte Carlo. The generator is seeded
//! deterministically: this is a ranking heuristic, not a stochastic
//! simulation, and bit-reproducible output is worth more than fresh
//! entropy. Tests and the cross-disease normalization both rely on it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Normal};

use dxrank_contracts::error::{DxrankError, DxrankResult};

use crate::beta::BetaParams;
use crate::{W_PRIOR, W_RISK, W_SYMPTOMS};

/// Empirical summary of one Monte Carlo posterior sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosteriorSummary {
    /// Sample mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    /// 5th percentile.
    pub ci_lo: f64,
    /// 95th percentile.
    pub ci_hi: f64,
}

/// Derive the seed for one disease's draw stream.
///
/// Mixing the catalog index with a golden-ratio constant gives every
/// disease an independent, stable stream: repeated passes over the same
/// catalog draw identical samples per disease, so before/after deltas
/// reflect parameter changes only, and per-disease sampling could run in
/// parallel without changing any result.
pub fn disease_seed(base_seed: u64, index: usize) -> u64 {
    base_seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn beta_dist(params: BetaParams) -> DxrankResult<Beta<f64>> {
    Beta::new(params.alpha, params.beta).map_err(|e| DxrankError::Numeric {
        reason: format!(
            "Beta({}, {}) construction failed: {}",
            params.alpha, params.beta, e
        ),
    })
}

/// Empirical mean, std, and 5th/95th percentiles of Beta(α, β).
///
/// Draws `samples` values from a generator seeded with `seed`; identical
/// inputs produce bit-identical output.
pub fn posterior_mean_interval(
    params: BetaParams,
    samples: usize,
    seed: u64,
) -> DxrankResult<PosteriorSummary> {
    let dist = beta_dist(params)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let draws: Vec<f64> = (0..samples).map(|_| rng.sample(dist)).collect();
    Ok(summarize(draws))
}

/// Monte Carlo summary of the combined per-disease likelihood:
///
///   W_SYMPTOMS·Beta(sym) + W_RISK·Beta(rf) + W_PRIOR·Normal(prior, 0.1·prior)
///
/// with every prior draw clamped to [1e-6, 1]. The weights are fixed
/// constants of the contract, not inputs — the confidence normalization in
/// [`crate::beta::normalized_confidence`] is derived assuming them.
pub fn combined_likelihood(
    sym: BetaParams,
    rf: BetaParams,
    prior: f64,
    samples: usize,
    seed: u64,
) -> DxrankResult<PosteriorSummary> {
    let sym_dist = beta_dist(sym)?;
    let rf_dist = beta_dist(rf)?;
    let prior_dist = Normal::new(prior, prior * 0.1).map_err(|e| DxrankError::Numeric {
        reason: format!("Normal({}, {}) construction failed: {}", prior, prior * 0.1, e),
    })?;

    let mut rng = StdRng::seed_from_u64(seed);
    let sym_draws: Vec<f64> = (0..samples).map(|_| rng.sample(sym_dist)).collect();
    let rf_draws: Vec<f64> = (0..samples).map(|_| rng.sample(rf_dist)).collect();
    let prior_draws: Vec<f64> = (0..samples)
        .map(|_| rng.sample(prior_dist).clamp(1e-6, 1.0))
        .collect();

    let combined: Vec<f64> = (0..samples)
        .map(|i| W_SYMPTOMS * sym_draws[i] + W_RISK * rf_draws[i] + W_PRIOR * prior_draws[i])
        .collect();
    Ok(summarize(combined))
}

fn summarize(mut draws: Vec<f64>) -> PosteriorSummary {
    if draws.is_empty() {
        return PosteriorSummary { mean: 0.0, std: 0.0, ci_lo: 0.0, ci_hi: 0.0 };
    }
    let n = draws.len() as f64;
    let mean = draws.iter().sum::<f64>() / n;
    let var = draws.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;

    draws.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    PosteriorSummary {
        mean,
        std: var.sqrt(),
        ci_lo: percentile(&draws, 5.0),
        ci_hi: percentile(&draws, 95.0),
    }
}

/// Linearly interpolated percentile over a sorted sample.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
