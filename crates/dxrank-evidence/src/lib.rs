//! # dxrank-evidence
//!
//! The statistical leaf of the DXRANK engine: Beta-posterior arithmetic and
//! the deterministically seeded Monte Carlo sampler the scorer and updater
//! share. No mutable state lives here — every function is pure given its
//! seed.

pub mod beta;
pub mod sampler;

pub use beta::{normalized_confidence, variance, BetaParams};
pub use sampler::{combined_likelihood, disease_seed, posterior_mean_interval, PosteriorSummary};

/// Weight of the symptom channel in the combined likelihood.
pub const W_SYMPTOMS: f64 = 0.65;
/// Weight of the risk-factor channel in the combined likelihood.
pub const W_RISK: f64 = 0.20;
/// Weight of the noise-perturbed prevalence prior.
pub const W_PRIOR: f64 = 0.15;

/// Monte Carlo draws per disease per scoring pass.
pub const MC_SAMPLES: usize = 5_000;
/// Fixed base seed. Deliberate: rankings must be reproducible run to run.
pub const MC_SEED: u64 = 42;
