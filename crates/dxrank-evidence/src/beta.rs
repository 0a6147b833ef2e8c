//! Beta-posterior arithmetic.
//!
//! The evidence model is a pair of Beta distributions per disease — one for
//! the symptom channel, one for the risk-factor channel. Match evidence
//! accumulates as pseudo-counts on top of a uniform Beta(1, 1) prior:
//!
//!   alpha = effective matches + 1
//!   beta  = effective misses  + 1
//!
//! The uniform prior is a hard floor: no operation in this module can push
//! either parameter below 1.0, and parameters only ever grow — more evidence
//! always tightens the posterior. That monotonicity is what lets the
//! variance double as a confidence signal.

/// Beta distribution parameters with the uniform-prior floor enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaParams {
    pub alpha: f64,
    pub beta: f64,
}

impl BetaParams {
    /// Build parameters directly, flooring both at 1.0.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            alpha: alpha.max(1.0),
            beta: beta.max(1.0),
        }
    }

    /// The uninformative uniform prior Beta(1, 1).
    pub fn uniform() -> Self {
        Self { alpha: 1.0, beta: 1.0 }
    }

    /// Likelihood parameters from match evidence against a full reference
    /// list: `alpha = match + 1`, `beta = max(total − match, 0) + 1`.
    ///
    /// Every profile phrase not matched counts against the likelihood here —
    /// this is the scoring-stage formula, where the full profile is the
    /// denominator.
    pub fn from_counts(effective_match: f64, reference_total: usize) -> Self {
        let miss = (reference_total as f64 - effective_match).max(0.0);
        Self::new(effective_match + 1.0, miss + 1.0)
    }

    /// Active-evidence parameters from observed phrases only:
    /// `beta = max(observed − match, 0) + 1`.
    ///
    /// Used for confidence, where passive non-observation must contribute
    /// nothing — a phrase nobody asked about is not evidence.
    pub fn from_observed(effective_match: f64, observed: usize) -> Self {
        let miss = (observed as f64 - effective_match).max(0.0);
        Self::new(effective_match + 1.0, miss + 1.0)
    }

    /// Posterior mean α / (α + β).
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Accumulate positive evidence of the given weight.
    pub fn add_successes(&mut self, weight: f64) {
        self.alpha += weight.max(0.0);
    }

    /// Accumulate negative evidence of the given weight.
    pub fn add_failures(&mut self, weight: f64) {
        self.beta += weight.max(0.0);
    }
}

/// Exact analytic Beta variance: αβ / [(α+β)²(α+β+1)].
///
/// Strictly positive for finite parameters and monotonically decreasing as
/// α+β grows, which makes it a principled evidence-volume signal: any new
/// observation, supporting or refuting, shrinks it.
pub fn variance(alpha: f64, beta: f64) -> f64 {
    let n = alpha + beta;
    (alpha * beta) / (n * n * (n + 1.0))
}

/// Evidence-volume confidence from the two channel posteriors.
///
/// Combines the channel variances as `w_sym²·Var(sym) + w_rf²·Var(rf)` and
/// normalizes by the theoretical maximum — both channels sitting at the
/// uninformative Beta(1, 1) prior, i.e. `(w_sym² + w_rf²) / 12`. Returns
/// `1 − ratio`: exactly 0 at the uniform prior, approaching (never
/// reaching) 1 as evidence accumulates.
///
/// Degenerate guard: with both weights zero the maximum variance is zero,
/// and the only honest answer is zero confidence.
pub fn normalized_confidence(
    sym: BetaParams,
    rf: BetaParams,
    w_sym: f64,
    w_rf: f64,
) -> f64 {
    let max_var = (w_sym * w_sym + w_rf * w_rf) / 12.0;
    if max_var <= 0.0 {
        return 0.0;
    }
    let combined = w_sym * w_sym * variance(sym.alpha, sym.beta)
        + w_rf * w_rf * variance(rf.alpha, rf.beta);
    (1.0 - combined / max_var).clamp(0.0, 1.0)
}
