//! Ranked candidate projection types.
//!
//! `CandidateDiagnosis` is a read-only snapshot rebuilt on every scoring or
//! update call. It never aliases the updater's mutable state — probability
//! and confidence are independent axes, and the label thresholds below are
//! part of the public contract.

use serde::{Deserialize, Serialize};

/// Raw match evidence for one channel (symptoms or risk factors).
///
/// "Observed" counts phrases for which *some* determination was made —
/// a match or a confident miss. Profile phrases never mentioned at all
/// contribute to none of these except `total`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelEvidence {
    /// Continuous match credit: 1.0 per confident match, 0.5 per ambiguous.
    pub effective_match: f64,
    /// Continuous miss credit from confident misses.
    pub effective_miss: f64,
    /// Number of reference phrases with any determination.
    pub observed: usize,
    /// Number of reference phrases in the disease profile.
    pub total: usize,
}

/// Categorical band for a normalized probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityLabel {
    VeryHigh,
    High,
    Moderate,
    Low,
    VeryLow,
}

impl ProbabilityLabel {
    /// Band a probability: ≥0.20 VeryHigh, ≥0.10 High, ≥0.05 Moderate,
    /// ≥0.02 Low, else VeryLow.
    pub fn from_probability(p: f64) -> Self {
        if p >= 0.20 {
            Self::VeryHigh
        } else if p >= 0.10 {
            Self::High
        } else if p >= 0.05 {
            Self::Moderate
        } else if p >= 0.02 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

impl std::fmt::Display for ProbabilityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        };
        f.write_str(s)
    }
}

/// Categorical band for an evidence-volume confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLabel {
    High,
    Moderate,
    Low,
    VeryLow,
}

impl ConfidenceLabel {
    /// Band a confidence: ≥0.80 High, ≥0.50 Moderate, ≥0.25 Low,
    /// else VeryLow.
    pub fn from_confidence(c: f64) -> Self {
        if c >= 0.80 {
            Self::High
        } else if c >= 0.50 {
            Self::Moderate
        } else if c >= 0.25 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

impl std::fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        };
        f.write_str(s)
    }
}

/// The "strong signal, weak evidence" alert quadrant: probability ≥ 0.08
/// with confidence < 0.50. Clinically the most dangerous combination —
/// the evidence points at the disease but there is not enough of it.
pub fn risk_flag(probability: f64, confidence: f64) -> bool {
    probability >= 0.08 && confidence < 0.50
}

/// One disease's position in a ranking snapshot.
///
/// Created fresh by every `score()` / `current_candidates()` call; the
/// previous generation is discarded. Holds no handle back into any
/// mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDiagnosis {
    pub disease: String,

    /// Raw symptom-channel evidence counts.
    pub symptoms: ChannelEvidence,
    /// Raw risk-factor-channel evidence counts.
    pub risk_factors: ChannelEvidence,
    /// Base prevalence copied from the profile.
    pub prior: f64,

    /// Cross-normalized posterior; sums to 1.0 over the candidate set.
    pub probability: f64,
    /// Pre-normalization posterior mean of the combined likelihood.
    pub probability_raw: f64,
    /// Std of the Monte Carlo posterior, scaled by the same normalizer.
    pub prob_std: f64,
    /// 5th percentile of the Monte Carlo posterior (normalized).
    pub prob_ci_lo: f64,
    /// 95th percentile of the Monte Carlo posterior (normalized).
    pub prob_ci_hi: f64,

    /// Evidence-volume confidence in [0, 1). Independent of match polarity.
    pub confidence: f64,
    /// Count of discrete observations applied across both channels.
    pub evidence_n: usize,

    pub probability_label: ProbabilityLabel,
    pub confidence_label: ConfidenceLabel,
    /// True in the high-probability / low-confidence quadrant.
    pub risk_flag: bool,
}

/// One disease's movement caused by a single applied answer.
///
/// Deltas are true before/after snapshots, not estimates — the updater
/// evaluates the full candidate set on both sides of the mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDelta {
    pub disease: String,
    /// Change in unnormalized posterior mean.
    pub delta_prob_raw: f64,
    /// Change in confidence.
    pub delta_conf: f64,
    /// Whether the targeted phrase belongs to this disease's profile.
    pub in_profile: bool,
    /// Incidentally-mentioned phrases that also updated this disease.
    pub extras: Vec<String>,
}
