//! The candidate scorer: free-text evidence → ranked probability distribution.
//!
//! One `score()` call processes the *entire* catalog in a single pass — the
//! final probability of any disease depends on every other disease's raw
//! likelihood through the cross-normalization step, so partial scoring is
//! never meaningful.
//!
//! Probability and confidence are independent axes by design:
//!
//!   probability — what the evidence *says* (match quality, weighted Beta
//!                 posterior mixed with the prevalence prior)
//!   confidence  — how much evidence we *have* (posterior variance of the
//!                 actively observed phrases, regardless of polarity)
//!
//! A disease can be high-probability/low-confidence — few phrases reported
//! but all matching. That quadrant carries the risk flag.

use tracing::{debug, warn};

use dxrank_contracts::{
    candidate::{
        risk_flag, CandidateDiagnosis, ChannelEvidence, ConfidenceLabel, ProbabilityLabel,
    },
    error::DxrankResult,
    profile::DiseaseProfile,
};
use dxrank_evidence::{
    combined_likelihood, disease_seed, normalized_confidence, BetaParams, PosteriorSummary,
    MC_SAMPLES, MC_SEED, W_RISK, W_SYMPTOMS,
};

use crate::traits::{MatchOutcome, PhraseMatcher};

/// Monte Carlo sampling configuration shared by scorer and updater.
///
/// The seed is fixed by default on purpose: rankings must be reproducible
/// run to run, and the updater's delta log depends on repeated passes
/// drawing identical samples per disease.
#[derive(Debug, Clone, Copy)]
pub struct McConfig {
    pub samples: usize,
    pub seed: u64,
}

impl Default for McConfig {
    fn default() -> Self {
        Self { samples: MC_SAMPLES, seed: MC_SEED }
    }
}

/// Scores the full disease catalog against one session's reported phrases.
///
/// Owns a read-only copy of the catalog and the injected phrase-matching
/// strategy. Stateless across calls — all session state lives in the
/// `SequentialUpdater`.
pub struct CandidateScorer {
    catalog: Vec<DiseaseProfile>,
    matcher: Box<dyn PhraseMatcher>,
    mc: McConfig,
}

impl CandidateScorer {
    /// Build a scorer over `catalog` using the given matching strategy.
    pub fn new(catalog: Vec<DiseaseProfile>, matcher: Box<dyn PhraseMatcher>) -> Self {
        Self { catalog, matcher, mc: McConfig::default() }
    }

    /// Override the Monte Carlo sample count and seed (tests, calibration).
    pub fn with_sampling(mut self, samples: usize, seed: u64) -> Self {
        self.mc = McConfig { samples, seed };
        self
    }

    /// The catalog this scorer ranks against.
    pub fn catalog(&self) -> &[DiseaseProfile] {
        &self.catalog
    }

    /// Rank every catalog disease against the reported phrases.
    ///
    /// `reported_symptoms` / `reported_risks` are normalized phrase lists
    /// (the output of tokenizing the patient's free text). Returns the top
    /// `top_k` candidates, probabilities normalized to sum to 1.0 across
    /// the *full* candidate set before truncation.
    ///
    /// Degenerate inputs follow documented fallbacks: an empty catalog
    /// yields an empty ranking, a failing matcher degrades that disease to
    /// zero evidence, and a zero normalization sum substitutes 1.0.
    pub fn score(
        &self,
        reported_symptoms: &[String],
        reported_risks: &[String],
        top_k: usize,
    ) -> DxrankResult<Vec<CandidateDiagnosis>> {
        debug!(
            diseases = self.catalog.len(),
            symptom_phrases = reported_symptoms.len(),
            risk_phrases = reported_risks.len(),
            "scoring pass starting"
        );

        let mut candidates = Vec::with_capacity(self.catalog.len());

        for (index, profile) in self.catalog.iter().enumerate() {
            let sym = self.match_channel(reported_symptoms, &profile.symptoms, &profile.name);
            let rf = self.match_channel(reported_risks, &profile.risk_factors, &profile.name);

            // Likelihood: every unmatched profile phrase counts against the
            // disease (total-based miss formula).
            let sym_likelihood = BetaParams::from_counts(sym.effective_match, profile.symptoms.len());
            let rf_likelihood = BetaParams::from_counts(rf.effective_match, profile.risk_factors.len());

            let summary = combined_likelihood(
                sym_likelihood,
                rf_likelihood,
                profile.base_prevalence,
                self.mc.samples,
                disease_seed(self.mc.seed, index),
            )?;

            // Confidence: actively observed phrases only. A profile phrase
            // nobody mentioned moves nothing here.
            let confidence = normalized_confidence(
                BetaParams::from_observed(sym.effective_match, sym.observed),
                BetaParams::from_observed(rf.effective_match, rf.observed),
                W_SYMPTOMS,
                W_RISK,
            );

            candidates.push(raw_candidate(
                &profile.name,
                channel_evidence(sym, profile.symptoms.len()),
                channel_evidence(rf, profile.risk_factors.len()),
                profile.base_prevalence,
                summary,
                confidence,
                sym.observed + rf.observed,
            ));
        }

        normalize_and_rank(&mut candidates);
        candidates.truncate(top_k);
        Ok(candidates)
    }

    fn match_channel(
        &self,
        reported: &[String],
        reference: &[String],
        disease: &str,
    ) -> MatchOutcome {
        match self.matcher.match_phrases(reported, reference) {
            Ok(outcome) => outcome,
            Err(e) => {
                // Collaborator failure: degrade this disease to zero
                // evidence rather than aborting the whole ranking.
                warn!(disease = %disease, error = %e, "phrase matcher failed; treating channel as unobserved");
                MatchOutcome::silent()
            }
        }
    }
}

fn channel_evidence(outcome: MatchOutcome, total: usize) -> ChannelEvidence {
    ChannelEvidence {
        effective_match: outcome.effective_match,
        effective_miss: outcome.effective_miss,
        observed: outcome.observed,
        total,
    }
}

/// Assemble a candidate with pre-normalization values. Labels are filled
/// with placeholders and rewritten by `normalize_and_rank`.
pub(crate) fn raw_candidate(
    disease: &str,
    symptoms: ChannelEvidence,
    risk_factors: ChannelEvidence,
    prior: f64,
    summary: PosteriorSummary,
    confidence: f64,
    evidence_n: usize,
) -> CandidateDiagnosis {
    CandidateDiagnosis {
        disease: disease.to_string(),
        symptoms,
        risk_factors,
        prior,
        probability: 0.0,
        probability_raw: summary.mean,
        prob_std: summary.std,
        prob_ci_lo: summary.ci_lo,
        prob_ci_hi: summary.ci_hi,
        confidence,
        evidence_n,
        probability_label: ProbabilityLabel::VeryLow,
        confidence_label: ConfidenceLabel::VeryLow,
        risk_flag: false,
    }
}

/// Cross-normalize raw likelihoods into a probability distribution, band
/// the labels, and sort by probability (confidence breaks ties).
///
/// The CI bounds and std are scaled by the same divisor so the interval
/// stays interpretable on the normalized scale.
pub(crate) fn normalize_and_rank(candidates: &mut Vec<CandidateDiagnosis>) {
    let mut total_raw: f64 = candidates.iter().map(|c| c.probability_raw).sum();
    if total_raw <= 0.0 {
        total_raw = 1.0;
    }

    for c in candidates.iter_mut() {
        c.probability = c.probability_raw / total_raw;
        c.prob_ci_lo /= total_raw;
        c.prob_ci_hi /= total_raw;
        c.prob_std /= total_raw;
        c.probability_label = ProbabilityLabel::from_probability(c.probability);
        c.confidence_label = ConfidenceLabel::from_confidence(c.confidence);
        c.risk_flag = risk_flag(c.probability, c.confidence);
    }

    candidates.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxrank_contracts::error::DxrankError;

    /// Test matcher: exact normalized-equality matching, no partial credit.
    struct ExactMatcher;

    impl PhraseMatcher for ExactMatcher {
        fn match_phrases(
            &self,
            reported: &[String],
            reference: &[String],
        ) -> DxrankResult<MatchOutcome> {
            let mut outcome = MatchOutcome::silent();
            for phrase in reference {
                if reported.iter().any(|r| r == phrase) {
                    outcome.effective_match += 1.0;
                    outcome.observed += 1;
                }
            }
            Ok(outcome)
        }
    }

    struct FailingMatcher;

    impl PhraseMatcher for FailingMatcher {
        fn match_phrases(&self, _: &[String], _: &[String]) -> DxrankResult<MatchOutcome> {
            Err(DxrankError::CollaboratorFailure {
                collaborator: "phrase_matcher".to_string(),
                reason: "backend unreachable".to_string(),
            })
        }
    }

    fn flu_only_catalog() -> Vec<DiseaseProfile> {
        vec![DiseaseProfile {
            name: "Flu".to_string(),
            symptoms: vec!["fever".to_string(), "cough".to_string()],
            risk_factors: vec![],
            base_prevalence: 0.10,
        }]
    }

    fn respiratory_catalog() -> Vec<DiseaseProfile> {
        vec![
            DiseaseProfile {
                name: "Flu".to_string(),
                symptoms: vec!["fever".to_string(), "cough".to_string(), "chills".to_string()],
                risk_factors: vec!["no flu vaccine".to_string()],
                base_prevalence: 0.10,
            },
            DiseaseProfile {
                name: "Common Cold".to_string(),
                symptoms: vec!["runny nose".to_string(), "sneezing".to_string(), "cough".to_string()],
                risk_factors: vec!["winter season".to_string()],
                base_prevalence: 0.30,
            },
            DiseaseProfile {
                name: "Pneumonia".to_string(),
                symptoms: vec![
                    "fever".to_string(),
                    "cough".to_string(),
                    "chest pain".to_string(),
                    "rapid breathing".to_string(),
                ],
                risk_factors: vec!["smoking".to_string(), "elderly".to_string()],
                base_prevalence: 0.04,
            },
        ]
    }

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ── Single-disease scenarios ─────────────────────────────────────────────

    #[test]
    fn full_match_single_disease_hits_probability_one() {
        let scorer = CandidateScorer::new(flu_only_catalog(), Box::new(ExactMatcher));
        let ranked = scorer
            .score(&phrases(&["fever", "cough"]), &[], 10)
            .unwrap();

        assert_eq!(ranked.len(), 1);
        let flu = &ranked[0];
        // 2 exact matches out of 2 references → Beta(3, 1) on the symptom channel.
        assert_eq!(flu.symptoms.effective_match, 2.0);
        assert_eq!(flu.symptoms.observed, 2);
        assert_eq!(flu.symptoms.total, 2);
        // Only disease in the catalog: normalization pins probability to 1.
        assert_eq!(flu.probability, 1.0);
        assert!(flu.probability_raw > 0.5, "Beta(3,1) mean 0.75 should dominate");
        assert!(flu.confidence > 0.0);
        assert_eq!(flu.evidence_n, 2);
    }

    #[test]
    fn no_mention_single_disease_falls_back_to_prior() {
        let scorer = CandidateScorer::new(flu_only_catalog(), Box::new(ExactMatcher));
        let ranked = scorer
            .score(&phrases(&["knee pain"]), &[], 10)
            .unwrap();

        let flu = &ranked[0];
        assert_eq!(flu.symptoms.effective_match, 0.0);
        assert_eq!(flu.symptoms.observed, 0);
        // Confidence sits exactly at zero on the uninformative prior.
        assert_eq!(flu.confidence, 0.0);
        assert_eq!(flu.probability, 1.0);
        // Likelihood channel is Beta(1, 3) (mean 0.25); combined with the
        // uniform risk channel and the noisy prior the raw mean lands well
        // below the full-match case.
        assert!(flu.probability_raw < 0.35);
    }

    // ── Normalization ────────────────────────────────────────────────────────

    #[test]
    fn probabilities_sum_to_one_across_catalog() {
        let scorer = CandidateScorer::new(respiratory_catalog(), Box::new(ExactMatcher));
        let ranked = scorer
            .score(
                &phrases(&["fever", "cough", "chest pain"]),
                &phrases(&["smoking"]),
                10,
            )
            .unwrap();

        assert_eq!(ranked.len(), 3);
        let sum: f64 = ranked.iter().map(|c| c.probability).sum();
        assert!((sum - 1.0).abs() < 1e-6, "probabilities sum to {}", sum);
        for c in &ranked {
            assert!(c.prob_ci_lo <= c.probability + 1e-9);
            assert!(c.prob_ci_hi >= c.probability - 1e-9);
        }
    }

    #[test]
    fn matched_disease_outranks_unmatched() {
        let scorer = CandidateScorer::new(respiratory_catalog(), Box::new(ExactMatcher));
        let ranked = scorer
            .score(
                &phrases(&["fever", "cough", "chest pain", "rapid breathing"]),
                &phrases(&["smoking", "elderly"]),
                10,
            )
            .unwrap();

        assert_eq!(ranked[0].disease, "Pneumonia");
    }

    // ── Determinism ──────────────────────────────────────────────────────────

    #[test]
    fn identical_inputs_produce_bit_identical_rankings() {
        let symptoms = phrases(&["fever", "cough"]);
        let risks = phrases(&["smoking"]);

        let run = || {
            let scorer = CandidateScorer::new(respiratory_catalog(), Box::new(ExactMatcher));
            scorer.score(&symptoms, &risks, 10).unwrap()
        };
        let a = run();
        let b = run();

        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.disease, y.disease);
            assert_eq!(x.probability, y.probability);
            assert_eq!(x.prob_ci_lo, y.prob_ci_lo);
            assert_eq!(x.prob_ci_hi, y.prob_ci_hi);
        }
    }

    // ── Silence is not miss ──────────────────────────────────────────────────

    #[test]
    fn unmentioned_profile_phrase_does_not_lower_confidence() {
        let short = vec![DiseaseProfile {
            name: "A".to_string(),
            symptoms: vec!["fever".to_string()],
            risk_factors: vec![],
            base_prevalence: 0.10,
        }];
        let long = vec![DiseaseProfile {
            name: "A".to_string(),
            symptoms: vec!["fever".to_string(), "rash".to_string(), "vertigo".to_string()],
            risk_factors: vec![],
            base_prevalence: 0.10,
        }];

        let reported = phrases(&["fever"]);
        let short_ranked = CandidateScorer::new(short, Box::new(ExactMatcher))
            .score(&reported, &[], 10)
            .unwrap();
        let long_ranked = CandidateScorer::new(long, Box::new(ExactMatcher))
            .score(&reported, &[], 10)
            .unwrap();

        // Same observed evidence → identical confidence, regardless of how
        // many profile phrases were never asked about.
        assert_eq!(short_ranked[0].confidence, long_ranked[0].confidence);
        assert_eq!(long_ranked[0].symptoms.observed, 1);
        assert_eq!(long_ranked[0].symptoms.effective_miss, 0.0);
    }

    // ── Degradation & degenerate inputs ──────────────────────────────────────

    #[test]
    fn failing_matcher_degrades_to_prior_only_ranking() {
        let scorer = CandidateScorer::new(respiratory_catalog(), Box::new(FailingMatcher));
        let ranked = scorer
            .score(&phrases(&["fever"]), &[], 10)
            .unwrap();

        // All diseases still ranked, driven by priors alone.
        assert_eq!(ranked.len(), 3);
        let sum: f64 = ranked.iter().map(|c| c.probability).sum();
        assert!((sum - 1.0).abs() < 1e-6);
        for c in &ranked {
            assert_eq!(c.confidence, 0.0);
            assert_eq!(c.evidence_n, 0);
        }
    }

    #[test]
    fn empty_catalog_yields_empty_ranking() {
        let scorer = CandidateScorer::new(vec![], Box::new(ExactMatcher));
        let ranked = scorer.score(&phrases(&["fever"]), &[], 10).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn top_k_truncates_after_normalization() {
        let scorer = CandidateScorer::new(respiratory_catalog(), Box::new(ExactMatcher));
        let ranked = scorer.score(&phrases(&["cough"]), &[], 2).unwrap();
        assert_eq!(ranked.len(), 2);
        // Truncation happens after normalizing over all three diseases, so
        // the surviving two sum to less than 1.
        let sum: f64 = ranked.iter().map(|c| c.probability).sum();
        assert!(sum < 1.0);
    }

    // ── Ranking order ────────────────────────────────────────────────────────

    #[test]
    fn ties_break_by_descending_confidence() {
        use dxrank_contracts::candidate::ChannelEvidence;
        use dxrank_evidence::PosteriorSummary;

        let summary = PosteriorSummary { mean: 0.4, std: 0.1, ci_lo: 0.2, ci_hi: 0.6 };
        let mut candidates = vec![
            raw_candidate("low-conf", ChannelEvidence::default(), ChannelEvidence::default(), 0.1, summary, 0.2, 1),
            raw_candidate("high-conf", ChannelEvidence::default(), ChannelEvidence::default(), 0.1, summary, 0.8, 5),
        ];
        normalize_and_rank(&mut candidates);

        assert_eq!(candidates[0].disease, "high-conf");
        assert_eq!(candidates[1].disease, "low-conf");
    }
}
