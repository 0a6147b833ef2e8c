//! Semantic phrase matching over an injected similarity oracle.
//!
//! The oracle is whatever produces a [0, 1] similarity between two phrases
//! (in production an embedding model behind a network call; in tests a
//! lookup table). This module owns only the banding of raw similarity into
//! match credit, with the calibrated cutoffs from the deployed system.

use tracing::warn;

use dxrank_contracts::error::DxrankResult;
use dxrank_core::{MatchOutcome, PhraseMatcher};

/// Similarity at or above this is a confident match (1.0 credit).
pub const STRONG_MATCH: f64 = 0.82;
/// Similarity at or above this (but below [`STRONG_MATCH`]) is an ambiguous
/// match (0.5 credit). Below it, the phrase pair is treated as silence.
pub const PARTIAL_MATCH: f64 = 0.58;

/// Produces a similarity score in [0, 1] for a pair of phrases.
///
/// Implementations must be deterministic for a fixed pair; the ranking
/// reproducibility guarantee extends through the oracle.
pub trait SimilarityOracle: Send + Sync {
    fn similarity(&self, reported: &str, reference: &str) -> DxrankResult<f64>;
}

/// Bands oracle similarities into match credit per reference phrase.
///
/// The best similarity across all reported phrases decides each reference
/// phrase's band. Below [`PARTIAL_MATCH`] nothing is recorded at all:
/// nothing the patient said resembles the phrase, which is absence of
/// mention, not evidence of absence. Confident misses are the business of
/// negation-detecting front-ends, never of similarity banding.
pub struct SemanticMatcher {
    oracle: Box<dyn SimilarityOracle>,
}

impl SemanticMatcher {
    pub fn new(oracle: Box<dyn SimilarityOracle>) -> Self {
        Self { oracle }
    }
}

impl PhraseMatcher for SemanticMatcher {
    /// An oracle error on any pair degrades the whole channel to silence
    /// with a warning: a half-scored channel would skew the ranking worse
    /// than an unobserved one.
    fn match_phrases(
        &self,
        reported: &[String],
        reference: &[String],
    ) -> DxrankResult<MatchOutcome> {
        let mut outcome = MatchOutcome::silent();

        for phrase in reference {
            let mut best: f64 = 0.0;
            for r in reported {
                match self.oracle.similarity(r, phrase) {
                    Ok(score) => best = best.max(score),
                    Err(e) => {
                        warn!(reference = %phrase, error = %e, "similarity oracle failed; channel treated as unobserved");
                        return Ok(MatchOutcome::silent());
                    }
                }
            }
            if best >= STRONG_MATCH {
                outcome.effective_match += 1.0;
                outcome.observed += 1;
            } else if best >= PARTIAL_MATCH {
                outcome.effective_match += 0.5;
                outcome.observed += 1;
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxrank_contracts::error::DxrankError;
    use std::collections::HashMap;

    /// Lookup-table oracle keyed on (reported, reference).
    struct TableOracle {
        table: HashMap<(String, String), f64>,
    }

    impl TableOracle {
        fn new(entries: &[(&str, &str, f64)]) -> Self {
            Self {
                table: entries
                    .iter()
                    .map(|&(a, b, s)| ((a.to_string(), b.to_string()), s))
                    .collect(),
            }
        }
    }

    impl SimilarityOracle for TableOracle {
        fn similarity(&self, reported: &str, reference: &str) -> DxrankResult<f64> {
            Ok(*self
                .table
                .get(&(reported.to_string(), reference.to_string()))
                .unwrap_or(&0.0))
        }
    }

    struct FailingOracle;

    impl SimilarityOracle for FailingOracle {
        fn similarity(&self, _: &str, _: &str) -> DxrankResult<f64> {
            Err(DxrankError::CollaboratorFailure {
                collaborator: "similarity_oracle".to_string(),
                reason: "embedding backend unreachable".to_string(),
            })
        }
    }

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strong_similarity_scores_full_credit() {
        let matcher = SemanticMatcher::new(Box::new(TableOracle::new(&[
            ("burning up", "fever", 0.88),
        ])));
        let outcome = matcher
            .match_phrases(&phrases(&["burning up"]), &phrases(&["fever"]))
            .unwrap();
        assert_eq!(outcome.effective_match, 1.0);
        assert_eq!(outcome.observed, 1);
    }

    #[test]
    fn partial_band_scores_half_credit() {
        let matcher = SemanticMatcher::new(Box::new(TableOracle::new(&[
            ("warm", "fever", 0.65),
        ])));
        let outcome = matcher
            .match_phrases(&phrases(&["warm"]), &phrases(&["fever"]))
            .unwrap();
        assert_eq!(outcome.effective_match, 0.5);
        assert_eq!(outcome.observed, 1);
    }

    #[test]
    fn threshold_boundaries_are_inclusive() {
        let matcher = SemanticMatcher::new(Box::new(TableOracle::new(&[
            ("a", "fever", STRONG_MATCH),
            ("b", "cough", PARTIAL_MATCH),
        ])));
        let strong = matcher
            .match_phrases(&phrases(&["a"]), &phrases(&["fever"]))
            .unwrap();
        assert_eq!(strong.effective_match, 1.0);

        let partial = matcher
            .match_phrases(&phrases(&["b"]), &phrases(&["cough"]))
            .unwrap();
        assert_eq!(partial.effective_match, 0.5);
    }

    #[test]
    fn below_partial_threshold_is_silence() {
        let matcher = SemanticMatcher::new(Box::new(TableOracle::new(&[
            ("knee pain", "fever", 0.41),
        ])));
        let outcome = matcher
            .match_phrases(&phrases(&["knee pain"]), &phrases(&["fever"]))
            .unwrap();
        assert_eq!(outcome, MatchOutcome::silent());
    }

    #[test]
    fn best_reported_phrase_decides_the_band() {
        let matcher = SemanticMatcher::new(Box::new(TableOracle::new(&[
            ("warm", "fever", 0.60),
            ("burning up", "fever", 0.90),
        ])));
        let outcome = matcher
            .match_phrases(&phrases(&["warm", "burning up"]), &phrases(&["fever"]))
            .unwrap();
        assert_eq!(outcome.effective_match, 1.0);
        assert_eq!(outcome.observed, 1);
    }

    #[test]
    fn credits_accumulate_across_reference_phrases() {
        let matcher = SemanticMatcher::new(Box::new(TableOracle::new(&[
            ("burning up", "fever", 0.90),
            ("hacking", "cough", 0.70),
        ])));
        let outcome = matcher
            .match_phrases(
                &phrases(&["burning up", "hacking"]),
                &phrases(&["fever", "cough", "chills"]),
            )
            .unwrap();
        assert_eq!(outcome.effective_match, 1.5);
        assert_eq!(outcome.observed, 2);
    }

    #[test]
    fn oracle_failure_degrades_to_silence() {
        let matcher = SemanticMatcher::new(Box::new(FailingOracle));
        let outcome = matcher
            .match_phrases(&phrases(&["fever"]), &phrases(&["fever"]))
            .unwrap();
        assert_eq!(outcome, MatchOutcome::silent());
    }

    #[test]
    fn never_emits_a_confident_miss() {
        let matcher = SemanticMatcher::new(Box::new(TableOracle::new(&[
            ("burning up", "fever", 0.90),
        ])));
        let outcome = matcher
            .match_phrases(
                &phrases(&["burning up"]),
                &phrases(&["fever", "cough", "chills"]),
            )
            .unwrap();
        assert_eq!(outcome.effective_miss, 0.0);
    }
}
