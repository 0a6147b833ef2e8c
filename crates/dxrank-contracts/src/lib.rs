//! # dxrank-contracts
//!
//! Shared types, contracts, and error definitions for the DXRANK engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod candidate;
pub mod error;
pub mod observation;
pub mod profile;
pub mod session;

#[cfg(test)]
mod tests {
    use super::*;
    use candidate::{risk_flag, ConfidenceLabel, ProbabilityLabel};
    use error::DxrankError;
    use observation::{Observation, Polarity};
    use profile::DiseaseProfile;
    use session::SessionId;

    fn profile(name: &str, prevalence: f64) -> DiseaseProfile {
        DiseaseProfile {
            name: name.to_string(),
            symptoms: vec!["fever".to_string(), "cough".to_string()],
            risk_factors: vec!["smoking".to_string()],
            base_prevalence: prevalence,
        }
    }

    // ── DiseaseProfile validation ────────────────────────────────────────────

    #[test]
    fn profile_validates_when_well_formed() {
        assert!(profile("Influenza", 0.10).validate().is_ok());
    }

    #[test]
    fn profile_rejects_blank_name() {
        let p = profile("  ", 0.10);
        assert!(matches!(
            p.validate(),
            Err(DxrankError::ConfigError { .. })
        ));
    }

    #[test]
    fn profile_rejects_empty_symptom_list() {
        let mut p = profile("Influenza", 0.10);
        p.symptoms.clear();
        assert!(p.validate().is_err());
    }

    #[test]
    fn profile_rejects_prevalence_at_bounds() {
        for prevalence in [0.0, 1.0, -0.2, 1.5] {
            let p = profile("Influenza", prevalence);
            assert!(
                p.validate().is_err(),
                "prevalence {} should be rejected",
                prevalence
            );
        }
    }

    // ── Observation strength clamping ────────────────────────────────────────

    #[test]
    fn observation_clamps_strength_into_contract_range() {
        let too_high = Observation::new("fever", Polarity::Yes, 3.7);
        assert_eq!(too_high.strength, 2.0);

        let negative = Observation::new("fever", Polarity::No, -0.5);
        assert_eq!(negative.strength, 0.0);

        let in_range = Observation::new("fever", Polarity::Mild, 0.65);
        assert_eq!(in_range.strength, 0.65);
    }

    #[test]
    fn polarity_serde_uses_snake_case() {
        let json = serde_json::to_string(&Polarity::Unsure).unwrap();
        assert_eq!(json, "\"unsure\"");
        let back: Polarity = serde_json::from_str("\"skip\"").unwrap();
        assert_eq!(back, Polarity::Skip);
    }

    // ── Label thresholds (exact contract values) ─────────────────────────────

    #[test]
    fn probability_label_threshold_edges() {
        assert_eq!(ProbabilityLabel::from_probability(0.20), ProbabilityLabel::VeryHigh);
        assert_eq!(ProbabilityLabel::from_probability(0.199), ProbabilityLabel::High);
        assert_eq!(ProbabilityLabel::from_probability(0.10), ProbabilityLabel::High);
        assert_eq!(ProbabilityLabel::from_probability(0.05), ProbabilityLabel::Moderate);
        assert_eq!(ProbabilityLabel::from_probability(0.02), ProbabilityLabel::Low);
        assert_eq!(ProbabilityLabel::from_probability(0.019), ProbabilityLabel::VeryLow);
    }

    #[test]
    fn confidence_label_threshold_edges() {
        assert_eq!(ConfidenceLabel::from_confidence(0.80), ConfidenceLabel::High);
        assert_eq!(ConfidenceLabel::from_confidence(0.50), ConfidenceLabel::Moderate);
        assert_eq!(ConfidenceLabel::from_confidence(0.25), ConfidenceLabel::Low);
        assert_eq!(ConfidenceLabel::from_confidence(0.249), ConfidenceLabel::VeryLow);
    }

    #[test]
    fn risk_flag_marks_high_prob_low_conf_quadrant() {
        assert!(risk_flag(0.08, 0.49));
        assert!(!risk_flag(0.079, 0.49));
        assert!(!risk_flag(0.08, 0.50));
        assert!(!risk_flag(0.01, 0.01));
    }

    #[test]
    fn labels_display_human_readable() {
        assert_eq!(ProbabilityLabel::VeryHigh.to_string(), "Very High");
        assert_eq!(ConfidenceLabel::VeryLow.to_string(), "Very Low");
    }

    // ── SessionId ────────────────────────────────────────────────────────────

    #[test]
    fn session_id_new_produces_unique_values() {
        let ids: Vec<SessionId> = (0..100).map(|_| SessionId::new()).collect();
        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── DxrankError display messages ─────────────────────────────────────────

    #[test]
    fn error_collaborator_failure_display() {
        let err = DxrankError::CollaboratorFailure {
            collaborator: "phrase_matcher".to_string(),
            reason: "embedding backend unreachable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("phrase_matcher"));
        assert!(msg.contains("embedding backend unreachable"));
    }

    #[test]
    fn error_invalid_state_display() {
        let err = DxrankError::InvalidState {
            reason: "updater constructed with zero candidates".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid state"));
        assert!(msg.contains("zero candidates"));
    }

    #[test]
    fn error_config_error_display() {
        let err = DxrankError::ConfigError {
            reason: "duplicate disease name 'Influenza'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("Influenza"));
    }
}
