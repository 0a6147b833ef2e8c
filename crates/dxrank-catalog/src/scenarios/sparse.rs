//! Scenario 3: Sparse evidence.
//!
//! The patient offers almost nothing: "tired all the time" matches no
//! catalog phrase verbatim, the first question is skipped and the second
//! answered with a shrug. The point of this scenario is what does *not*
//! happen: probabilities stay prior-driven, confidence stays near zero,
//! and high-prevalence diseases carry the low-confidence risk flag.

use dxrank_contracts::error::DxrankResult;

use super::{render_deltas, render_ranking, start_session, TOP_K};

const INTAKE: &str = "tired all the time";
const RISKS: &[&str] = &[];

const INTERVIEW: &[(&str, &str)] = &[
    ("fatigue", "yes, always exhausted"),
    ("high fever", "skip"),
    ("sleep disturbance", "not sure, hard to say"),
];

/// Run Scenario 3 end to end, printing each phase.
pub fn run_scenario() -> DxrankResult<()> {
    println!("=== Scenario 3: Sparse evidence ===");
    println!();
    println!("  Intake: \"{}\"", INTAKE);
    println!("  Risk factors: (none reported)");
    println!();

    let (initial, mut updater) = start_session(INTAKE, RISKS)?;
    render_ranking("Initial ranking:", &initial);

    for (question, answer) in INTERVIEW {
        let (_, deltas) = updater.apply_answer(Some(question), answer)?;
        render_deltas(question, answer, &deltas);
    }

    let final_ranking = updater.current_candidates(TOP_K)?;
    render_ranking("Final ranking:", &final_ranking);

    println!("  Scenario 3 complete.");
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_intake_leaves_confidence_at_zero() {
        let (initial, _) = start_session(INTAKE, RISKS).unwrap();
        for c in &initial {
            assert_eq!(c.confidence, 0.0);
            assert_eq!(c.evidence_n, 0);
        }
    }

    #[test]
    fn prior_driven_ranking_carries_risk_flags() {
        let (initial, _) = start_session(INTAKE, RISKS).unwrap();
        // With zero evidence, anything probable enough to matter is exactly
        // the high-probability/low-confidence quadrant the flag marks.
        assert!(initial
            .iter()
            .filter(|c| c.probability >= 0.08)
            .all(|c| c.risk_flag));
    }

    #[test]
    fn skipped_question_changes_nothing() {
        let (_, mut updater) = start_session(INTAKE, RISKS).unwrap();
        let ranking_before = updater.current_candidates(TOP_K).unwrap();

        let (_, deltas) = updater.apply_answer(Some("high fever"), "skip").unwrap();
        assert!(deltas.is_empty());

        let ranking_after = updater.current_candidates(TOP_K).unwrap();
        for (a, b) in ranking_before.iter().zip(ranking_after.iter()) {
            assert_eq!(a.disease, b.disease);
            assert_eq!(a.probability, b.probability);
        }
    }

    #[test]
    fn unsure_answer_adds_volume_without_direction() {
        let (_, mut updater) = start_session(INTAKE, RISKS).unwrap();
        let (_, deltas) = updater
            .apply_answer(Some("sleep disturbance"), "not sure, hard to say")
            .unwrap();

        // Anxiety Disorder and Depression both list the phrase.
        let anxiety = deltas.iter().find(|d| d.disease == "Anxiety Disorder").unwrap();
        assert_eq!(anxiety.delta_prob_raw, 0.0);
        assert_eq!(anxiety.delta_conf, 0.0);
        assert_eq!(updater.state("Anxiety Disorder").unwrap().evidence_n, 1);
    }

    #[test]
    fn one_affirmed_symptom_spreads_across_fatigue_diseases() {
        let (_, mut updater) = start_session(INTAKE, RISKS).unwrap();
        let (_, deltas) = updater
            .apply_answer(Some("fatigue"), "yes, always exhausted")
            .unwrap();

        // "fatigue" appears in many profiles; every one of them moves up.
        assert!(deltas.len() >= 8);
        assert!(deltas.iter().all(|d| d.delta_prob_raw > 0.0));
    }
}
