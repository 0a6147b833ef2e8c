//! Scenario 2: Cardiac presentation.
//!
//! A patient with a heavy vascular risk load (smoking, hypertension, high
//! cholesterol) reports exertional chest pain. The interview confirms
//! radiating arm pain and intermittent palpitations and rules out fever,
//! which separates Coronary Artery Disease from the infectious mimics.

use dxrank_contracts::error::DxrankResult;

use super::{render_deltas, render_ranking, start_session, TOP_K};

const INTAKE: &str = "chest pain and shortness of breath, sweating";
const RISKS: &[&str] = &["smoking", "hypertension", "high cholesterol"];

const INTERVIEW: &[(&str, &str)] = &[
    ("radiating arm pain", "yes, it spreads down my left arm"),
    ("palpitations", "sometimes, it comes and goes"),
    ("high fever", "no, no fever at all"),
];

/// Run Scenario 2 end to end, printing each phase.
pub fn run_scenario() -> DxrankResult<()> {
    println!("=== Scenario 2: Cardiac presentation ===");
    println!();
    println!("  Intake: \"{}\"", INTAKE);
    println!("  Risk factors: {}", RISKS.join(", "));
    println!();

    let (initial, mut updater) = start_session(INTAKE, RISKS)?;
    render_ranking("Initial ranking:", &initial);

    for (question, answer) in INTERVIEW {
        let (_, deltas) = updater.apply_answer(Some(question), answer)?;
        render_deltas(question, answer, &deltas);
    }

    let final_ranking = updater.current_candidates(TOP_K)?;
    render_ranking("Final ranking:", &final_ranking);

    println!("  Scenario 2 complete.");
    println!();
    Ok(())
}
