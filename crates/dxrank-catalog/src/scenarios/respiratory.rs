//! Scenario 1: Respiratory presentation.
//!
//! A winter-season patient reports fever, chills, cough, and tiredness.
//! The initial ranking is ambiguous between Influenza and Common Cold; the
//! interview answers (body aches, headache, appetite loss, no runny nose,
//! no shortness of breath) pull Influenza clear of the field.

use dxrank_contracts::error::DxrankResult;

use super::{render_deltas, render_ranking, start_session, TOP_K};

const INTAKE: &str = "high fever and chills, bad cough, very tired";
const RISKS: &[&str] = &["no flu vaccine", "winter season"];

const INTERVIEW: &[(&str, &str)] = &[
    ("muscle aches", "yes, my whole body aches a lot"),
    ("headache", "yes, pounding and severe all day"),
    ("loss of appetite", "yes, i have barely eaten"),
    ("runny nose", "no, not really"),
    ("shortness of breath", "no"),
];

/// Run Scenario 1 end to end, printing each phase.
pub fn run_scenario() -> DxrankResult<()> {
    println!("=== Scenario 1: Respiratory presentation ===");
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

    println!("  Scenario 1 complete.");
    println!();
    Ok(())
}
