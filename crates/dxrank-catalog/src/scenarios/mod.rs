//! Scripted interview scenarios over the bundled catalog.
//!
//! Each scenario is a self-contained module wiring real DXRANK components
//! (lexical matcher, candidate scorer, sequential updater, keyword answer
//! parser) end to end: intake free text → initial ranking → answers →
//! delta log → final ranking.

pub mod cardiac;
pub mod respiratory;
pub mod sparse;

use dxrank_contracts::{
    candidate::{CandidateDiagnosis, UpdateDelta},
    error::DxrankResult,
    profile::DiseaseProfile,
};
use dxrank_core::{CandidateScorer, SequentialUpdater};
use dxrank_match::lexical::{tokenize, LexicalMatcher};

use crate::data::{bundled_catalog, known_phrases};
use crate::parser::KeywordAnswerParser;

/// Candidates shown per ranking table.
const TOP_K: usize = 5;

/// Build the reference scorer over the bundled catalog.
pub fn reference_scorer() -> CandidateScorer {
    CandidateScorer::new(bundled_catalog(), Box::new(LexicalMatcher::new()))
}

/// Score intake free text and seed an updater for the interview phase.
pub fn start_session(
    intake: &str,
    reported_risks: &[&str],
) -> DxrankResult<(Vec<CandidateDiagnosis>, SequentialUpdater)> {
    let profiles: Vec<DiseaseProfile> = bundled_catalog();
    let scorer = reference_scorer();

    let symptoms = tokenize(intake);
    let risks: Vec<String> = reported_risks.iter().map(|s| s.to_string()).collect();

    let initial = scorer.score(&symptoms, &risks, usize::MAX)?;
    let parser = KeywordAnswerParser::new(known_phrases());
    let updater = SequentialUpdater::new(&initial, &profiles, Box::new(parser))?;

    let mut shown = initial;
    shown.truncate(TOP_K);
    Ok((shown, updater))
}

// ── Rendering ────────────────────────────────────────────────────────────────

fn bar(value: f64, width: usize) -> String {
    let filled = ((value.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Print one ranked candidate table.
pub fn render_ranking(title: &str, candidates: &[CandidateDiagnosis]) {
    println!("  {}", title);
    println!(
        "  {:<32} {:>6}  {:<12} {:<10} {:>5}  {:<12} {:<9} {:>4}  {}",
        "disease", "prob", "", "label", "conf", "", "label", "n", "flag"
    );
    for c in candidates {
        println!(
            "  {:<32} {:>5.1}%  {:<12} {:<10} {:>5.2}  {:<12} {:<9} {:>4}  {}",
            c.disease,
            c.probability * 100.0,
            bar(c.probability, 12),
            c.probability_label.to_string(),
            c.confidence,
            bar(c.confidence, 12),
            c.confidence_label.to_string(),
            c.evidence_n,
            if c.risk_flag { "⚑" } else { "" },
        );
    }
    println!();
}

/// Print the per-answer delta log, biggest probability movement first.
pub fn render_deltas(question: &str, answer: &str, deltas: &[UpdateDelta]) {
    println!("  Q: {}", question);
    println!("  A: {}", answer);
    if deltas.is_empty() {
        println!("     (no tracked disease affected)");
        println!();
        return;
    }
    let mut sorted: Vec<&UpdateDelta> = deltas.iter().collect();
    sorted.sort_by(|a, b| {
        b.delta_prob_raw
            .abs()
            .partial_cmp(&a.delta_prob_raw.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for d in sorted {
        println!(
            "     {:<32} Δp_raw {:>+8.4}  Δconf {:>+7.4}{}{}",
            d.disease,
            d.delta_prob_raw,
            d.delta_conf,
            if d.in_profile { "" } else { "  [off-profile]" },
            if d.extras.is_empty() {
                String::new()
            } else {
                format!("  extras: {}", d.extras.join(", "))
            },
        );
    }
    println!();
}

/// Run all three scenarios in sequence.
pub fn run_all() -> DxrankResult<()> {
    respiratory::run_scenario()?;
    cardiac::run_scenario()?;
    sparse::run_scenario()?;
    Ok(())
}
