//! DXRANK — Diagnostic Ranking Engine Demo CLI
//!
//! Scores free-text symptoms against the bundled disease catalog and runs
//! scripted interview scenarios showing sequential Bayesian updating.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- score --symptoms "fever and chills, bad cough" --risks "smoking"
//!   cargo run -p demo -- interview respiratory

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use dxrank_catalog::scenarios::{self, render_ranking};
use dxrank_contracts::error::DxrankResult;
use dxrank_match::lexical::tokenize;

// ── CLI definition ────────────────────────────────────────────────────────────

/// DXRANK — Bayesian diagnostic ranking demo.
///
/// Ranks candidate diseases from free-text evidence and refines the ranking
/// through scripted interview scenarios.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "DXRANK diagnostic ranking engine demo",
    long_about = "Scores free-text symptoms against the bundled 20-disease catalog and\n\
                  demonstrates sequential belief updating over interview answers."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score free-text symptoms against the bundled catalog.
    Score {
        /// Free-text symptom description (tokenized into phrases).
        #[arg(long)]
        symptoms: String,
        /// Comma-separated risk-factor phrases.
        #[arg(long, default_value = "")]
        risks: String,
        /// Number of candidates to show.
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
    /// Run one scripted interview scenario.
    Interview {
        #[arg(value_enum)]
        scenario: Scenario,
    },
    /// Run all three interview scenarios in sequence.
    RunAll,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scenario {
    Respiratory,
    Cardiac,
    Sparse,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::Score { symptoms, risks, top } => run_score(&symptoms, &risks, top),
        Command::Interview { scenario } => run_interview(scenario),
        Command::RunAll => scenarios::run_all(),
    };

    match result {
        Ok(()) => {
            println!("Done.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_score(symptoms: &str, risks: &str, top: usize) -> DxrankResult<()> {
    let scorer = scenarios::reference_scorer();

    let symptom_phrases = tokenize(symptoms);
    let risk_phrases: Vec<String> = risks
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    println!("  Symptoms: \"{}\"", symptoms);
    if !risk_phrases.is_empty() {
        println!("  Risk factors: {}", risk_phrases.join(", "));
    }
    println!();

    let ranked = scorer.score(&symptom_phrases, &risk_phrases, top)?;
    render_ranking("Ranking:", &ranked);
    Ok(())
}

fn run_interview(scenario: Scenario) -> DxrankResult<()> {
    match scenario {
        Scenario::Respiratory => scenarios::respiratory::run_scenario(),
        Scenario::Cardiac => scenarios::cardiac::run_scenario(),
        Scenario::Sparse => scenarios::sparse::run_scenario(),
    }
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("DXRANK — Bayesian Diagnostic Ranking");
    println!("Reference Demo");
    println!("====================================");
    println!();
    println!("Pipeline per session:");
    println!("  [1] Free-text intake tokenized into candidate phrases");
    println!("  [2] Lexical matcher scores each disease's symptom and risk channels");
    println!("  [3] Seeded Monte Carlo mixes Beta posteriors with the prevalence prior");
    println!("  [4] Cross-disease normalization → ranked probability distribution");
    println!("  [5] Interview answers fold into per-disease state; ranking re-derived");
    println!();
}
