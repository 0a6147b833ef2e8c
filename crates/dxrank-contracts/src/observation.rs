//! Observation types emitted by the external answer parser.
//!
//! The NLP front-end turns one free-text patient answer into zero or more
//! structured observations. The engine consumes them as-is: all temporal
//! and severity attenuation is already baked into `strength`.

use serde::{Deserialize, Serialize};

/// The direction of one claim about one phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// The phrase is confirmed present.
    Yes,
    /// The phrase is confirmed absent.
    No,
    /// Present but weakly — partial credit on the evidence update.
    Mild,
    /// The patient could not say either way. Counted as inquiry volume,
    /// never as directional evidence.
    Unsure,
    /// The question was skipped. No state change of any kind.
    Skip,
}

/// One structured claim about one phrase's presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Normalized phrase this claim is about.
    pub phrase: String,
    pub polarity: Polarity,
    /// Update weight in [0, 2]. Values above 1.0 encode severity
    /// amplification; values below encode temporal/severity attenuation.
    pub strength: f64,
}

impl Observation {
    /// Build an observation, clamping `strength` into the [0, 2] contract
    /// range so malformed parser output cannot corrupt belief state.
    pub fn new(phrase: impl Into<String>, polarity: Polarity, strength: f64) -> Self {
        Self {
            phrase: phrase.into(),
            polarity,
            strength: strength.clamp(0.0, 2.0),
        }
    }
}

/// Summary of everything the parser extracted from one raw answer.
///
/// Returned alongside the per-disease delta log so the orchestrating layer
/// can show the patient what was understood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSummary {
    /// The original answer text, untouched.
    pub raw: String,
    /// Every observation extracted, targeted and incidental alike.
    pub observations: Vec<Observation>,
    /// Phrases mentioned incidentally, beyond the targeted one.
    pub extra_phrases: Vec<String>,
    /// Human-readable account of the parse (or of a parser failure).
    pub explanation: String,
}
