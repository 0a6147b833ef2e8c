//! Rules-only reference implementation of the `AnswerParser` contract.
//!
//! A patient does not say "yes" — they say "kind of, it started 3 weeks ago"
//! or "no, not really, maybe a tiny bit when i lie down". This parser turns
//! such answers into structured observations using keyword tables alone, so
//! it is fully explainable and needs no external services. A production
//! deployment would put an LLM behind the same trait.
//!
//! Modifiers attenuate or amplify the base polarity weight: past events are
//! weighted low (the symptom may have resolved), intermittent presentation
//! reduces the weight, reported severity scales it. Phrases from the known
//! vocabulary that are mentioned incidentally in the answer become extra
//! observations — the big win from free text.

use std::collections::HashSet;

use dxrank_contracts::{
    error::DxrankResult,
    observation::{Observation, Polarity},
};
use dxrank_core::AnswerParser;
use dxrank_match::lexical::normalize;

// ── Polarity keyword tables ──────────────────────────────────────────────────

const YES_STRONG: &[&str] = &[
    "yes", "yeah", "yep", "yup", "definitely", "absolutely", "certainly",
    "confirmed", "positive", "indeed", "correct", "i do", "i have", "i feel",
    "i felt", "i noticed", "i notice", "i experience", "i experienced",
];

// Negated forms that cancel a false yes hit from "i have" / "i do".
const YES_NEGATED: &[&str] = &[
    "i don't have", "i do not have", "i haven't", "i have not",
    "don't feel", "do not feel", "don't notice", "don't experience",
];

const YES_MILD: &[&str] = &[
    "kind of", "sort of", "somewhat", "a little", "a bit", "a tiny bit",
    "slightly", "partially", "mildly", "sometimes", "occasionally",
    "on and off", "now and then", "a tad", "faintly", "borderline",
];

const NO_STRONG: &[&str] = &[
    "no", "nope", "nah", "not at all", "not really", "never", "negative",
    "absent", "don't have", "do not have", "haven't", "didn't", "denies",
    "denied", "without", "not present",
];

const UNSURE: &[&str] = &[
    "not sure", "unsure", "hard to say", "difficult to tell", "maybe",
    "perhaps", "possibly", "might", "could be", "i think", "i guess",
    "probably", "i don't know", "unclear", "can't tell", "can't say",
];

const SKIP: &[&str] = &[
    "skip", "pass", "next", "n/a", "not applicable", "not relevant",
    "i don't understand",
];

// ── Temporal tables, checked in order: past beats current when an answer
//    carries both ("used to hurt, still twinges"). ─────────────────────────

const PAST: &[&str] = &[
    "used to", "went away", "resolved", "no longer", "not anymore",
    "stopped", "last week", "last month", "last year", "week ago",
    "weeks ago", "month ago", "months ago", "year ago", "years ago",
    "previously", "formerly",
];

const RECENT: &[&str] = &[
    "recently", "just started", "just began", "day ago", "days ago",
    "this week", "since yesterday", "newly", "started lately",
];

const INTERMITTENT: &[&str] = &[
    "sometimes", "occasionally", "on and off", "comes and goes",
    "intermittent", "intermittently", "sporadic", "now and then",
    "episodic", "only sometimes", "only when", "flares up", "recurring",
];

const CURRENT: &[&str] = &[
    "right now", "currently", "at the moment", "still", "ongoing",
    "all day", "all the time", "constant", "constantly", "persistent",
    "persistently", "every day", "daily", "always", "continuously",
];

// ── Severity tables, checked in order. ──────────────────────────────────────

const SEVERE: &[&str] = &[
    "severe", "severely", "extreme", "extremely", "very bad", "very strong",
    "very intense", "terrible", "awful", "unbearable", "excruciating",
    "intense", "a lot", "significantly", "heavily", "high", "strong",
    "major", "significant",
];

const MODERATE: &[&str] = &[
    "moderate", "moderately", "medium", "fairly", "quite", "reasonably",
    "noticeably", "considerably",
];

const MILD: &[&str] = &[
    "mild", "mildly", "slight", "slightly", "a little", "a bit", "minor",
    "low-grade", "faint", "subtle",
];

const TRACE: &[&str] = &[
    "barely", "hardly", "trace", "just a hint", "minimal", "negligible",
    "very slight", "very faint", "very mild",
];

// Negation cues scanned in the window just before an incidental mention.
const LOCAL_NEGATION: &[&str] = &["no", "not", "denies", "denied", "without", "absent"];

/// How far back (in characters) a negation cue can reach a mention.
const NEGATION_WINDOW: usize = 16;

fn temporal_modifier(text: &str) -> f64 {
    if any(text, PAST) {
        0.35
    } else if any(text, RECENT) {
        0.85
    } else if any(text, INTERMITTENT) {
        0.65
    } else if any(text, CURRENT) {
        1.0
    } else {
        0.90
    }
}

fn severity_modifier(text: &str) -> f64 {
    if any(text, SEVERE) {
        1.3
    } else if any(text, MODERATE) {
        1.0
    } else if any(text, MILD) {
        0.65
    } else if any(text, TRACE) {
        0.30
    } else {
        1.0
    }
}

/// Whole-word containment: `text` must already be space-padded.
fn hit(padded: &str, keyword: &str) -> bool {
    padded.contains(&format!(" {} ", keyword))
}

fn any(padded: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| hit(padded, k))
}

/// Keyword-table answer parser over a known phrase vocabulary.
pub struct KeywordAnswerParser {
    known: Vec<String>,
}

impl KeywordAnswerParser {
    /// `known_phrases` is the full symptom and risk-factor vocabulary across
    /// the catalog, used to spot incidental mentions. Phrases are normalized
    /// here.
    pub fn new(known_phrases: Vec<String>) -> Self {
        Self {
            known: known_phrases.iter().map(|p| normalize(p)).collect(),
        }
    }

    /// Polarity priority: skip > explicit no > unsure > mild yes > strong
    /// yes > fallback. Returns the polarity with its base strength, before
    /// temporal and severity attenuation.
    fn polarity(padded: &str) -> (Polarity, f64) {
        let yes = any(padded, YES_STRONG) && !any(padded, YES_NEGATED);
        let no = any(padded, NO_STRONG);
        let mild = any(padded, YES_MILD);

        if any(padded, SKIP) {
            return (Polarity::Skip, 0.0);
        }
        if no && !yes {
            // "not really, maybe a tiny bit" stays a no, but a weak one.
            let strength = if mild { 0.15 } else { 1.0 };
            return (Polarity::No, strength);
        }
        if no && yes {
            // "no ... definitely not" is a no with emphasis.
            return (Polarity::No, 1.0);
        }
        if any(padded, UNSURE) && !yes {
            return (Polarity::Unsure, 0.5);
        }
        if mild && !yes {
            return (Polarity::Mild, 0.9);
        }
        if yes {
            return (Polarity::Yes, 1.0);
        }
        // A sentence with no recognizable polarity still tells us the patient
        // engaged with the question; one or two stray words do not.
        if padded.split_whitespace().count() >= 3 {
            (Polarity::Unsure, 0.35)
        } else {
            (Polarity::Skip, 0.0)
        }
    }

    /// True when `phrase` appears in the answer, verbatim or with all of its
    /// words present.
    fn mentioned(padded: &str, words: &HashSet<&str>, phrase: &str) -> bool {
        if hit(padded, phrase) {
            return true;
        }
        let phrase_words: Vec<&str> = phrase.split(' ').collect();
        phrase_words.len() >= 2 && phrase_words.iter().all(|w| words.contains(w))
    }

    /// True when a negation cue sits just before the phrase's occurrence.
    fn locally_negated(padded: &str, phrase: &str) -> bool {
        let needle = format!(" {} ", phrase);
        let Some(pos) = padded.find(&needle) else {
            return false;
        };
        let mut start = pos.saturating_sub(NEGATION_WINDOW);
        while !padded.is_char_boundary(start) {
            start += 1;
        }
        let window = format!(" {} ", padded[start..pos].trim());
        any(&window, LOCAL_NEGATION)
    }
}

impl AnswerParser for KeywordAnswerParser {
    fn parse(&self, target: Option<&str>, raw: &str) -> DxrankResult<Vec<Observation>> {
        let clean = normalize(&raw.replace([',', ';', '.', '!', '?', '(', ')'], " "));
        let padded = format!(" {} ", clean);
        let words: HashSet<&str> = clean.split(' ').collect();

        let (polarity, base) = Self::polarity(&padded);
        let strength = base * temporal_modifier(&padded) * severity_modifier(&padded);

        let mut observations = Vec::new();
        let target = target.map(normalize);
        if let Some(ref phrase) = target {
            observations.push(Observation::new(phrase.clone(), polarity, strength));
        }

        // Incidental mentions of known phrases become extra observations.
        // A mention is affirmative unless a negation cue sits right before
        // it in the text.
        for phrase in &self.known {
            if target.as_deref() == Some(phrase.as_str()) {
                continue;
            }
            if !Self::mentioned(&padded, &words, phrase) {
                continue;
            }
            if Self::locally_negated(&padded, phrase) {
                observations.push(Observation::new(phrase.clone(), Polarity::No, 1.0));
            } else {
                let mention_strength = temporal_modifier(&padded) * severity_modifier(&padded);
                observations.push(Observation::new(
                    phrase.clone(),
                    Polarity::Yes,
                    mention_strength,
                ));
            }
        }

        Ok(observations)
    }
}
