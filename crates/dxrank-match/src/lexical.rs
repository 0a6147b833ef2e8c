//! Lexical phrase matching: normalization, clause tokenization, and the
//! token-overlap `LexicalMatcher`.
//!
//! This is the zero-dependency default backend. It can award full credit
//! (verbatim phrase) or partial credit (substring containment or shared
//! content words), and it can stay silent — but it can never produce a
//! confident miss, because the absence of a lexical hit says nothing about
//! whether the patient denied the symptom.

use std::collections::HashSet;

use dxrank_contracts::error::DxrankResult;
use dxrank_core::{MatchOutcome, PhraseMatcher};

/// Words at or below this length carry no matching signal ("the", "and",
/// "a", "my") and are dropped from overlap comparison.
const MIN_CONTENT_WORD_LEN: usize = 4;

/// Lowercase and collapse runs of whitespace to single spaces.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split free text into candidate phrases.
///
/// Clause separators (`,` `;` `.` and newlines) bound the phrases; each
/// non-empty clause is kept whole, and its content words are additionally
/// emitted as single-word phrases so "fever and a bad cough" can still hit
/// the reference phrases "fever" and "cough".
pub fn tokenize(text: &str) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut seen = HashSet::new();

    for clause in text.split(['.', ',', ';', '\n']) {
        let clause = normalize(clause);
        if clause.is_empty() {
            continue;
        }
        for word in clause.split(' ') {
            if word.len() >= MIN_CONTENT_WORD_LEN && seen.insert(word.to_string()) {
                phrases.push(word.to_string());
            }
        }
        if seen.insert(clause.clone()) {
            phrases.push(clause);
        }
    }
    phrases
}

fn content_words(phrase: &str) -> HashSet<&str> {
    phrase
        .split(' ')
        .filter(|w| w.len() >= MIN_CONTENT_WORD_LEN)
        .collect()
}

/// Token-overlap matcher over normalized phrases.
///
/// Per reference phrase, the best hit across all reported phrases wins:
/// verbatim equality scores 1.0, substring containment (either direction)
/// or a shared content word scores 0.5, no hit contributes nothing.
#[derive(Debug, Default)]
pub struct LexicalMatcher;

impl LexicalMatcher {
    pub fn new() -> Self {
        Self
    }

    fn credit(reported: &str, reference: &str) -> Option<f64> {
        if reported == reference {
            return Some(1.0);
        }
        if reported.contains(reference) || reference.contains(reported) {
            return Some(0.5);
        }
        let ref_words = content_words(reference);
        if content_words(reported).intersection(&ref_words).next().is_some() {
            return Some(0.5);
        }
        None
    }
}

impl PhraseMatcher for LexicalMatcher {
    fn match_phrases(
        &self,
        reported: &[String],
        reference: &[String],
    ) -> DxrankResult<MatchOutcome> {
        let reported: Vec<String> = reported.iter().map(|p| normalize(p)).collect();

        let mut outcome = MatchOutcome::silent();
        for phrase in reference {
            let phrase = normalize(phrase);
            let best = reported
                .iter()
                .filter_map(|r| Self::credit(r, &phrase))
                .fold(None::<f64>, |acc, c| Some(acc.map_or(c, |a| a.max(c))));
            if let Some(credit) = best {
                outcome.effective_match += credit;
                outcome.observed += 1;
            }
        }
        Ok(outcome)
    }
}
