//! Collaborator trait definitions for the DXRANK engine.
//!
//! These three traits define the full boundary between the numeric core and
//! the outside world:
//!
//! - `CatalogProvider` — supplies the disease catalog at startup
//! - `PhraseMatcher`   — similarity between reported and reference phrases
//! - `AnswerParser`    — free text → structured observations
//!
//! The core is agnostic to how any of them work internally: substring
//! overlap, token sets, or embedding cosine similarity all satisfy
//! `PhraseMatcher`; a regex rule set or an LLM both satisfy `AnswerParser`.
//! Backend selection (network model vs. local fallback) happens once at
//! startup, never inside the scoring loop.

use dxrank_contracts::{
    error::DxrankResult, observation::Observation, profile::DiseaseProfile,
};

/// Aggregate match evidence for one reported-vs-reference phrase set pair.
///
/// A confident match contributes 1.0 to `effective_match`, an ambiguous or
/// partial match 0.5. A phrase nobody mentioned contributes to *none* of
/// the fields — absence of mention is not evidence of absence. Confident
/// misses (explicit negations detected by the front-end) contribute 1.0 to
/// `effective_miss` and count as observed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatchOutcome {
    /// Continuous match credit across all reference phrases.
    pub effective_match: f64,
    /// Continuous confident-miss credit.
    pub effective_miss: f64,
    /// Reference phrases for which any determination was made.
    pub observed: usize,
}

impl MatchOutcome {
    /// The no-information outcome: nothing matched, nothing observed.
    ///
    /// Also the degraded result when a matcher fails — one disease's
    /// matching failure must not abort the whole scoring pass.
    pub fn silent() -> Self {
        Self::default()
    }
}

/// Supplies the immutable disease catalog at startup.
///
/// Contract: unique names, non-empty normalized phrase lists, and
/// `base_prevalence` strictly inside (0, 1) for every profile.
pub trait CatalogProvider {
    /// Load and validate the full catalog.
    fn load(&self) -> DxrankResult<Vec<DiseaseProfile>>;
}

/// Scores reported phrases against one disease's reference phrases.
///
/// Implementations must be deterministic for a fixed input — the scorer's
/// reproducibility guarantee depends on it.
pub trait PhraseMatcher: Send + Sync {
    /// Match `reported` phrases against `reference` phrases for one channel.
    ///
    /// Errors are treated as a collaborator failure by the scorer: logged,
    /// degraded to `MatchOutcome::silent()`, never propagated.
    fn match_phrases(&self, reported: &[String], reference: &[String])
        -> DxrankResult<MatchOutcome>;
}

/// Parses one raw free-text answer into structured observations.
///
/// Must emit the explicitly targeted phrase's observation when inferable,
/// plus any incidentally mentioned phrases — a patient's single sentence
/// can carry evidence for several diseases at once. Each observation's
/// `strength` already bakes in temporal/severity attenuation.
pub trait AnswerParser: Send + Sync {
    /// Parse `raw` in the context of an optional targeted phrase.
    fn parse(&self, target: Option<&str>, raw: &str) -> DxrankResult<Vec<Observation>>;
}
