//! # dxrank-match
//!
//! Phrase matching strategies behind the `PhraseMatcher` trait from
//! `dxrank-core`.
//!
//! Two implementations ship here:
//!
//! - [`lexical::LexicalMatcher`] — token overlap and substring containment.
//!   No external dependencies, always available, the default backend.
//! - [`semantic::SemanticMatcher`] — wraps an injected
//!   [`semantic::SimilarityOracle`] (an embedding model, typically remote)
//!   and bands its cosine scores into match credit.
//!
//! Backend selection happens once at startup via [`MatcherBackend`]; the
//! scoring loop only ever sees `Box<dyn PhraseMatcher>`.

pub mod lexical;
pub mod semantic;

use dxrank_core::PhraseMatcher;

use crate::lexical::LexicalMatcher;
use crate::semantic::{SemanticMatcher, SimilarityOracle};

/// Startup-time matcher selection.
///
/// Chosen from configuration before any scoring happens; degrading from
/// `Semantic` to `Lexical` when the oracle backend is unavailable is the
/// hosting application's call, made here and never inside the scoring loop.
pub enum MatcherBackend {
    /// Token-overlap matching, no external services.
    Lexical,
    /// Similarity-oracle matching over the given backend.
    Semantic(Box<dyn SimilarityOracle>),
}

impl MatcherBackend {
    /// Build the concrete matcher for this backend.
    pub fn build(self) -> Box<dyn PhraseMatcher> {
        match self {
            MatcherBackend::Lexical => Box::new(LexicalMatcher::new()),
            MatcherBackend::Semantic(oracle) => Box::new(SemanticMatcher::new(oracle)),
        }
    }
}
