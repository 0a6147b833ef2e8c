//! # dxrank-core
//!
//! The DXRANK scoring engine: collaborator traits, the catalog-wide
//! candidate scorer, and the per-session sequential belief updater.
//!
//! The split mirrors the two phases of a diagnostic session:
//!
//! 1. [`CandidateScorer::score`] ranks the whole catalog from the intake
//!    free text in one deterministic pass.
//! 2. [`SequentialUpdater`] takes over, folding interview answers into
//!    per-disease Beta state and re-ranking on demand.
//!
//! Everything numeric lives in `dxrank-evidence`; everything external
//! (matching, parsing, catalog loading) enters through the traits in
//! [`traits`].

pub mod scorer;
pub mod traits;
pub mod updater;

pub use scorer::{CandidateScorer, McConfig};
pub use traits::{AnswerParser, CatalogProvider, MatchOutcome, PhraseMatcher};
pub use updater::{DiseaseState, SequentialUpdater};
