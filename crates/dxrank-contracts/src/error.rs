//! Error types for the DXRANK scoring and update pipeline.
//!
//! All fallible operations in the DXRANK crates return `DxrankResult<T>`.
//! Collaborator failures (matcher, parser) are mostly *logged and degraded*
//! rather than raised — the variants here cover the cases that must surface
//! to the caller.

use thiserror::Error;

/// The unified error type for the DXRANK engine.
#[derive(Debug, Error)]
pub enum DxrankError {
    /// An external collaborator (phrase matcher, answer parser, catalog
    /// provider) failed or returned malformed data.
    ///
    /// Inside the scoring and update loops this is logged and degraded to
    /// zero evidence; it is only returned when the failure makes the whole
    /// call meaningless (e.g. the catalog provider cannot load at all).
    #[error("collaborator '{collaborator}' failed: {reason}")]
    CollaboratorFailure { collaborator: String, reason: String },

    /// The caller violated the API contract — e.g. constructing an updater
    /// with no candidates, or a candidate without a matching profile.
    ///
    /// This is a programming mistake to fix, never a runtime condition to
    /// swallow.
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    /// A catalog or configuration document is missing, unreadable, or
    /// fails validation.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// An internal numeric operation failed (e.g. a distribution could not
    /// be constructed). Unreachable with parameters that honor the Beta
    /// floor invariant, but kept explicit so library code never panics.
    #[error("numeric error: {reason}")]
    Numeric { reason: String },
}

/// Convenience alias used throughout the DXRANK crates.
pub type DxrankResult<T> = Result<T, DxrankError>;
