//! Disease profile types loaded from the external clinical catalog.
//!
//! Profiles are immutable reference data: loaded once at startup, validated,
//! and shared read-only across every scoring session.

use serde::{Deserialize, Serialize};

use crate::error::{DxrankError, DxrankResult};

/// One disease entry from the clinical catalog.
///
/// `symptoms` and `risk_factors` are normalized phrases (lowercase,
/// whitespace-collapsed) — the catalog loader is responsible for
/// normalization so matching can rely on plain equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseProfile {
    /// Unique disease name (uniqueness enforced by the catalog loader).
    pub name: String,
    /// Normalized symptom phrases. Never empty.
    pub symptoms: Vec<String>,
    /// Normalized risk-factor / anamnesis phrases. Never empty.
    pub risk_factors: Vec<String>,
    /// Population base prevalence, strictly inside (0, 1).
    pub base_prevalence: f64,
}

impl DiseaseProfile {
    /// Validate the catalog contract for a single profile.
    ///
    /// Returns `DxrankError::ConfigError` when the name is blank, either
    /// phrase list is empty, or the prevalence falls outside (0, 1).
    pub fn validate(&self) -> DxrankResult<()> {
        if self.name.trim().is_empty() {
            return Err(DxrankError::ConfigError {
                reason: "disease profile has an empty name".to_string(),
            });
        }
        if self.symptoms.is_empty() {
            return Err(DxrankError::ConfigError {
                reason: format!("disease '{}' has no symptoms", self.name),
            });
        }
        if self.risk_factors.is_empty() {
            return Err(DxrankError::ConfigError {
                reason: format!("disease '{}' has no risk factors", self.name),
            });
        }
        if !(self.base_prevalence > 0.0 && self.base_prevalence < 1.0) {
            return Err(DxrankError::ConfigError {
                reason: format!(
                    "disease '{}' has base_prevalence {} outside (0, 1)",
                    self.name, self.base_prevalence
                ),
            });
        }
        Ok(())
    }
}
