//! TOML-driven catalog loading.
//!
//! `TomlCatalog` loads disease profiles from a TOML document and implements
//! the `CatalogProvider` trait from `dxrank-core`. Validation happens at
//! construction so downstream code can rely on the catalog contract:
//! unique names, non-empty phrase lists, prevalence strictly inside (0, 1).
//! Phrases are normalized here so matching can use plain equality.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use dxrank_contracts::{
    error::{DxrankError, DxrankResult},
    profile::DiseaseProfile,
};
use dxrank_core::CatalogProvider;
use dxrank_match::lexical::normalize;

#[derive(Debug, Deserialize)]
struct CatalogConfig {
    #[serde(rename = "disease")]
    diseases: Vec<DiseaseProfile>,
}

/// A `CatalogProvider` backed by a TOML document.
///
/// Construct via `from_toml_str` or `from_file`:
///
/// ```rust,ignore
/// use dxrank_catalog::TomlCatalog;
///
/// let catalog = TomlCatalog::from_file(Path::new("catalogs/respiratory.toml"))?;
/// ```
#[derive(Debug)]
pub struct TomlCatalog {
    profiles: Vec<DiseaseProfile>,
}

impl TomlCatalog {
    /// Parse `s` as TOML, normalize phrases, and validate every profile.
    ///
    /// Returns `DxrankError::ConfigError` if the TOML is malformed, a
    /// profile violates the catalog contract, or two profiles share a name.
    pub fn from_toml_str(s: &str) -> DxrankResult<Self> {
        let config: CatalogConfig = toml::from_str(s).map_err(|e| DxrankError::ConfigError {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;

        let profiles: Vec<DiseaseProfile> = config
            .diseases
            .into_iter()
            .map(|p| DiseaseProfile {
                name: p.name.trim().to_string(),
                symptoms: p.symptoms.iter().map(|s| normalize(s)).collect(),
                risk_factors: p.risk_factors.iter().map(|s| normalize(s)).collect(),
                base_prevalence: p.base_prevalence,
            })
            .collect();

        let mut seen = HashSet::new();
        for profile in &profiles {
            profile.validate()?;
            if !seen.insert(profile.name.clone()) {
                return Err(DxrankError::ConfigError {
                    reason: format!("duplicate disease name '{}' in catalog", profile.name),
                });
            }
        }

        debug!(diseases = profiles.len(), "catalog loaded");
        Ok(Self { profiles })
    }

    /// Read the file at `path` and parse it as a TOML catalog.
    pub fn from_file(path: &Path) -> DxrankResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| DxrankError::ConfigError {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The validated profiles, in declaration order.
    pub fn profiles(&self) -> &[DiseaseProfile] {
        &self.profiles
    }
}

impl CatalogProvider for TomlCatalog {
    fn load(&self) -> DxrankResult<Vec<DiseaseProfile>> {
        Ok(self.profiles.clone())
    }
}
