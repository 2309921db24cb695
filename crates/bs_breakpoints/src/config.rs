//! JSON configuration for custom tier sets.
//!
//! ```json
//! { "tiers": [ { "name": "sm", "min_width": 0 }, { "name": "md", "min_width": 768 } ] }
//! ```

use crate::{BreakpointRegistry, ConfigError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One configured tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Tier name.
    pub name: String,
    /// Minimum viewport width in pixels.
    pub min_width: u32,
}

/// Serialized form of a registry, narrowest tier first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Tiers, narrowest first.
    pub tiers: Vec<TierConfig>,
}

impl RegistryConfig {
    /// # Errors
    /// Returns `ConfigError::Parse` when `text` is not a registry config.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read and `ConfigError::Parse`
    /// if its contents are not a registry config.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(target: "bs_breakpoints", "Loading breakpoint config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// # Errors
    /// Returns `ConfigError::Parse` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configured tiers into a registry.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` when the tiers break a registry invariant.
    pub fn into_registry(self) -> Result<BreakpointRegistry, ConfigError> {
        let tiers = self
            .tiers
            .into_iter()
            .map(|tier| (tier.name, tier.min_width));
        Ok(BreakpointRegistry::new(tiers)?)
    }
}

impl From<&BreakpointRegistry> for RegistryConfig {
    fn from(registry: &BreakpointRegistry) -> Self {
        Self {
            tiers: registry
                .tiers()
                .iter()
                .map(|tier| TierConfig {
                    name: tier.name().to_owned(),
                    min_width: tier.min_width(),
                })
                .collect(),
        }
    }
}

impl BreakpointRegistry {
    /// # Errors
    /// Returns a `ConfigError` when the JSON is malformed or the tiers are invalid.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        RegistryConfig::from_json_str(text)?.into_registry()
    }

    /// # Errors
    /// Returns a `ConfigError` when the file cannot be read, is malformed, or
    /// describes invalid tiers.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        RegistryConfig::from_json_file(path)?.into_registry()
    }
}
