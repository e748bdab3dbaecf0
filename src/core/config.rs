//! Season configuration with documented defaults
//!
//! Tunables of the fight model itself live in `fight::constants` and the
//! card-building rules in `matchmaking::constants`. This file covers the
//! knobs a caller is expected to change between runs.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{FightNightError, Result};
use crate::roster::generation::roster_size;

/// Configuration for a simulated season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the deterministic generator
    ///
    /// The same seed and config always reproduce the same roster, cards and
    /// results.
    pub seed: u64,

    /// Number of events to run back to back
    pub events: u32,

    /// Fighters generated per men's division
    ///
    /// Women's divisions get 60% of this, never fewer than 4.
    pub fighters_per_division: u32,

    /// Minimum active fighters an organization needs before it can book an
    /// event
    pub min_active_fighters: usize,

    /// The promoting organization
    pub organization: OrganizationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    pub name: String,
    /// Prefix for event names ("FNC 12: Silva vs Jones")
    pub short_name: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            events: 12,
            fighters_per_division: 10,
            min_active_fighters: 20,
            organization: OrganizationConfig::default(),
        }
    }
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: "Fight Night Championship".to_string(),
            short_name: "FNC".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing keys fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a config from a TOML string and validate it
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.fighters_per_division < 2 {
            return Err(FightNightError::Config(format!(
                "fighters_per_division ({}) must be at least 2",
                self.fighters_per_division
            )));
        }

        let generated = roster_size(self.fighters_per_division);
        if self.min_active_fighters > generated {
            return Err(FightNightError::Config(format!(
                "min_active_fighters ({}) exceeds the generated roster size ({})",
                self.min_active_fighters, generated
            )));
        }

        if self.organization.short_name.trim().is_empty() {
            return Err(FightNightError::Config(
                "organization.short_name must not be empty".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SimulationConfig::parse_toml("seed = 7\nevents = 3\n").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.events, 3);
        assert_eq!(config.fighters_per_division, 10);
        assert_eq!(config.organization.short_name, "FNC");
    }

    #[test]
    fn test_nested_organization_table() {
        let toml_str = r#"
            [organization]
            name = "Oktagon"
            short_name = "OKT"
        "#;
        let config = SimulationConfig::parse_toml(toml_str).unwrap();
        assert_eq!(config.organization.name, "Oktagon");
        assert_eq!(config.organization.short_name, "OKT");
    }

    #[test]
    fn test_tiny_divisions_rejected() {
        let config = SimulationConfig {
            fighters_per_division: 1,
            ..SimulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(FightNightError::Config(_))));
    }

    #[test]
    fn test_unreachable_minimum_rejected() {
        let config = SimulationConfig {
            fighters_per_division: 2,
            min_active_fighters: 500,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = SimulationConfig::parse_toml("seed = \"abc\"").unwrap_err();
        assert!(matches!(err, FightNightError::ConfigParse(_)));
    }
}
