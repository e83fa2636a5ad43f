//! Configuration management for Airgraph.
//!
//! Provides settings for the flight network controller and its text
//! displays. Configuration is plain JSON; any field left out takes its
//! default.

use std::path::Path;

use common_error::{AirgraphError, AirgraphResult, ensure};
use serde::{Deserialize, Serialize};

/// Global Airgraph configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AirgraphConfig {
    /// Flight network configuration.
    pub network: NetworkConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

impl AirgraphConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> AirgraphResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> AirgraphResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AirgraphError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&contents)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json_string(&self) -> AirgraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check settings that serde alone cannot enforce.
    pub fn validate(&self) -> AirgraphResult<()> {
        ensure!(
            self.display.max_label_len >= 4,
            ConfigError: "display.max_label_len must be at least 4, got {}",
            self.display.max_label_len
        );
        Ok(())
    }
}

/// Flight network configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Graph content the network starts with.
    pub seed: SeedDataset,
    /// Allow flights whose origin and destination are the same airport.
    pub allow_same_airport: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            seed: SeedDataset::Flights,
            allow_same_airport: false,
        }
    }
}

/// Built-in starting graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeedDataset {
    /// Eight US airports connected by eighteen flights.
    #[default]
    Flights,
    /// Seven lettered vertices joined by nine weighted edges.
    Letters,
    /// No vertices and no edges.
    Empty,
}

impl SeedDataset {
    /// All datasets, in display order.
    pub const ALL: [Self; 3] = [Self::Flights, Self::Letters, Self::Empty];

    /// The name used in configuration files and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Flights => "flights",
            Self::Letters => "letters",
            Self::Empty => "empty",
        }
    }
}

impl std::str::FromStr for SeedDataset {
    type Err = AirgraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|seed| seed.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AirgraphError::config(format!(
                    "unknown seed dataset '{s}', expected one of: flights, letters, empty"
                ))
            })
    }
}

impl std::fmt::Display for SeedDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Text display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Labels longer than this are truncated with an ellipsis.
    pub max_label_len: usize,
    /// List flights under each airport when printing the network tree.
    pub show_flights: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_label_len: 24,
            show_flights: true,
        }
    }
}
