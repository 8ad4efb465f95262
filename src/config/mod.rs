// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the notes tools.
//!
//! Settings are read from a YAML or TOML file, picked by extension.
//! Every field has a default so an empty file is a valid configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::music::{PitchClass, A4_FREQUENCY, DEFAULT_START};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotesConfig {
    #[serde(default)]
    pub tuning: TuningConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl NotesConfig {
    /// Load a configuration file, YAML unless the extension is `.toml`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let config = if is_toml {
            Self::from_toml(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };

        debug!(path = ?path, "loaded configuration");
        Ok(config)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check values that deserialize but make no sense
    pub fn validate(&self) -> std::result::Result<(), Error> {
        let hz = self.tuning.a4_hz;
        if !hz.is_finite() || hz <= 0.0 {
            return Err(Error::Config(format!(
                "tuning.a4_hz must be a positive frequency, got {}",
                hz
            )));
        }
        Ok(())
    }
}

/// Reference pitch settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TuningConfig {
    /// Frequency of A4 in Hz
    #[serde(default = "default_a4_hz")]
    pub a4_hz: f64,
}

fn default_a4_hz() -> f64 {
    A4_FREQUENCY
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            a4_hz: default_a4_hz(),
        }
    }
}

/// Scale search settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// First root when listing scales
    #[serde(default = "default_start")]
    pub start: PitchClass,
    /// Only report scales containing every note
    #[serde(default = "default_perfect")]
    pub perfect: bool,
}

fn default_start() -> PitchClass {
    DEFAULT_START
}
fn default_perfect() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            perfect: default_perfect(),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Print flats as `b` instead of the flat glyph
    #[serde(default)]
    pub ascii: bool,
}
