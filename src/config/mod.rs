// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Editor configuration.
//!
//! This module loads the defaults used when the editor creates new
//! sections, along with any custom tunings, from a YAML file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::music::{Tuning, PRESET_NAMES};
use crate::tab::{Section, DEFAULT_BPM, DEFAULT_SECTION_NAME};

/// Root editor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EditorConfig {
    /// Defaults for newly created sections
    #[serde(default)]
    pub section: SectionDefaults,
    /// Custom tunings by name, string 1 first (e.g., `[D4, B3, G3, D3, G2, D2]`)
    #[serde(default)]
    pub tunings: HashMap<String, Vec<String>>,
}

impl EditorConfig {
    /// Load editor configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config = Self::from_yaml(&contents)?;
        info!(path = ?path.as_ref(), tunings = config.tunings.len(), "loaded editor config");
        Ok(config)
    }

    /// Parse editor configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        info!(path = ?path.as_ref(), "saved editor config");
        Ok(())
    }

    /// Look up a tuning by name: custom tunings first, then presets
    pub fn tuning(&self, name: &str) -> Result<Tuning> {
        if let Some(notes) = self.tunings.get(name) {
            return Tuning::parse(notes.as_slice())
                .with_context(|| format!("Invalid tuning '{}'", name));
        }
        Tuning::preset(name).ok_or_else(|| anyhow!("Unknown tuning '{}'", name))
    }

    /// The tuning named in the section defaults
    pub fn default_tuning(&self) -> Result<Tuning> {
        self.tuning(&self.section.tuning)
    }

    /// Create a new section from the configured defaults
    pub fn new_section(&self) -> Result<Section> {
        Ok(self.new_section_with(self.default_tuning()?))
    }

    /// Create a new section from the configured defaults with a given tuning
    pub fn new_section_with(&self, tuning: Tuning) -> Section {
        Section::create(tuning)
            .update_name(self.section.name.as_str())
            .set_bpm(self.section.bpm)
    }

    /// Names of all available tunings, presets first, then custom ones sorted
    pub fn tuning_names(&self) -> Vec<String> {
        let mut custom: Vec<String> = self
            .tunings
            .keys()
            .filter(|name| !PRESET_NAMES.contains(&name.as_str()))
            .cloned()
            .collect();
        custom.sort();

        PRESET_NAMES
            .iter()
            .map(|name| name.to_string())
            .chain(custom)
            .collect()
    }
}

/// Defaults applied to new sections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionDefaults {
    /// Section name
    #[serde(default = "default_name")]
    pub name: String,
    /// Tempo in BPM
    #[serde(default = "default_bpm")]
    pub bpm: f64,
    /// Tuning name (preset or custom)
    #[serde(default = "default_tuning_name")]
    pub tuning: String,
}

fn default_name() -> String {
    DEFAULT_SECTION_NAME.to_string()
}
fn default_bpm() -> f64 {
    DEFAULT_BPM
}
fn default_tuning_name() -> String {
    "standard_guitar".to_string()
}

impl Default for SectionDefaults {
    fn default() -> Self {
        Self {
            name: default_name(),
            bpm: default_bpm(),
            tuning: default_tuning_name(),
        }
    }
}
