//! Demo settings, read from `settings.json` in the config directory.

use std::fs;
use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use crate::error::DemoError;
use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Number of synthetic options to generate.
    ///
    /// Default: 10000
    pub option_count: usize,

    /// Multi-select mode.
    ///
    /// Default: true
    pub multiple: bool,

    /// Seed for reproducible option lists. Random when absent.
    pub seed: Option<u64>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            option_count: 10_000,
            multiple: true,
            seed: None,
        }
    }
}

impl DemoSettings {
    /// Load settings from disk. A missing file means defaults.
    pub fn load() -> Result<Self, DemoError> {
        let Some(path) = paths::settings_file() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(text) => {
                log::info!("loading settings from {}", path.display());
                Self::from_json(&text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, DemoError> {
        Ok(serde_json::from_str(text)?)
    }
}
