//! Configuration handling for the TUI

use crate::state::{PhoneRules, DEFAULT_PHONE_REGION};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Region for phone numbers typed without a leading `+`
    pub default_phone_region: Option<String>,
    /// Base directory for relative document paths
    pub document_dir: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "studentform", "student-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, writing the defaults on first run
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: TuiConfig = serde_json::from_str(&content)?;
            return Ok(config);
        }

        let config = Self::first_run();
        if let Err(err) = config.save_to(path) {
            tracing::warn!("Could not write default config to {}: {err}", path.display());
        } else {
            tracing::info!("Wrote default config to {}", path.display());
        }
        Ok(config)
    }

    /// Defaults written on first run, with the phone region spelled out
    fn first_run() -> Self {
        Self {
            default_phone_region: Some(DEFAULT_PHONE_REGION.to_string()),
            document_dir: None,
        }
    }

    /// Save configuration to file
    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Phone rules for the configured region, falling back to the default
    /// region when the code is unknown
    pub fn phone_rules(&self) -> PhoneRules {
        match self.default_phone_region.as_deref() {
            Some(code) => PhoneRules::for_region(code).unwrap_or_else(|| {
                tracing::warn!("Unknown phone region {code:?}, using default");
                PhoneRules::default()
            }),
            None => PhoneRules::default(),
        }
    }

    pub fn document_dir(&self) -> Option<PathBuf> {
        self.document_dir
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
    }
}
