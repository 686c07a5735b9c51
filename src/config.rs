//! User configuration, stored as YAML under `~/.outlay/`

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_API_URL;

const CONFIG_FILE: &str = "config.yaml";

/// User-tunable settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the expense API server
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: String::from(DEFAULT_API_URL),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing or unreadable file falls back to defaults silently; the
    /// tracker must come up even on a fresh machine.
    pub fn load() -> Self {
        Self::load_from(&default_dir())
    }

    /// Load configuration from a specific directory
    pub fn load_from(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        match fs::read_to_string(path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    /// Save configuration to a specific directory, creating it if needed
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_yaml::to_string(self)?;
        fs::write(dir.join(CONFIG_FILE), content)?;
        Ok(())
    }

    /// Save configuration to the default location
    #[allow(dead_code)] // Prepared for future in-app settings editing
    pub fn save(&self) -> Result<()> {
        self.save_to(&default_dir())
    }
}

fn default_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".outlay")
}
