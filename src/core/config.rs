//! User settings read from `<config dir>/git-menu/config.json`.
//!
//! The file is optional and never written by git-menu. Every field has a
//! default, so a partial file only overrides what it names.

use crate::core::dirs::get_config_directory;
use crate::core::error::{GitMenuError, Result};
use crate::core::menu::Switch;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SETTINGS_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MenuSettings {
    /// Flags (`--prune`) or short keys (`-p`) switched on when the menu opens
    pub default_switches: Vec<String>,
}

impl MenuSettings {
    /// Turn on every switch named in `default_switches`
    pub fn apply(&self, switches: Vec<Switch>) -> Vec<Switch> {
        switches
            .into_iter()
            .map(|switch| {
                let short = format!("-{}", switch.key);
                let on = switch.active
                    || self
                        .default_switches
                        .iter()
                        .any(|name| *name == switch.flag || *name == short);
                switch.enabled(on)
            })
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub git_path: String,
    pub fetch: MenuSettings,
    pub pull: MenuSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            git_path: "git".to_string(),
            fetch: MenuSettings::default(),
            pull: MenuSettings::default(),
        }
    }
}

impl Settings {
    /// Load from the user's config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_file = get_config_directory()?.join(SETTINGS_FILE);
        Self::load_from(&config_file)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| GitMenuError::settings_read(path, e))?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(|e| GitMenuError::settings_parse(path, e))?;

        log::debug!("Loaded settings from {}: {settings:?}", path.display());
        Ok(settings)
    }
}
