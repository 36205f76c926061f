//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup. A missing or unreadable file
//! means defaults; it never stops the browser from starting.

use std::path::{Path, PathBuf};

use reader_persistence::STORAGE_KEY;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where starred articles are persisted.
    pub storage: StorageSettings,

    /// Where articles come from.
    pub catalog: CatalogSettings,

    /// Initial view options.
    pub view: ViewSettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };

        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "Ignoring invalid settings file");
                Self::default()
            }
        }
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(AppError::settings_save)?;
        }

        let content = toml::to_string_pretty(self).map_err(AppError::settings_save)?;

        std::fs::write(path, content).map_err(AppError::settings_save)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ArticleReader", "Article Reader")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Starred-set storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Key the starred set is stored under.
    pub key: String,

    /// Storage file override. `None` uses the platform data directory.
    pub path: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            key: STORAGE_KEY.to_string(),
            path: None,
        }
    }
}

/// Article source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON file with the articles. `None` uses the built-in sample set.
    pub path: Option<PathBuf>,
}

/// Initial view settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Start with the Starred filter active.
    pub starred_only: bool,
}
