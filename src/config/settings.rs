//! User settings for circulate
//!
//! Manages user preferences, chiefly which ledger file the client records
//! live in.

use serde::{Deserialize, Serialize};

use super::paths::CirculatePaths;
use crate::error::CirculateError;

/// User settings for circulate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// File name of the client ledger, relative to the data directory
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_ledger_file() -> String {
    "clients.txt".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            ledger_file: default_ledger_file(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CirculatePaths) -> Result<Self, CirculateError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CirculateError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CirculateError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CirculatePaths) -> Result<(), CirculateError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CirculateError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            CirculateError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
