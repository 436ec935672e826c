//! Path management for circulate
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `CIRCULATE_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/circulate-cli` or `~/.config/circulate-cli`
//! 3. Windows: `%APPDATA%\circulate-cli`

use std::path::PathBuf;

use crate::error::CirculateError;

/// Manages all paths used by circulate
#[derive(Debug, Clone)]
pub struct CirculatePaths {
    /// Base directory for all circulate data
    base_dir: PathBuf,
}

impl CirculatePaths {
    /// Create a new CirculatePaths instance
    ///
    /// Path resolution:
    /// 1. `CIRCULATE_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/circulate-cli` or `~/.config/circulate-cli`
    /// 3. Windows: `%APPDATA%\circulate-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CirculateError> {
        let base_dir = if let Ok(custom) = std::env::var("CIRCULATE_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CirculatePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/circulate-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the data directory (~/.config/circulate-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the client ledger with the given file name
    pub fn ledger_file(&self, file_name: &str) -> PathBuf {
        self.data_dir().join(file_name)
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/circulate-cli/)
    /// - Data directory (~/.config/circulate-cli/data/)
    pub fn ensure_directories(&self) -> Result<(), CirculateError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CirculateError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CirculateError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if circulate has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CirculateError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("circulate-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CirculateError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CirculateError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("circulate-cli"))
}
