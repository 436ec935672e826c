//! Storage layer for circulate
//!
//! Provides the in-memory client registry, the flat-text ledger file behind
//! it, and the append-only audit trail.

pub mod ledger;
pub mod registry;

pub use ledger::{parse_blocks, read_all, write_all, TextRecord, WriteMode};
pub use registry::ClientRegistry;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::CirculatePaths;
use crate::config::settings::Settings;
use crate::error::CirculateResult;
use crate::models::Client;

/// Main storage coordinator that provides access to records and the audit log
pub struct Storage {
    paths: CirculatePaths,
    audit: AuditLogger,
    pub clients: ClientRegistry,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CirculatePaths, settings: &Settings) -> CirculateResult<Self> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            clients: ClientRegistry::new(paths.ledger_file(&settings.ledger_file)),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CirculatePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> CirculateResult<()> {
        self.clients.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> CirculateResult<()> {
        self.clients.save()
    }

    /// Check if storage has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }

    /// Record a signup in the audit trail
    pub fn log_signup(&self, client: &Client) -> CirculateResult<()> {
        self.audit
            .log(&AuditEntry::signup(client.id.to_string(), client.name.clone()))
    }

    /// Record a successful login in the audit trail
    pub fn log_login(&self, client: &Client) -> CirculateResult<()> {
        self.audit
            .log(&AuditEntry::login(client.id.to_string(), client.name.clone()))
    }

    /// Record a rejected login attempt in the audit trail
    ///
    /// Only the attempted ID is recorded; the attempted password never
    /// reaches the log.
    pub fn log_login_denied(&self, attempted_id: &str) -> CirculateResult<()> {
        self.audit
            .log(&AuditEntry::login_denied(attempted_id.to_string()))
    }

    /// Record a profile edit in the audit trail
    pub fn log_profile_edit(
        &self,
        client: &Client,
        detail: Option<String>,
    ) -> CirculateResult<()> {
        self.audit.log(&AuditEntry::profile_edit(
            client.id.to_string(),
            client.name.clone(),
            detail,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CirculatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert_eq!(
            storage.clients.path(),
            &temp_dir.path().join("data").join("clients.txt")
        );
    }

    #[test]
    fn test_load_all_with_no_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CirculatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        storage.load_all().unwrap();
        assert_eq!(storage.clients.count().unwrap(), 0);
    }

    #[test]
    fn test_settings_pick_the_ledger_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CirculatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.ledger_file = "members.txt".to_string();

        let storage = Storage::new(paths, &settings).unwrap();
        assert_eq!(
            storage.clients.path(),
            &temp_dir.path().join("data").join("members.txt")
        );
    }
}
