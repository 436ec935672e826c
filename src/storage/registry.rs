//! Client registry backed by the flat-text ledger
//!
//! Holds every client record for the session in memory, in ledger order.
//! Insertion order is part of the contract: records are listed and matched
//! in the order they were signed up, and the ledger file preserves it.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{CirculateError, CirculateResult};
use crate::models::{Client, ClientId};

use super::ledger::{self, TextRecord, WriteMode};

/// Repository for client persistence
pub struct ClientRegistry {
    path: PathBuf,
    data: RwLock<Vec<Client>>,
}

impl ClientRegistry {
    /// Create a new client registry over the given ledger file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing ledger file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load clients from the ledger file
    ///
    /// A ledger that does not exist yet is an empty registry, not an error.
    pub fn load(&self) -> CirculateResult<()> {
        let clients = if self.path.exists() {
            ledger::read_all(&self.path)?
        } else {
            Vec::new()
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| CirculateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = clients;
        Ok(())
    }

    /// Rewrite the ledger file so it matches the registry
    pub fn save(&self) -> CirculateResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| CirculateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        ledger::write_all(&self.path, &data)
    }

    /// Append one client block to the ledger file without rewriting the rest
    pub fn append(&self, client: &Client) -> CirculateResult<()> {
        client.persist(&self.path, WriteMode::Append)
    }

    /// Add a new client, rejecting a duplicate ID
    pub fn add(&self, client: Client) -> CirculateResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CirculateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.iter().any(|c| c.id == client.id) {
            return Err(CirculateError::duplicate_client(client.id.to_string()));
        }

        data.push(client);
        Ok(())
    }

    /// Replace the record with the same ID in place, or append a new one
    pub fn upsert(&self, client: Client) -> CirculateResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CirculateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|c| c.id == client.id) {
            Some(slot) => *slot = client,
            None => data.push(client),
        }
        Ok(())
    }

    /// Get a client by ID
    pub fn get(&self, id: ClientId) -> CirculateResult<Option<Client>> {
        let data = self
            .data
            .read()
            .map_err(|e| CirculateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|c| c.id == id).cloned())
    }

    /// Get a client by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> CirculateResult<Option<Client>> {
        let data = self
            .data
            .read()
            .map_err(|e| CirculateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// First client whose rendered ID and password both match exactly
    ///
    /// Credentials are compared character for character: an uppercase hex
    /// digit in the typed ID is a mismatch, not an alias.
    pub fn find_by_credentials(&self, id: &str, password: &str) -> CirculateResult<Option<Client>> {
        let data = self
            .data
            .read()
            .map_err(|e| CirculateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .find(|c| c.id.to_string() == id && c.password == password)
            .cloned())
    }

    /// Get all clients in ledger order
    pub fn get_all(&self) -> CirculateResult<Vec<Client>> {
        let data = self
            .data
            .read()
            .map_err(|e| CirculateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Count clients
    pub fn count(&self) -> CirculateResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| CirculateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
