//! Session service
//!
//! Provides business logic for the signup, login, and profile-edit flows on
//! top of the client registry.

use crate::error::{CirculateError, CirculateResult};
use crate::models::{Client, ClientId};
use crate::storage::Storage;

/// Fields collected at signup
#[derive(Debug, Clone)]
pub struct SignupInput {
    pub name: String,
    pub password: String,
    pub phone_number: String,
}

/// Replacement fields applied by a confirmed profile edit
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: String,
    pub password: String,
    pub phone_number: String,
}

/// Service for client sessions
pub struct SessionService<'a> {
    storage: &'a Storage,
}

impl<'a> SessionService<'a> {
    /// Create a new session service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new client
    ///
    /// Generates the ID, adds the record to the registry, appends its block
    /// to the ledger, and audits the signup. The caller shows the returned
    /// client's ID to the user; it is their login credential.
    pub fn signup(&self, input: SignupInput) -> CirculateResult<Client> {
        let client = Client::new(input.name, input.password, input.phone_number);

        // Validate
        client
            .validate()
            .map_err(|e| CirculateError::Validation(e.to_string()))?;

        // Save to storage
        self.storage.clients.add(client.clone())?;
        self.storage.clients.append(&client)?;

        // Audit log
        self.storage.log_signup(&client)?;

        Ok(client)
    }

    /// Authenticate a client by ID and password
    ///
    /// Both values must match a stored record exactly. A miss is an outcome,
    /// not an error: the caller gets `Ok(None)` and decides what to tell the
    /// user. Every attempt lands in the audit trail either way.
    pub fn login(&self, id: &str, password: &str) -> CirculateResult<Option<Client>> {
        match self.storage.clients.find_by_credentials(id, password)? {
            Some(client) => {
                self.storage.log_login(&client)?;
                Ok(Some(client))
            }
            None => {
                self.storage.log_login_denied(id)?;
                Ok(None)
            }
        }
    }

    /// Replace a client's name, password, and phone number
    ///
    /// Edits are copy-then-commit: the update is validated against a copy
    /// and nothing is stored unless every step succeeds. The whole ledger is
    /// rewritten afterwards so the file matches the registry.
    pub fn update_profile(&self, id: ClientId, update: ProfileUpdate) -> CirculateResult<Client> {
        let mut client = self
            .storage
            .clients
            .get(id)?
            .ok_or_else(|| CirculateError::client_not_found(id.to_string()))?;

        let previous_name = client.name.clone();
        client.name = update.name;
        client.password = update.password;
        client.phone_number = update.phone_number;

        // Validate
        client
            .validate()
            .map_err(|e| CirculateError::Validation(e.to_string()))?;

        // Save to storage
        self.storage.clients.upsert(client.clone())?;
        self.storage.clients.save()?;

        // Audit log; the diff mentions the rename but never the password
        let detail = if previous_name != client.name {
            Some(format!("name: {} -> {}", previous_name, client.name))
        } else {
            None
        };
        self.storage.log_profile_edit(&client, detail)?;

        Ok(client)
    }

    /// Get a client by ID
    pub fn get(&self, id: ClientId) -> CirculateResult<Option<Client>> {
        self.storage.clients.get(id)
    }

    /// Find a client by name or ID string
    pub fn find(&self, identifier: &str) -> CirculateResult<Option<Client>> {
        // Try parsing as ID first; the full form is unambiguous
        if let Ok(id) = identifier.parse::<ClientId>() {
            if let Some(client) = self.storage.clients.get(id)? {
                return Ok(Some(client));
            }
        }

        // Fall back to name lookup
        self.storage.clients.get_by_name(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::CirculatePaths;
    use crate::config::settings::Settings;
    use crate::storage::ledger;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CirculatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn ann_input() -> SignupInput {
        SignupInput {
            name: "Ann".to_string(),
            password: "p1".to_string(),
            phone_number: "555-1234".to_string(),
        }
    }

    #[test]
    fn test_signup_adds_and_persists() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        let client = service.signup(ann_input()).unwrap();

        // In the registry
        assert_eq!(storage.clients.count().unwrap(), 1);

        // On disk immediately, without an explicit save
        let on_disk = ledger::read_all(storage.clients.path()).unwrap();
        assert_eq!(on_disk, vec![client]);
    }

    #[test]
    fn test_signup_rejects_line_breaks() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        let mut input = ann_input();
        input.name = "two\nlines".to_string();

        let err = service.signup(input).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.clients.count().unwrap(), 0);
    }

    #[test]
    fn test_signup_then_login() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        let client = service.signup(ann_input()).unwrap();
        let id = client.id.to_string();

        let logged_in = service.login(&id, "p1").unwrap();
        assert_eq!(logged_in, Some(client));

        assert!(service.login(&id, "wrong").unwrap().is_none());
        assert!(service.login("no-such-id", "p1").unwrap().is_none());
    }

    #[test]
    fn test_login_on_empty_store_misses() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        assert!(service.login("anything", "anything").unwrap().is_none());
    }

    #[test]
    fn test_update_profile_rewrites_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        let ann = service.signup(ann_input()).unwrap();
        let bob = service
            .signup(SignupInput {
                name: "Bob".to_string(),
                password: "p2".to_string(),
                phone_number: "555-5678".to_string(),
            })
            .unwrap();

        let updated = service
            .update_profile(
                ann.id,
                ProfileUpdate {
                    name: "Anna".to_string(),
                    password: "p9".to_string(),
                    phone_number: "555-0000".to_string(),
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Anna");
        assert_eq!(updated.password, "p9");
        assert_eq!(updated.id, ann.id);

        // Registry position and neighbour untouched
        let all = storage.clients.get_all().unwrap();
        assert_eq!(all[0].name, "Anna");
        assert_eq!(all[1], bob);

        // Ledger matches the registry
        let on_disk = ledger::read_all(storage.clients.path()).unwrap();
        assert_eq!(on_disk, all);

        // Old credentials no longer work, new ones do
        let id = ann.id.to_string();
        assert!(service.login(&id, "p1").unwrap().is_none());
        assert!(service.login(&id, "p9").unwrap().is_some());
    }

    #[test]
    fn test_update_profile_unknown_client() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        let err = service
            .update_profile(
                ClientId::new(),
                ProfileUpdate {
                    name: "Anna".to_string(),
                    password: "p9".to_string(),
                    phone_number: "555-0000".to_string(),
                },
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_profile_rejects_invalid_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        let ann = service.signup(ann_input()).unwrap();
        let err = service
            .update_profile(
                ann.id,
                ProfileUpdate {
                    name: "Anna".to_string(),
                    password: "p\n9".to_string(),
                    phone_number: "555-0000".to_string(),
                },
            )
            .unwrap_err();
        assert!(err.is_validation());

        // Nothing committed
        let stored = storage.clients.get(ann.id).unwrap().unwrap();
        assert_eq!(stored.password, "p1");
    }

    #[test]
    fn test_find_by_id_or_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        let ann = service.signup(ann_input()).unwrap();

        let by_id = service.find(&ann.id.to_string()).unwrap();
        assert_eq!(by_id.as_ref().map(|c| c.id), Some(ann.id));

        let by_name = service.find("ann").unwrap();
        assert_eq!(by_name.map(|c| c.id), Some(ann.id));

        assert!(service.find("missing").unwrap().is_none());
    }

    #[test]
    fn test_audit_trail_of_a_session() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        let ann = service.signup(ann_input()).unwrap();
        let id = ann.id.to_string();
        service.login(&id, "p1").unwrap();
        service.login(&id, "wrong").unwrap();
        service
            .update_profile(
                ann.id,
                ProfileUpdate {
                    name: "Anna".to_string(),
                    password: "p1".to_string(),
                    phone_number: "555-1234".to_string(),
                },
            )
            .unwrap();

        let ops: Vec<Operation> = storage
            .audit()
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(
            ops,
            vec![
                Operation::Signup,
                Operation::Login,
                Operation::LoginDenied,
                Operation::ProfileEdit,
            ]
        );
    }
}
