//! Strongly-typed ID wrapper for client records
//!
//! Using a newtype wrapper keeps client IDs from being confused with other
//! strings at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a client record
///
/// Wraps a random (v4) UUID. The full hyphenated form is user-facing: it is
/// shown once at signup and typed back in at login, so `Display` renders the
/// complete canonical lowercase form rather than a shortened handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Check whether this is the all-zeros UUID
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Parse an ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ClientId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ClientId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_creation() {
        let id = ClientId::new();
        assert!(!id.is_nil());
    }

    #[test]
    fn test_id_display_is_full_canonical_form() {
        let id = ClientId::new();
        let display = format!("{}", id);
        assert_eq!(display.len(), 36); // 32 hex digits + 4 hyphens
        assert_eq!(display, display.to_lowercase());

        let dash_positions: Vec<usize> = display
            .char_indices()
            .filter(|(_, c)| *c == '-')
            .map(|(i, _)| i)
            .collect();
        assert_eq!(dash_positions, vec![8, 13, 18, 23]);
    }

    #[test]
    fn test_id_equality() {
        let id1 = ClientId::new();
        let id2 = id1;
        assert_eq!(id1, id2);

        let id3 = ClientId::new();
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_serialization() {
        let id = ClientId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ClientId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse_round_trip() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = ClientId::parse(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        assert!(ClientId::parse("not-a-uuid").is_err());
        assert!(ClientId::parse("").is_err());
    }
}
