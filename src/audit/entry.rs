//! Audit entry data structures
//!
//! Defines the structure of audit log entries: the session events that get
//! recorded and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of session events that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// A new client registered
    Signup,
    /// A client authenticated successfully
    Login,
    /// A login attempt was rejected
    LoginDenied,
    /// A client edited their profile
    ProfileEdit,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Signup => write!(f, "SIGNUP"),
            Operation::Login => write!(f, "LOGIN"),
            Operation::LoginDenied => write!(f, "LOGIN DENIED"),
            Operation::ProfileEdit => write!(f, "PROFILE EDIT"),
        }
    }
}

/// A single audit log entry
///
/// Entries carry the client ID and name but never a password: the ledger
/// stores credentials in plain text, the audit trail must not repeat them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// The session event
    pub operation: Operation,

    /// Rendered ID of the client involved; the attempted ID for denied logins
    pub client_id: String,

    /// Client display name, when the event matched a known record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    /// Human-readable summary of what changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    /// Create an entry for a signup
    pub fn signup(client_id: impl Into<String>, client_name: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Signup,
            client_id: client_id.into(),
            client_name: Some(client_name.into()),
            detail: None,
        }
    }

    /// Create an entry for a successful login
    pub fn login(client_id: impl Into<String>, client_name: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Login,
            client_id: client_id.into(),
            client_name: Some(client_name.into()),
            detail: None,
        }
    }

    /// Create an entry for a rejected login attempt
    pub fn login_denied(attempted_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::LoginDenied,
            client_id: attempted_id.into(),
            client_name: None,
            detail: None,
        }
    }

    /// Create an entry for a profile edit
    pub fn profile_edit(
        client_id: impl Into<String>,
        client_name: impl Into<String>,
        detail: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::ProfileEdit,
            client_id: client_id.into(),
            client_name: Some(client_name.into()),
            detail,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.client_id
        );

        if let Some(name) = &self.client_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(detail) = &self.detail {
            output.push_str(&format!("\n  Changes: {}", detail));
        }

        output
    }
}
