//! Audit logging system for circulate
//!
//! Records signup, login, and profile-edit events in an append-only audit
//! log.
//!
//! # Architecture
//!
//! The audit system consists of two components:
//!
//! - `AuditEntry`: Represents a single audit log entry with timestamp,
//!   session event, and client information. Entries never carry passwords.
//! - `AuditLogger`: Handles writing entries to the audit log file using a
//!   line-delimited JSON format (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use circulate::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//!
//! // Log a signup
//! let entry = AuditEntry::signup(client.id.to_string(), client.name.clone());
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
