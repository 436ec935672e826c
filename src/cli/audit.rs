//! CLI command for the audit trail
//!
//! Prints recent audit entries in human-readable form.

use crate::error::CirculateResult;
use crate::storage::Storage;

/// Handle the audit command
pub fn handle_audit_command(storage: &Storage, limit: usize) -> CirculateResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries recorded.");
        return Ok(());
    }

    println!("Audit log: {}", storage.audit().path().display());
    println!();

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
