//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod client;

pub use audit::handle_audit_command;
pub use client::{handle_client_command, ClientCommands};
