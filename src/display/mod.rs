//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables and detail views.

pub mod client;

pub use client::{format_client_details, format_client_list};
