//! Core data models for circulate
//!
//! This module contains the data structures that represent the lending
//! domain: clients and their identifiers.

pub mod client;
pub mod ids;

pub use client::{Client, ClientValidationError};
pub use ids::ClientId;
