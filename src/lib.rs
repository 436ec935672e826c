//! Circulate - Terminal-based client management for small lending libraries
//!
//! This library provides the core functionality for the Circulate client
//! management application. It keeps a flat-text ledger of library clients,
//! lets clients sign up and log in through an interactive numbered menu, and
//! records every account operation in an append-only audit log.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (clients and their IDs)
//! - `storage`: Flat-text ledger storage layer
//! - `services`: Business logic layer (signup, login, profile edits)
//! - `menu`: Interactive console menu engine and screens
//! - `display`: Output formatting for tables and detail views
//! - `audit`: Audit logging system
//! - `cli`: Non-interactive command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use circulate::config::{CirculatePaths, Settings};
//!
//! let paths = CirculatePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CirculateError, CirculateResult};
