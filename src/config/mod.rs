//! Configuration module for circulate
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CirculatePaths;
pub use settings::Settings;
