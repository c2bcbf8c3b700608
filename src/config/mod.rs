//! Configuration module for bank-account
//!
//! This module provides:
//! - Path resolution for the settings file and audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AccountPaths;
pub use settings::Settings;
