//! Business logic layer
//!
//! Sits between the CLI and the models: applies operations and writes the
//! audit trail.

pub mod account;

pub use account::AccountService;
