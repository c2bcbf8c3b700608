//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod account;
pub mod operation;

pub use account::{handle_history_command, handle_run_command, RunArgs, RunReport};
pub use operation::AccountOp;
