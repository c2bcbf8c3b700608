//! bank-account - a single in-memory bank account
//!
//! An [`Account`] holds one balance that never goes below zero. Deposits
//! and withdrawals are checked before they touch the balance, and rejected
//! with an [`InvalidArgument`] when the amount is negative or the balance
//! is too small.
//!
//! # Architecture
//!
//! - `models`: the account, its id, amount parsing/formatting
//! - `error`: error types
//! - `services`: applies operations and writes the audit trail
//! - `audit`: append-only JSONL operation log
//! - `config`: settings and path resolution
//! - `cli` / `display`: command handlers and terminal output
//!
//! # Example
//!
//! ```
//! use bank_account::{Account, InvalidArgument};
//!
//! let mut account = Account::new();
//! account.deposit(1000.0)?;
//! assert_eq!(account.withdraw(500.0), Ok(true));
//! assert_eq!(account.balance(), 500.0);
//! assert_eq!(account.withdraw(501.0), Err(InvalidArgument::InsufficientBalance));
//! # Ok::<(), InvalidArgument>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{BankError, BankResult, InvalidArgument};
pub use models::Account;
