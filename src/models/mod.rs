//! Core data models for bank-account
//!
//! The account itself, its identifier, and helpers for reading and printing
//! amounts.

pub mod account;
pub mod amount;
pub mod ids;

pub use account::Account;
pub use amount::{format_amount, parse_amount, AmountParseError};
pub use ids::AccountId;
