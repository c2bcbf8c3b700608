//! Audit logging for bank-account
//!
//! Every deposit and withdrawal, applied or rejected, is appended to a
//! line-delimited JSON log together with the balance before and after.
//!
//! # Example
//!
//! ```rust,ignore
//! use bank_account::audit::{AuditEntry, AuditLogger, Operation};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let before = account.balance();
//! account.deposit(35.0)?;
//! logger.log(&AuditEntry::applied(Operation::Deposit, &account, 35.0, before))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation, Outcome};
pub use logger::AuditLogger;
