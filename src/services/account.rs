//! Account service
//!
//! Runs operations against an [`Account`] and records each one in the audit
//! log when a logger is attached.

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::error::BankResult;
use crate::models::Account;

/// Service for account operations
pub struct AccountService<'a> {
    account: &'a mut Account,
    audit: Option<&'a AuditLogger>,
}

impl<'a> AccountService<'a> {
    /// Create a service without auditing
    pub fn new(account: &'a mut Account) -> Self {
        Self {
            account,
            audit: None,
        }
    }

    /// Create a service that appends every operation to `logger`
    pub fn with_audit(account: &'a mut Account, logger: &'a AuditLogger) -> Self {
        Self {
            account,
            audit: Some(logger),
        }
    }

    /// Record that the account was opened
    pub fn open(&self) -> BankResult<()> {
        self.record(&AuditEntry::opened(self.account))
    }

    /// Deposit `amount`
    ///
    /// A rejected deposit is audited and then returned as
    /// [`BankError::InvalidArgument`](crate::error::BankError::InvalidArgument).
    pub fn deposit(&mut self, amount: f64) -> BankResult<()> {
        let before = self.account.balance();

        match self.account.deposit(amount) {
            Ok(()) => self.record(&AuditEntry::applied(
                Operation::Deposit,
                self.account,
                amount,
                before,
            )),
            Err(cause) => {
                self.record(&AuditEntry::rejected(
                    Operation::Deposit,
                    self.account,
                    amount,
                    &cause,
                ))?;
                Err(cause.into())
            }
        }
    }

    /// Withdraw `amount`, returning `true` once it has gone through
    pub fn withdraw(&mut self, amount: f64) -> BankResult<bool> {
        let before = self.account.balance();

        match self.account.withdraw(amount) {
            Ok(done) => {
                self.record(&AuditEntry::applied(
                    Operation::Withdraw,
                    self.account,
                    amount,
                    before,
                ))?;
                Ok(done)
            }
            Err(cause) => {
                self.record(&AuditEntry::rejected(
                    Operation::Withdraw,
                    self.account,
                    amount,
                    &cause,
                ))?;
                Err(cause.into())
            }
        }
    }

    /// Current balance
    pub fn balance(&self) -> f64 {
        self.account.balance()
    }

    pub fn account(&self) -> &Account {
        self.account
    }

    fn record(&self, entry: &AuditEntry) -> BankResult<()> {
        match self.audit {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }
}
