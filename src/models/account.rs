//! Account model
//!
//! A single balance that only changes through [`Account::deposit`] and
//! [`Account::withdraw`]. Both reject invalid input before touching the
//! balance, so `balance >= 0` holds after every call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use crate::error::InvalidArgument;

/// A bank account holding one non-negative balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Funds currently available
    balance: f64,

    /// When the account was opened
    pub created_at: DateTime<Utc>,

    /// When the balance last changed
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account with a zero balance
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            balance: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deposit `amount` into the account
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::NegativeAmount`] if `amount < 0`.
    /// [`InvalidArgument::NotFinite`] if the new balance would overflow to
    /// infinity. The balance is left untouched in both cases.
    pub fn deposit(&mut self, amount: f64) -> Result<(), InvalidArgument> {
        check_amount(amount)?;

        let next = self.balance + amount;
        if !next.is_finite() {
            return Err(InvalidArgument::NotFinite);
        }

        self.balance = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Withdraw `amount` from the account
    ///
    /// Returns `Ok(true)` on success. Every failure is reported as an error,
    /// so `Ok(false)` is never produced; the boolean is kept so callers can
    /// treat the result as "did the withdrawal happen".
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::NegativeAmount`] if `amount < 0`, checked first.
    /// [`InvalidArgument::InsufficientBalance`] if `amount` exceeds the
    /// balance.
    pub fn withdraw(&mut self, amount: f64) -> Result<bool, InvalidArgument> {
        check_amount(amount)?;

        if self.balance < amount {
            return Err(InvalidArgument::InsufficientBalance);
        }

        self.balance -= amount;
        self.updated_at = Utc::now();
        Ok(true)
    }

    /// Current balance
    pub fn balance(&self) -> f64 {
        self.balance
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.id, self.balance)
    }
}

fn check_amount(amount: f64) -> Result<(), InvalidArgument> {
    if !amount.is_finite() {
        return Err(InvalidArgument::NotFinite);
    }
    if amount < 0.0 {
        return Err(InvalidArgument::NegativeAmount);
    }
    Ok(())
}
