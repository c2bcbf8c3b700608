//! Audit entry data structures
//!
//! One entry per account operation, whether it went through or was rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;
use crate::models::{Account, AccountId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Account was opened
    Open,
    /// Money was deposited
    Deposit,
    /// Money was withdrawn
    Withdraw,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Open => write!(f, "OPEN"),
            Operation::Deposit => write!(f, "DEPOSIT"),
            Operation::Withdraw => write!(f, "WITHDRAW"),
        }
    }
}

/// Whether the operation changed the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Applied,
    Rejected,
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub account_id: AccountId,

    /// Requested amount (absent for `Open`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    pub balance_before: f64,

    pub balance_after: f64,

    pub outcome: Outcome,

    /// Rejection message, only for rejected operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditEntry {
    /// Entry for a freshly opened account
    pub fn opened(account: &Account) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Open,
            account_id: account.id,
            amount: None,
            balance_before: account.balance(),
            balance_after: account.balance(),
            outcome: Outcome::Applied,
            error: None,
        }
    }

    /// Entry for an operation that went through
    ///
    /// `account` is the state after the operation; `balance_before` is what
    /// the caller saw before it.
    pub fn applied(
        operation: Operation,
        account: &Account,
        amount: f64,
        balance_before: f64,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            account_id: account.id,
            amount: Some(amount),
            balance_before,
            balance_after: account.balance(),
            outcome: Outcome::Applied,
            error: None,
        }
    }

    /// Entry for an operation the account refused
    pub fn rejected(
        operation: Operation,
        account: &Account,
        amount: f64,
        cause: &InvalidArgument,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            account_id: account.id,
            // NaN/inf have no JSON form
            amount: amount.is_finite().then_some(amount),
            balance_before: account.balance(),
            balance_after: account.balance(),
            outcome: Outcome::Rejected,
            error: Some(cause.to_string()),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.account_id
        );

        if let Some(amount) = self.amount {
            output.push_str(&format!(" {:.2}", amount));
        }

        match (&self.outcome, &self.error) {
            (Outcome::Rejected, Some(error)) => {
                output.push_str(&format!(" REJECTED: {}", error));
            }
            _ => {
                output.push_str(&format!(
                    " {:.2} -> {:.2}",
                    self.balance_before, self.balance_after
                ));
            }
        }

        output
    }
}
