//! Account display formatting
//!
//! Formats the account and its audit history for terminal output.

use crate::audit::AuditEntry;
use crate::models::{format_amount, Account};

/// Format a single account's details
pub fn format_account_details(account: &Account, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.id));
    output.push_str(&format!(
        "  Balance:  {}\n",
        format_amount(account.balance(), symbol)
    ));
    output.push_str(&format!(
        "  Opened:   {}\n",
        account.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        account.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Format audit entries, one per line
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}
