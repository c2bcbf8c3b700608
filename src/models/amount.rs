//! Amount parsing and formatting
//!
//! Balances are plain `f64` values. This module turns user text into amounts
//! and amounts back into display strings.

use std::fmt;

/// Parse an amount from a string
///
/// Accepts formats: "10.50", "-10.50", "$10.50", "-$3", "35". The sign is
/// kept; deciding whether a negative amount is acceptable is the account's
/// job, not the parser's.
pub fn parse_amount(s: &str) -> Result<f64, AmountParseError> {
    let trimmed = s.trim();

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };

    let rest = rest.strip_prefix('$').unwrap_or(rest);

    // Only plain decimal notation; rules out "inf", "NaN", "1e3" and friends
    let well_formed = !rest.is_empty()
        && rest.chars().all(|c| c.is_ascii_digit() || c == '.')
        && rest.chars().any(|c| c.is_ascii_digit())
        && rest.matches('.').count() <= 1;
    if !well_formed {
        return Err(AmountParseError::InvalidFormat(s.to_string()));
    }

    let value: f64 = rest
        .parse()
        .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

    Ok(if negative { -value } else { value })
}

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: '{}'", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
