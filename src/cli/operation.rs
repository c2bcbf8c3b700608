//! Operation tokens accepted by `account run`
//!
//! Tokens look like `deposit:35`, `withdraw:500` or `balance`.

use std::fmt;
use std::str::FromStr;

use crate::error::BankError;
use crate::models::parse_amount;

/// One step of a `run` sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountOp {
    Deposit(f64),
    Withdraw(f64),
    Balance,
}

impl FromStr for AccountOp {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, amount) = match s.split_once(':') {
            Some((name, amount)) => (name, Some(amount)),
            None => (s, None),
        };

        let parse = |amount: Option<&str>| -> Result<f64, BankError> {
            let amount = amount.ok_or_else(|| {
                BankError::Parse(format!("'{}' needs an amount, e.g. '{}:100'", s, name))
            })?;
            parse_amount(amount).map_err(|e| BankError::Parse(e.to_string()))
        };

        match name.to_lowercase().as_str() {
            "deposit" | "d" => Ok(Self::Deposit(parse(amount)?)),
            "withdraw" | "w" => Ok(Self::Withdraw(parse(amount)?)),
            "balance" | "b" if amount.is_none() => Ok(Self::Balance),
            "balance" | "b" => Err(BankError::Parse(format!(
                "'balance' takes no amount: '{}'",
                s
            ))),
            _ => Err(BankError::Parse(format!(
                "Unknown operation: '{}'. Valid operations: deposit:<amount>, withdraw:<amount>, balance",
                s
            ))),
        }
    }
}

impl fmt::Display for AccountOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit(amount) => write!(f, "deposit {:.2}", amount),
            Self::Withdraw(amount) => write!(f, "withdraw {:.2}", amount),
            Self::Balance => write!(f, "balance"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operations() {
        assert_eq!("deposit:35".parse::<AccountOp>().unwrap(), AccountOp::Deposit(35.0));
        assert_eq!("withdraw:$500".parse::<AccountOp>().unwrap(), AccountOp::Withdraw(500.0));
        assert_eq!("W:2.5".parse::<AccountOp>().unwrap(), AccountOp::Withdraw(2.5));
        assert_eq!("balance".parse::<AccountOp>().unwrap(), AccountOp::Balance);
    }

    #[test]
    fn test_negative_amounts_parse() {
        assert_eq!("deposit:-3".parse::<AccountOp>().unwrap(), AccountOp::Deposit(-3.0));
        assert_eq!(
            "withdraw:-100".parse::<AccountOp>().unwrap(),
            AccountOp::Withdraw(-100.0)
        );
    }

    #[test]
    fn test_invalid_tokens() {
        for token in ["transfer:5", "deposit", "deposit:abc", "balance:3", ""] {
            let err = token.parse::<AccountOp>().unwrap_err();
            assert!(matches!(err, BankError::Parse(_)), "token {:?}", token);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(AccountOp::Deposit(35.0).to_string(), "deposit 35.00");
        assert_eq!(AccountOp::Balance.to_string(), "balance");
    }
}
