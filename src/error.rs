//! Error types for bank-account
//!
//! Account operations fail with [`InvalidArgument`]. Everything else the
//! crate does (settings, audit log, CLI parsing) reports through
//! [`BankError`], which wraps `InvalidArgument` transparently.

use thiserror::Error;

/// Why an account operation was rejected
///
/// The messages are part of the public contract; callers match on them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The amount was below zero
    #[error("La cantidad no puede ser negativa")]
    NegativeAmount,

    /// A withdrawal asked for more than the current balance
    #[error("El saldo es insuficiente")]
    InsufficientBalance,

    /// The amount was NaN or infinite, or the balance would overflow
    #[error("La cantidad debe ser un número finito")]
    NotFinite,
}

/// The main error type for bank-account operations
#[derive(Error, Debug)]
pub enum BankError {
    /// An account operation was rejected
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed user input (amounts, operation tokens)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl BankError {
    /// Check if this error came from a rejected account operation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// The rejection cause, if this is an account rejection
    pub fn invalid_argument(&self) -> Option<&InvalidArgument> {
        match self {
            Self::InvalidArgument(cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for bank-account operations
pub type BankResult<T> = Result<T, BankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_messages() {
        assert_eq!(
            InvalidArgument::NegativeAmount.to_string(),
            "La cantidad no puede ser negativa"
        );
        assert_eq!(
            InvalidArgument::InsufficientBalance.to_string(),
            "El saldo es insuficiente"
        );
    }

    #[test]
    fn test_wrapped_message_is_unchanged() {
        let err: BankError = InvalidArgument::InsufficientBalance.into();
        assert_eq!(err.to_string(), "El saldo es insuficiente");
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.invalid_argument(),
            Some(&InvalidArgument::InsufficientBalance)
        );
    }

    #[test]
    fn test_error_display() {
        let err = BankError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
        assert!(!err.is_invalid_argument());
        assert_eq!(err.invalid_argument(), None);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let bank_err: BankError = io_err.into();
        assert!(matches!(bank_err, BankError::Io(_)));
    }
}
