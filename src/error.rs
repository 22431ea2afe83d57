#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use thiserror::Error;

/// Error code constants for type-safe error handling
pub mod code {
    pub const CONTRACT: &str = "CONTRACT";
    pub const INVALID: &str = "INVALID";
}

#[derive(Error, Debug)]
pub enum SettleError {
    #[error("Expected a failure reason but the result was a success")]
    ExpectedFailure,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown settlement status: {0}")]
    UnknownStatus(String),
}

impl SettleError {
    /// Returns the error code for this error
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ExpectedFailure => code::CONTRACT,
            Self::SerializationError(_) | Self::UnknownStatus(_) => code::INVALID,
        }
    }

    /// Contract violations are programmer errors and must not be retried.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ExpectedFailure)
    }
}

pub type Result<T> = std::result::Result<T, SettleError>;

#[cfg(test)]
mod tests {
    use super::{code, SettleError};

    #[test]
    fn expected_failure_is_a_contract_violation() {
        let err = SettleError::ExpectedFailure;
        assert_eq!(err.code(), code::CONTRACT);
        assert!(err.is_contract_violation());
        assert_eq!(
            err.to_string(),
            "Expected a failure reason but the result was a success"
        );
    }

    #[test]
    fn payload_errors_map_to_invalid() {
        let err = SettleError::UnknownStatus("pending".to_string());
        assert_eq!(err.code(), code::INVALID);
        assert!(!err.is_contract_violation());
        assert_eq!(err.to_string(), "Unknown settlement status: pending");
    }
}
