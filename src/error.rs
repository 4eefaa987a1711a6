//! Error types for parameter validation, loading and reporting

use thiserror::Error;

/// Input rejected before any year is projected
///
/// Variants are listed in the order the checks run; the first failing check wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Initial investment amount must be at least zero!")]
    NegativeInitialAmount,

    #[error("No valid amount of years provided.")]
    NegativeDuration,

    #[error("Expected return must be at least zero.")]
    NegativeExpectedReturn,
}

/// Errors raised while loading parameters or writing reports
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Projection failed: {0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_amount_message_names_field() {
        let msg = ValidationError::NegativeInitialAmount.to_string();
        assert!(msg.contains("Initial investment amount"));
    }

    #[test]
    fn test_validation_converts_into_error() {
        let err: Error = ValidationError::NegativeDuration.into();
        assert_eq!(
            err.to_string(),
            "Projection failed: No valid amount of years provided."
        );
    }
}
