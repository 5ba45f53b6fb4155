//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Span name or code not in the recognized vocabulary
    #[error("Invalid span: {0}")]
    InvalidSpan(String),

    /// Weekday name could not be resolved
    #[error("Invalid weekday name: {0}")]
    InvalidWeekday(String),

    /// Adjustment token does not match the token grammar
    #[error("Invalid adjustment token: {0}")]
    InvalidAdjustment(String),

    /// Calendar fields do not form a representable date/time
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_span_error_message() {
        let err = DomainError::InvalidSpan("q".to_string());
        assert_eq!(err.to_string(), "Invalid span: q");
    }

    #[test]
    fn invalid_weekday_error_message() {
        let err = DomainError::InvalidWeekday("Mondy".to_string());
        assert_eq!(err.to_string(), "Invalid weekday name: Mondy");
    }

    #[test]
    fn invalid_adjustment_error_message() {
        let err = DomainError::InvalidAdjustment("+w".to_string());
        assert_eq!(err.to_string(), "Invalid adjustment token: +w");
    }

    #[test]
    fn invalid_datetime_error_message() {
        let err = DomainError::InvalidDateTime("2024-13-41".to_string());
        assert_eq!(err.to_string(), "Invalid date/time: 2024-13-41");
    }
}
