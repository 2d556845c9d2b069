//! Error types for the unit converter.
//!
//! This module defines the centralized error type [`ConverterError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. The conversion
//! engine itself never fails; errors only come from input validation, configuration
//! loading, I/O and a poisoned session lock.

use thiserror::Error;

/// User-facing message shown when a conversion request is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid number and select units";

/// The main error type for unit converter operations.
///
/// # Examples
///
/// ```
/// use unit_converter::domain::{ConverterError, InvalidInput};
///
/// let err = ConverterError::InvalidInput(InvalidInput::MissingInputUnit);
/// assert_eq!(err.to_string(), "Please enter a valid number and select units");
/// ```
#[derive(Debug, Error)]
pub enum ConverterError {
    /// The conversion request did not pass validation.
    ///
    /// Displays as the single advisory message the front end shows to the user.
    /// The wrapped [`InvalidInput`] names the check that failed.
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput(InvalidInput),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A category name did not match any of the supported categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A thread panicked while holding the shared session lock.
    #[error("Session state is poisoned")]
    SessionPoisoned,
}

impl ConverterError {
    /// Returns `true` for errors that are recovered locally by showing a notice.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// The specific validation check a conversion request failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The input text does not parse as a real number.
    #[error("input {0:?} is not a number")]
    NotANumber(String),

    /// No source unit is selected.
    #[error("no input unit selected")]
    MissingInputUnit,

    /// No target unit is selected.
    #[error("no output unit selected")]
    MissingOutputUnit,
}

/// A specialized `Result` type for unit converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_share_the_user_message() {
        for reason in [
            InvalidInput::NotANumber("abc".to_string()),
            InvalidInput::MissingInputUnit,
            InvalidInput::MissingOutputUnit,
        ] {
            let err = ConverterError::InvalidInput(reason);
            assert!(err.is_validation());
            assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
        }
    }

    #[test]
    fn reasons_describe_the_failed_check() {
        assert_eq!(
            InvalidInput::NotANumber("x1".to_string()).to_string(),
            "input \"x1\" is not a number"
        );
        assert!(!ConverterError::Config("bad".to_string()).is_validation());
    }
}
