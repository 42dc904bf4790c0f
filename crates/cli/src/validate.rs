//! Typed input validation.
//!
//! These functions only classify a single line; retrying is the caller's
//! decision (see [`crate::Console`] for the blocking prompt loops).

use std::num::IntErrorKind;

use thiserror::Error;

/// Why a line of operator input was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Input cannot be empty. Please try again.")]
    Empty,

    #[error("Invalid input. Please enter a whole number.")]
    NotANumber,

    #[error("Number of copies must be a positive integer (1 or more).")]
    NotPositive,

    #[error("Number is too large for this system.")]
    TooLarge,
}

/// Trimmed text, provided something is left after trimming.
pub fn parse_non_empty(raw: &str) -> Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(trimmed.to_string())
}

/// A base-10 integer strictly greater than zero.
///
/// An optional leading sign is accepted. Negative values are `NotPositive`
/// however long they are.
pub fn parse_positive_integer(raw: &str) -> Result<u64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    match trimmed.parse::<i128>() {
        Ok(value) if value <= 0 => Err(InputError::NotPositive),
        Ok(value) => u64::try_from(value).map_err(|_| InputError::TooLarge),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Err(InputError::TooLarge),
            IntErrorKind::NegOverflow => Err(InputError::NotPositive),
            _ => Err(InputError::NotANumber),
        },
    }
}
