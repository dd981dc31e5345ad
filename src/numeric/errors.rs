// ============================================================================
// Numeric Errors
// Error types for turning raw input into a spellable value
// ============================================================================

use std::fmt;

/// Errors that can occur while turning raw input into a [`NumericValue`].
///
/// The string-returning entry points never surface these; they render the
/// sentinel [`INVALID_SENTINEL`] instead.
///
/// [`NumericValue`]: super::NumericValue
/// [`INVALID_SENTINEL`]: crate::words::INVALID_SENTINEL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not an integer or decimal literal after normalization
    InvalidInput,
    /// Integer part does not fit in i64
    Overflow,
    /// Floating-point input is NaN or infinite
    NonFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::Overflow => {
                write!(f, "overflow: integer part exceeds the signed 64-bit range")
            },
            NumericError::NonFinite => write!(f, "non-finite value: NaN or infinity"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric parsing and conversion
pub type NumericResult<T> = Result<T, NumericError>;
