// ============================================================================
// Numeric Module
// Input values and the locale-aware string normalizer
// ============================================================================
//
// This module provides:
// - NumericValue: integer or decimal value handed to the word converter
// - FractionDigits / DecimalParts: positional fraction storage with sign
// - normalize / parse_numeric: Indonesian-notation string parsing
// - NumericError: the ways raw input can fail to become a value
//
// Design principles:
// - Fraction digits are kept as entered (no rounding, no float math)
// - All parsing returns Result (no panics)
// - Full i64 range for the integer part, including i64::MIN

mod errors;
mod normalize;
mod value;

pub use errors::{NumericError, NumericResult};
pub use normalize::{normalize, parse_literal, parse_numeric};
pub use value::{DecimalParts, FractionDigits, NumericValue};
