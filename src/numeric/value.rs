// ============================================================================
// Numeric Value
// Tagged integer / decimal value handed to the word converter
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::normalize::{parse_literal, parse_numeric};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Fraction Digits
// ============================================================================

/// Fractional digits exactly as entered, most significant first.
///
/// Each digit is spoken on its own ("0.56" reads "nol koma lima enam"), so
/// the digits are never collapsed into a magnitude and never rounded.
/// Trailing zeros are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FractionDigits(SmallVec<[u8; 8]>);

impl FractionDigits {
    /// Build from a run of ASCII digits.
    ///
    /// # Errors
    /// Returns `InvalidInput` if any character is not `0`-`9`.
    pub fn from_ascii(digits: &str) -> NumericResult<Self> {
        digits
            .bytes()
            .map(|b| {
                if b.is_ascii_digit() {
                    Ok(b - b'0')
                } else {
                    Err(NumericError::InvalidInput)
                }
            })
            .collect::<NumericResult<SmallVec<[u8; 8]>>>()
            .map(Self)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Decimal Parts
// ============================================================================

/// Signed integer part plus positional fraction digits.
///
/// The sign lives on the integer part alone, so `-0.5` is stored as
/// `(0, [5])` and reads "nol koma lima".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalParts {
    integer: i64,
    fraction: FractionDigits,
}

impl DecimalParts {
    /// Create from a signed integer part and its fraction digits.
    pub fn new(integer: i64, fraction: FractionDigits) -> Self {
        Self { integer, fraction }
    }

    #[inline]
    pub fn integer_part(&self) -> i64 {
        self.integer
    }

    #[inline]
    pub fn fraction(&self) -> &FractionDigits {
        &self.fraction
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.integer < 0
    }
}

// ============================================================================
// Numeric Value
// ============================================================================

/// A value ready to be spelled out.
///
/// Constructed fresh per conversion and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericValue {
    /// Whole number across the full i64 range
    Integer(i64),
    /// Integer part with positional fraction digits
    Decimal(DecimalParts),
}

impl NumericValue {
    /// Shorthand for a decimal value with the given integer part and ASCII
    /// fraction digits.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `fraction` contains a non-digit.
    pub fn decimal(integer: i64, fraction: &str) -> NumericResult<Self> {
        Ok(Self::Decimal(DecimalParts::new(
            integer,
            FractionDigits::from_ascii(fraction)?,
        )))
    }

    /// Spelled-out Indonesian words, joined by single spaces.
    pub fn to_words(&self) -> String {
        crate::words::words(self).to_string()
    }

    /// Whether the value is below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(n) => *n < 0,
            Self::Decimal(parts) => parts.is_negative(),
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::words::words(self))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for NumericValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<DecimalParts> for NumericValue {
    #[inline]
    fn from(parts: DecimalParts) -> Self {
        Self::Decimal(parts)
    }
}

impl TryFrom<f64> for NumericValue {
    type Error = NumericError;

    /// Convert through the shortest round-trip decimal rendering, so
    /// `1234.56` yields the fraction digits `5 6`.
    ///
    /// A whole float renders without a fraction (`1.0` becomes `"1"`), so it
    /// reads "satu" rather than "satu koma nol". Use a string such as `"1,0"`
    /// or a scaled `Decimal` to have the zero spoken.
    ///
    /// # Errors
    /// - `NonFinite` for NaN or infinity
    /// - `Overflow` if the integer part does not fit in i64
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }
        parse_literal(&value.to_string())
    }
}

impl TryFrom<f32> for NumericValue {
    type Error = NumericError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }
        // f32's own rendering; widening first would expose binary noise
        parse_literal(&value.to_string())
    }
}

impl TryFrom<Decimal> for NumericValue {
    type Error = NumericError;

    /// Convert keeping the decimal's scale, so `1.50` keeps its trailing zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer part does not fit in i64.
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        parse_literal(&value.to_string())
    }
}

impl std::str::FromStr for NumericValue {
    type Err = NumericError;

    /// Parse a numeric string in Indonesian or plain notation.
    ///
    /// # Examples
    /// - "15000" -> Integer(15000)
    /// - "1.000,5" -> Decimal(1000, [5])
    /// - "2.500.000" -> Integer(2500000)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_numeric(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
