// ============================================================================
// ToTerbilang Interface
// Per-type entry points: integers, floats, decimals and numeric strings
// ============================================================================

use crate::engine::{compose, spell_or_sentinel, Terbilang};
use crate::numeric::{parse_numeric, NumericError, NumericResult, NumericValue};
use crate::words::{words, DEFAULT_CURRENCY_UNIT};
use rust_decimal::Decimal;

/// Spell out a value in Indonesian.
///
/// Implementors only say how they become a [`NumericValue`]; every output
/// method is provided. The string-returning methods are total: input that
/// cannot be converted renders as the sentinel `"tidak valid"`.
///
/// # Example
/// ```
/// use angka_terbilang::prelude::*;
///
/// assert_eq!(123i64.to_terbilang(None), "seratus dua puluh tiga");
/// assert_eq!("1.000,5".to_terbilang(None), "seribu koma lima");
/// assert_eq!(15000i64.to_rupiah(Some("Rp")), "Rp lima belas ribu rupiah");
/// assert_eq!("abc".to_terbilang(None), "tidak valid");
/// ```
pub trait ToTerbilang {
    /// Convert into a spellable value
    fn to_numeric(&self) -> NumericResult<NumericValue>;

    /// Spoken words, or the structured error instead of the sentinel
    fn try_terbilang(&self) -> NumericResult<String> {
        self.to_numeric().map(|value| words(&value).to_string())
    }

    /// Spoken words, with `prefix` in front when given and non-empty
    fn to_terbilang(&self, prefix: Option<&str>) -> String {
        compose(&spell_or_sentinel(self.to_numeric()), prefix, None)
    }

    /// Spoken words followed by "rupiah"
    fn to_rupiah(&self, prefix: Option<&str>) -> String {
        self.to_rupiah_with(prefix, DEFAULT_CURRENCY_UNIT)
    }

    /// Spoken words followed by a custom currency unit.
    ///
    /// The unit is appended even to the sentinel ("tidak valid rupiah").
    /// An empty `suffix` is skipped rather than appended, so the output
    /// never ends in a space: `5i64.to_rupiah_with(None, "")` is `"lima"`.
    fn to_rupiah_with(&self, prefix: Option<&str>, suffix: &str) -> String {
        compose(&spell_or_sentinel(self.to_numeric()), prefix, Some(suffix))
    }

    /// Spoken words assembled by a configured formatter
    fn to_terbilang_with(&self, formatter: &Terbilang) -> String {
        formatter.format_result(self.to_numeric())
    }
}

// ============================================================================
// Implementations
// ============================================================================

macro_rules! impl_to_terbilang_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToTerbilang for $ty {
                #[inline]
                fn to_numeric(&self) -> NumericResult<NumericValue> {
                    i64::try_from(*self)
                        .map(NumericValue::Integer)
                        .map_err(|_| NumericError::Overflow)
                }
            }
        )*
    };
}

impl_to_terbilang_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToTerbilang for f64 {
    fn to_numeric(&self) -> NumericResult<NumericValue> {
        NumericValue::try_from(*self)
    }
}

impl ToTerbilang for f32 {
    fn to_numeric(&self) -> NumericResult<NumericValue> {
        NumericValue::try_from(*self)
    }
}

impl ToTerbilang for Decimal {
    fn to_numeric(&self) -> NumericResult<NumericValue> {
        NumericValue::try_from(*self)
    }
}

impl ToTerbilang for str {
    fn to_numeric(&self) -> NumericResult<NumericValue> {
        parse_numeric(self)
    }
}

impl ToTerbilang for String {
    fn to_numeric(&self) -> NumericResult<NumericValue> {
        parse_numeric(self)
    }
}

impl ToTerbilang for NumericValue {
    fn to_numeric(&self) -> NumericResult<NumericValue> {
        Ok(self.clone())
    }
}
