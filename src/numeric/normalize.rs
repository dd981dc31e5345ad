// ============================================================================
// Input Normalizer
// Locale-aware cleanup of numeric strings into a canonical literal
// ============================================================================
//
// Indonesian notation writes "1.234.567,89": dots group thousands and the
// comma marks the decimals. Plain notation ("1234567.89") is accepted too.
// The two are told apart by a fixed heuristic:
//
// 1. Both ',' and '.' present -> '.' groups thousands, ',' is the decimal
// 2. Only ',' present         -> ',' is the decimal
// 3. Only '.' (or neither)    -> a last '.'-group of at most two characters
//                                keeps the dots as-is, otherwise every '.'
//                                groups thousands
//
// So "1.23" is 1.23 while "1.234" is 1234. Callers relying on this must not
// expect any smarter disambiguation.

use super::errors::{NumericError, NumericResult};
use super::value::{DecimalParts, FractionDigits, NumericValue};

/// Normalize a raw numeric string to a canonical decimal-point literal.
///
/// Never fails: input of unrecognized shape comes back in a form that
/// [`parse_literal`] rejects.
///
/// # Examples
/// - "1.000,5" -> "1000.5"
/// - "2.500.000" -> "2500000"
/// - "  12,75\n" -> "12.75"
/// - "1.23" -> "1.23"
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let has_comma = trimmed.contains(',');
    let has_dot = trimmed.contains('.');

    if has_comma && has_dot {
        return trimmed.replace('.', "").replace(',', ".");
    }

    if has_comma {
        return trimmed.replace(',', ".");
    }

    match trimmed.rsplit_once('.') {
        Some((_, last_group)) if last_group.chars().count() <= 2 => trimmed.to_string(),
        _ => trimmed.replace('.', ""),
    }
}

/// Normalize and parse a raw numeric string.
///
/// # Errors
/// - `InvalidInput` if the normalized string is neither an integer nor a
///   decimal literal
/// - `Overflow` if the integer part does not fit in i64
pub fn parse_numeric(raw: &str) -> NumericResult<NumericValue> {
    let normalized = normalize(raw);
    match parse_literal(&normalized) {
        Ok(value) => {
            tracing::trace!(input = raw, normalized = %normalized, "parsed numeric string");
            Ok(value)
        },
        Err(err) => {
            tracing::debug!(
                input = raw,
                normalized = %normalized,
                error = %err,
                "rejected numeric string"
            );
            Err(err)
        },
    }
}

/// Parse a canonical literal (already normalized).
///
/// Integer syntax is tried first. Otherwise the literal must be an optional
/// sign, integer digits, a '.', and fraction digits, with at least one digit
/// overall. Exponents, hex and named values (`inf`, `nan`) are rejected.
///
/// # Errors
/// - `InvalidInput` on any other shape
/// - `Overflow` if the integer part does not fit in i64
pub fn parse_literal(literal: &str) -> NumericResult<NumericValue> {
    if let Ok(value) = literal.parse::<i64>() {
        return Ok(NumericValue::Integer(value));
    }

    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    let (int_digits, frac_digits) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_digits)
        || !all_digits(frac_digits)
        || (int_digits.is_empty() && frac_digits.is_empty())
    {
        return Err(NumericError::InvalidInput);
    }

    // "-0.5" keeps no sign: the integer part is zero
    let integer = signed_integer(int_digits, negative)?;
    let fraction = FractionDigits::from_ascii(frac_digits)?;

    Ok(NumericValue::Decimal(DecimalParts::new(integer, fraction)))
}

/// Apply a sign to a run of ASCII digits, covering the full i64 range.
fn signed_integer(digits: &str, negative: bool) -> NumericResult<i64> {
    if digits.is_empty() {
        return Ok(0);
    }

    // Digits are pre-validated, so the only parse failure left is overflow
    let magnitude: u64 = digits.parse().map_err(|_| NumericError::Overflow)?;

    if negative {
        0i64.checked_sub_unsigned(magnitude)
            .ok_or(NumericError::Overflow)
    } else {
        i64::try_from(magnitude).map_err(|_| NumericError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_indonesian_notation() {
        assert_eq!(normalize("1.000,5"), "1000.5");
        assert_eq!(normalize("1.234.567,89"), "1234567.89");
    }

    #[test]
    fn test_normalize_thousands_only() {
        assert_eq!(normalize("2.500.000"), "2500000");
        assert_eq!(normalize("1.234"), "1234");
        assert_eq!(normalize("15000"), "15000");
    }

    #[test]
    fn test_normalize_comma_decimal() {
        assert_eq!(normalize("12,75"), "12.75");
        assert_eq!(normalize("0,5"), "0.5");
    }

    #[test]
    fn test_normalize_short_trailing_group_is_decimal() {
        assert_eq!(normalize("1.23"), "1.23");
        assert_eq!(normalize("1.5"), "1.5");
        // Multiple dots with a short last group are left untouched
        assert_eq!(normalize("1.234.56"), "1.234.56");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  15000 \n"), "15000");
        assert_eq!(normalize("\t1.000,5\r\n"), "1000.5");
    }

    #[test]
    fn test_parse_literal_integer() {
        assert_eq!(parse_literal("42").unwrap(), NumericValue::Integer(42));
        assert_eq!(parse_literal("+42").unwrap(), NumericValue::Integer(42));
        assert_eq!(parse_literal("-42").unwrap(), NumericValue::Integer(-42));
        assert_eq!(
            parse_literal("-9223372036854775808").unwrap(),
            NumericValue::Integer(i64::MIN)
        );
    }

    #[test]
    fn test_parse_literal_decimal() {
        assert_eq!(
            parse_literal("1000.5").unwrap(),
            NumericValue::decimal(1000, "5").unwrap()
        );
        assert_eq!(
            parse_literal("1.50").unwrap(),
            NumericValue::decimal(1, "50").unwrap()
        );
        assert_eq!(
            parse_literal(".5").unwrap(),
            NumericValue::decimal(0, "5").unwrap()
        );
        assert_eq!(
            parse_literal("-9223372036854775808.5").unwrap(),
            NumericValue::decimal(i64::MIN, "5").unwrap()
        );
    }

    #[test]
    fn test_parse_literal_negative_zero_integer_part() {
        let value = parse_literal("-0.5").unwrap();
        assert!(!value.is_negative());
        assert_eq!(value, NumericValue::decimal(0, "5").unwrap());

        assert_eq!(parse_literal("-0.").unwrap(), NumericValue::decimal(0, "").unwrap());
        assert_eq!(parse_literal("-0").unwrap(), NumericValue::Integer(0));
    }

    #[test]
    fn test_parse_literal_invalid() {
        for literal in ["", "abc", "12a3", ".", "-", "1.2.3", "1e5", "inf", "NaN", "+-1"] {
            assert_eq!(
                parse_literal(literal),
                Err(NumericError::InvalidInput),
                "literal {:?}",
                literal
            );
        }
    }

    #[test]
    fn test_parse_literal_overflow() {
        assert_eq!(
            parse_literal("9223372036854775808"),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            parse_literal("99999999999999999999.5"),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("15000").unwrap(), NumericValue::Integer(15000));
        assert_eq!(
            parse_numeric("2.500.000").unwrap(),
            NumericValue::Integer(2_500_000)
        );
        assert_eq!(parse_numeric("12a3"), Err(NumericError::InvalidInput));
        assert_eq!(parse_numeric("   "), Err(NumericError::InvalidInput));
    }
}
