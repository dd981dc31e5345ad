// ============================================================================
// Word Converter
// Recursive magnitude decomposition of numbers into Indonesian words
// ============================================================================

use super::sequence::WordSequence;
use super::vocabulary::{DECIMAL_POINT, DIGITS, ELEVEN, MAGNITUDES, MINUS, TEEN, TEN, TENS};
use crate::numeric::{DecimalParts, NumericValue};

/// Spell out any value.
///
/// Decimals speak the integer part, then "koma", then each fraction digit
/// on its own. An empty fraction speaks only the integer part.
///
/// # Example
/// ```
/// use angka_terbilang::numeric::NumericValue;
/// use angka_terbilang::words::words;
///
/// let value = NumericValue::decimal(1234, "56").unwrap();
/// assert_eq!(
///     words(&value).to_string(),
///     "seribu dua ratus tiga puluh empat koma lima enam"
/// );
/// ```
pub fn words(value: &NumericValue) -> WordSequence {
    let mut out = WordSequence::new();
    match value {
        NumericValue::Integer(n) => push_integer(*n, &mut out),
        NumericValue::Decimal(parts) => push_decimal(parts, &mut out),
    }
    tracing::trace!(words = %out, "converted value");
    out
}

/// Spell out a signed 64-bit integer. Total over the whole i64 range.
pub fn integer_words(value: i64) -> WordSequence {
    let mut out = WordSequence::new();
    push_integer(value, &mut out);
    out
}

fn push_decimal(parts: &DecimalParts, out: &mut WordSequence) {
    push_integer(parts.integer_part(), out);

    let fraction = parts.fraction();
    if fraction.is_empty() {
        return;
    }
    out.push(DECIMAL_POINT);
    for &digit in fraction.as_slice() {
        out.push(DIGITS[digit as usize]);
    }
}

fn push_integer(value: i64, out: &mut WordSequence) {
    if value == 0 {
        out.push(DIGITS[0]);
        return;
    }

    // |i64::MIN| is i64::MAX + 1, spoken as "max value, then one more"
    if value == i64::MIN {
        out.push(MINUS);
        push_magnitude(i64::MAX as u64, out);
        out.push(DIGITS[1]);
        return;
    }

    if value < 0 {
        out.push(MINUS);
    }
    push_magnitude(value.unsigned_abs(), out);
}

/// Push the words for a positive magnitude. Zero pushes nothing, which is
/// how an empty remainder disappears from the output.
fn push_magnitude(n: u64, out: &mut WordSequence) {
    if n == 0 {
        return;
    }

    for magnitude in MAGNITUDES.iter() {
        if n >= magnitude.threshold {
            let quotient = n / magnitude.threshold;
            match magnitude.single {
                Some(fused) if quotient == 1 => out.push(fused),
                _ => {
                    push_magnitude(quotient, out);
                    out.push(magnitude.name);
                },
            }
            push_magnitude(n % magnitude.threshold, out);
            return;
        }
    }

    match n {
        20..=99 => {
            push_magnitude(n / 10, out);
            out.push(TENS);
            push_magnitude(n % 10, out);
        },
        12..=19 => {
            out.push(DIGITS[(n - 10) as usize]);
            out.push(TEEN);
        },
        11 => out.push(ELEVEN),
        10 => out.push(TEN),
        _ => out.push(DIGITS[n as usize]),
    }
}
