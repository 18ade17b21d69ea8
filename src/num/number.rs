use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Number;

/// Reads an integer-represented JSON number into a signed width, refusing
/// floats and out-of-range values.
pub(crate) fn exact_signed<T: TryFrom<i64>>(number: &Number) -> Option<T> {
    number.as_i64().and_then(|value| T::try_from(value).ok())
}

pub(crate) fn exact_unsigned<T: TryFrom<u64>>(number: &Number) -> Option<T> {
    number.as_u64().and_then(|value| T::try_from(value).ok())
}

pub(crate) fn narrow_f32(value: f64) -> Option<f32> {
    let narrowed = value as f32;
    narrowed.is_finite().then_some(narrowed)
}

/// Reads the number's source text, so no digit passes through `f64`.
pub(crate) fn number_to_decimal(number: &Number) -> Option<Decimal> {
    decimal_from_text(number.as_str())
}

/// Invariant integer text: optional sign, then ASCII digits. Surrounding
/// whitespace is ignored.
pub(crate) fn parse_invariant_integer<T: FromStr>(text: &str) -> Option<T> {
    let text = text.trim();
    let digits = text.strip_prefix('+').unwrap_or(text);
    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // "+-1" would otherwise reach the standard parser as "-1"
    if digits.len() != text.len() && unsigned.len() != digits.len() {
        return None;
    }
    // unsigned parsers reject any '-', even on zero
    if unsigned.bytes().all(|b| b == b'0') {
        return unsigned.parse().ok();
    }
    digits.parse().ok()
}

pub(crate) fn parse_invariant_f64(text: &str) -> Option<f64> {
    let text = invariant_float_text(text)?;
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub(crate) fn parse_invariant_f32(text: &str) -> Option<f32> {
    let text = invariant_float_text(text)?;
    text.parse::<f32>().ok().filter(|value| value.is_finite())
}

pub(crate) fn parse_invariant_decimal(text: &str) -> Option<Decimal> {
    decimal_from_text(invariant_float_text(text)?)
}

pub(crate) fn parse_invariant_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn decimal_from_text(text: &str) -> Option<Decimal> {
    if text.bytes().any(|b| b == b'e' || b == b'E') {
        return Decimal::from_scientific(&text.to_ascii_lowercase()).ok();
    }
    Decimal::from_str(text).ok()
}

/// Returns the trimmed text when it has the shape
/// `[+-]? (digits ['.' digits*] | '.' digits) ([eE] [+-]? digits)?`.
fn invariant_float_text(text: &str) -> Option<&str> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return None;
        }
    }

    (i == bytes.len()).then_some(text)
}

pub(crate) fn format_integer<I: itoa::Integer>(value: I, out: &mut Vec<u8>) {
    let mut buffer = itoa::Buffer::new();
    out.extend_from_slice(buffer.format(value).as_bytes());
}

/// Writes a float in its shortest round-tripping form. Returns false for NaN
/// and infinities, which JSON cannot represent.
pub(crate) fn format_f64(value: f64, out: &mut Vec<u8>) -> bool {
    if !value.is_finite() {
        return false;
    }
    let mut buffer = ryu::Buffer::new();
    out.extend_from_slice(buffer.format_finite(value).as_bytes());
    true
}

pub(crate) fn format_f32(value: f32, out: &mut Vec<u8>) -> bool {
    if !value.is_finite() {
        return false;
    }
    let mut buffer = ryu::Buffer::new();
    out.extend_from_slice(buffer.format_finite(value).as_bytes());
    true
}
