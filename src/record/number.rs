//! JavaScript-compatible numeric coercion and fixed-point formatting.

use serde_json::Value;

/// Enough fraction digits to print any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Magnitude from which `to_fixed` falls back to exponent form.
const EXPONENT_FORM_BOUND: f64 = 1e21;

/// Coerces a JSON value to a number the way JavaScript's unary `+` does.
///
/// `null` is `0`, booleans are `0`/`1`, strings are trimmed and parsed
/// (empty means `0`, `0x`/`0o`/`0b` prefixes and `Infinity` are understood),
/// single-element arrays coerce their element, and anything else is `NaN`.
///
/// # Examples
///
/// ```
/// use fnkit::record::to_number;
/// use serde_json::json;
///
/// assert_eq!(to_number(&json!(" 42 ")), 42.0);
/// assert_eq!(to_number(&json!("0x1f")), 31.0);
/// assert_eq!(to_number(&json!(true)), 1.0);
/// assert!(to_number(&json!("4 2")).is_nan());
/// ```
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => parse_number(text),
        Value::Array(items) => match items.as_slice() {
            [] | [Value::Null] => 0.0,
            [single @ (Value::Number(_) | Value::String(_) | Value::Array(_))] => to_number(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&trimmed[2..], radix);
    }
    match trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed) {
        "Infinity" if trimmed.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        unsigned if is_decimal_literal(unsigned) => trimmed.parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn is_decimal_literal(text: &str) -> bool {
    let is_decimal_byte = |byte: u8| byte.is_ascii_digit() || b".eE+-".contains(&byte);
    text.bytes().all(is_decimal_byte)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |accumulated, character| {
            character
                .to_digit(radix)
                .map(|digit| accumulated.mul_add(f64::from(radix), f64::from(digit)))
        })
        .unwrap_or(f64::NAN)
}

/// Formats `value` with exactly `digits` fraction digits, like JavaScript's
/// `Number.prototype.toFixed`.
///
/// Rounding is half away from zero on the exact binary value, so `1.25`
/// gives `"1.3"` while `1.005` (stored as `1.00499…`) gives `"1.00"`.
/// `NaN` and the infinities print as `"NaN"`, `"Infinity"` and `"-Infinity"`.
/// Magnitudes of `1e21` and above ignore `digits` and print in shortest
/// exponent form, so `1e21` gives `"1e+21"`.
///
/// # Examples
///
/// ```
/// use fnkit::record::to_fixed;
///
/// assert_eq!(to_fixed(1.2345, 1), "1.2");
/// assert_eq!(to_fixed(1.25, 1), "1.3");
/// assert_eq!(to_fixed(9.96, 1), "10.0");
/// assert_eq!(to_fixed(-0.5, 0), "-1");
/// assert_eq!(to_fixed(2.5e22, 1), "2.5e+22");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value.abs() >= EXPONENT_FORM_BOUND {
        return format!("{value:e}").replacen('e', "e+", 1);
    }

    let expanded = format!("{:.*}", EXACT_FRACTION_DIGITS.max(digits), value.abs());
    let (integer, fraction) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));

    let mut kept: Vec<u8> = integer.bytes().chain(fraction.bytes().take(digits)).collect();
    if fraction.as_bytes().get(digits).is_some_and(|digit| *digit >= b'5') {
        increment_decimal(&mut kept);
    }

    let split = kept.len() - digits;
    let mut rendered = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        rendered.push('-');
    }
    rendered.extend(kept[..split].iter().map(|byte| char::from(*byte)));
    if digits > 0 {
        rendered.push('.');
        rendered.extend(kept[split..].iter().map(|byte| char::from(*byte)));
    }
    rendered
}

/// Adds one to the last digit of an ASCII decimal, carrying leftwards.
fn increment_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
