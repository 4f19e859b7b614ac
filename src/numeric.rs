//! Lenient numeric parsing for form text
//!
//! Form fields hold whatever the user typed. Parsing takes the longest numeric
//! prefix after leading whitespace, so `"12abc"` reads as 12 and `"3.7"` reads
//! as the integer 3. Text with no numeric prefix yields `None`.

use crate::constants::strength;

/// Parse the integer prefix of `text`
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    trimmed[..end].parse().ok()
}

/// Parse the decimal prefix of `text` (sign, digits, fraction, exponent)
pub fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digit_count += frac_end - frac_start;
        if digit_count > 0 {
            end = frac_end;
        }
    }

    if digit_count == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse().ok()
}

/// Clamp a strength into the accepted range
pub fn clamp_strength(value: f64) -> f64 {
    let clamped = value.clamp(strength::MIN, strength::MAX);
    // Avoid "-0.0"
    if clamped == 0.0 { 0.0 } else { clamped }
}

/// One-decimal text of a non-negative value, rounding like `Number.toFixed(1)`
///
/// The exact binary value is rounded, so `0.15` (stored just below) gives
/// `"0.1"`. Exact ties only happen for odd multiples of 0.25 and go up.
pub fn format_one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        return format!("{:.1}", (value * 10.0).ceil() / 10.0);
    }
    format!("{:.1}", value)
}

/// Normalize strength text to a one-decimal string in [0.0, 9.9]
///
/// Empty text stays empty so the field can be cleared while typing, and text
/// without a numeric prefix is kept verbatim (validation flags it).
pub fn normalize_strength(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    match parse_float(text) {
        Some(value) => format_one_decimal(clamp_strength(value)),
        None => text.to_string(),
    }
}

/// Normalize decimal text to its canonical numeric form (`"1.50"` -> `"1.5"`)
pub fn normalize_decimal(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    match parse_float(text) {
        Some(value) => format_number(value),
        None => text.to_string(),
    }
}

/// Shortest text form of a number, whole values without a decimal point
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    format!("{}", value)
}

/// Check that text parses to a strength within [0.0, 9.9]
pub fn is_strength_in_range(text: &str) -> bool {
    parse_float(text).is_some_and(|value| (strength::MIN..=strength::MAX).contains(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_plain_and_signed() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+3"), Some(3));
        assert_eq!(parse_int("  15"), Some(15));
    }

    #[test]
    fn test_parse_int_takes_prefix() {
        // Fraction and trailing garbage are ignored
        assert_eq!(parse_int("3.7"), Some(3));
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("-0"), Some(0));
    }

    #[test]
    fn test_parse_int_rejects_non_numeric() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(".5"), None);
    }

    #[test]
    fn test_parse_float_forms() {
        assert_eq!(parse_float("1.5"), Some(1.5));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("-2.25"), Some(-2.25));
        assert_eq!(parse_float("1e2"), Some(100.0));
        assert_eq!(parse_float("2.5x"), Some(2.5));
    }

    #[test]
    fn test_parse_float_dangling_exponent_ignored() {
        assert_eq!(parse_float("3e"), Some(3.0));
        assert_eq!(parse_float("3e+"), Some(3.0));
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_float_rejects_non_numeric() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("e5"), None);
    }

    #[test]
    fn test_normalize_strength_clamps_and_rounds() {
        assert_eq!(normalize_strength("12.34"), "9.9");
        assert_eq!(normalize_strength("-3"), "0.0");
        assert_eq!(normalize_strength("2"), "2.0");
        assert_eq!(normalize_strength("1.25"), "1.3");
        assert_eq!(normalize_strength("0.04"), "0.0");
        assert_eq!(normalize_strength("-0.01"), "0.0");
    }

    #[test]
    fn test_normalize_strength_rounds_stored_binary_value() {
        // 0.15 and 0.35 are stored slightly below the written value
        assert_eq!(normalize_strength("0.15"), "0.1");
        assert_eq!(normalize_strength("0.35"), "0.3");
        assert_eq!(normalize_strength("2.45"), "2.5");
    }

    #[test]
    fn test_normalize_strength_exact_ties_round_up() {
        assert_eq!(normalize_strength("0.25"), "0.3");
        assert_eq!(normalize_strength("0.75"), "0.8");
        assert_eq!(normalize_strength("9.75"), "9.8");
    }

    #[test]
    fn test_clamp_strength() {
        assert_eq!(clamp_strength(12.0), 9.9);
        assert_eq!(clamp_strength(-3.0), 0.0);
        assert!(clamp_strength(-0.0).is_sign_positive());
        assert_eq!(clamp_strength(4.2), 4.2);
    }

    #[test]
    fn test_normalize_strength_keeps_empty_and_garbage() {
        assert_eq!(normalize_strength(""), "");
        assert_eq!(normalize_strength("abc"), "abc");
    }

    #[test]
    fn test_normalized_strength_always_in_range() {
        for input in ["0", "9.9", "9.95", "100", "-100", "4.44", "Infinity", "-Infinity", "1e3"] {
            let normalized = normalize_strength(input);
            let value: f64 = normalized.parse().unwrap();
            assert!((0.0..=9.9).contains(&value), "{input} -> {normalized}");
            assert_eq!(normalized.split('.').nth(1).map(str::len), Some(1), "{input} -> {normalized}");
        }
    }

    #[test]
    fn test_normalize_decimal() {
        assert_eq!(normalize_decimal("1.50"), "1.5");
        assert_eq!(normalize_decimal("2.0"), "2");
        assert_eq!(normalize_decimal("0.25abc"), "0.25");
        assert_eq!(normalize_decimal(""), "");
        assert_eq!(normalize_decimal("x"), "x");
    }

    #[test]
    fn test_is_strength_in_range() {
        assert!(is_strength_in_range("0"));
        assert!(is_strength_in_range("9.9"));
        assert!(!is_strength_in_range("10"));
        assert!(!is_strength_in_range("-0.1"));
        assert!(!is_strength_in_range(""));
    }
}
