//! # Numeric Parsing Policy
//!
//! Every numeric value the user types (line-item quantity, line-item rate,
//! tax rate) arrives as text. This module is the single place that decides
//! how that text becomes a number.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "  12.5"   ──► skip leading whitespace ──► 12.5                        │
//! │  "12abc"    ──► longest numeric prefix   ──► 12                         │
//! │  "1e3"      ──► exponent accepted        ──► 1000                       │
//! │  "-4"       ──► sign kept (no clamping)  ──► -4                         │
//! │  "abc", "" ──► nothing parsable          ──► 0                          │
//! │  "1e999"    ──► not finite               ──► 0                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Falling back to zero is a defined outcome, not an error: the editor is a
//! drafting aid and never rejects a keystroke.

/// Parses a numeric form field, falling back to `0.0`.
///
/// Leading whitespace is skipped and the longest valid decimal prefix is
/// used, so `"12abc"` parses as `12`. Input with no numeric prefix, or a
/// prefix that overflows to infinity, yields `0.0`.
///
/// ## Example
/// ```rust
/// use quote_core::parse::parse_numeric_field_or_zero;
///
/// assert_eq!(parse_numeric_field_or_zero("17850.00"), 17850.0);
/// assert_eq!(parse_numeric_field_or_zero(" 4 units"), 4.0);
/// assert_eq!(parse_numeric_field_or_zero("n/a"), 0.0);
/// assert_eq!(parse_numeric_field_or_zero(""), 0.0);
/// ```
pub fn parse_numeric_field_or_zero(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let end = numeric_prefix_len(trimmed);
    if end == 0 {
        return 0.0;
    }

    match trimmed[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Length in bytes of the longest prefix shaped like a decimal number:
/// `[+-]? digits* ('.' digits*)? ([eE] [+-]? digits+)?` with at least one
/// mantissa digit. Returns 0 when there is no such prefix.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // Exponent only counts when it is complete ("1e" parses as 1)
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_numeric_field_or_zero("1"), 1.0);
        assert_eq!(parse_numeric_field_or_zero("11350.00"), 11350.0);
        assert_eq!(parse_numeric_field_or_zero("0.5"), 0.5);
        assert_eq!(parse_numeric_field_or_zero(".5"), 0.5);
        assert_eq!(parse_numeric_field_or_zero("5."), 5.0);
        assert_eq!(parse_numeric_field_or_zero("+3"), 3.0);
    }

    #[test]
    fn test_negative_values_are_kept() {
        assert_eq!(parse_numeric_field_or_zero("-4"), -4.0);
        assert_eq!(parse_numeric_field_or_zero("-0.25"), -0.25);
    }

    #[test]
    fn test_numeric_prefix_wins() {
        assert_eq!(parse_numeric_field_or_zero("12abc"), 12.0);
        assert_eq!(parse_numeric_field_or_zero("20.00%"), 20.0);
        assert_eq!(parse_numeric_field_or_zero("1.2.3"), 1.2);
        assert_eq!(parse_numeric_field_or_zero("  7 "), 7.0);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_numeric_field_or_zero("1e3"), 1000.0);
        assert_eq!(parse_numeric_field_or_zero("2.5E-1"), 0.25);
        // Incomplete exponent is ignored
        assert_eq!(parse_numeric_field_or_zero("1e"), 1.0);
        assert_eq!(parse_numeric_field_or_zero("1e+"), 1.0);
    }

    #[test]
    fn test_fallback_to_zero() {
        assert_eq!(parse_numeric_field_or_zero(""), 0.0);
        assert_eq!(parse_numeric_field_or_zero("   "), 0.0);
        assert_eq!(parse_numeric_field_or_zero("abc"), 0.0);
        assert_eq!(parse_numeric_field_or_zero("-"), 0.0);
        assert_eq!(parse_numeric_field_or_zero("."), 0.0);
        assert_eq!(parse_numeric_field_or_zero("-.e5"), 0.0);
        assert_eq!(parse_numeric_field_or_zero("[100]"), 0.0);
    }

    #[test]
    fn test_non_finite_falls_back_to_zero() {
        assert_eq!(parse_numeric_field_or_zero("1e999"), 0.0);
        assert_eq!(parse_numeric_field_or_zero("inf"), 0.0);
        assert_eq!(parse_numeric_field_or_zero("NaN"), 0.0);
        assert_eq!(parse_numeric_field_or_zero("Infinity"), 0.0);
    }
}
