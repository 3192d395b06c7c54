/// Parse a base-10 integer the lenient way command-line values are read.
///
/// Skips leading whitespace, accepts one optional sign, then consumes
/// digits until the first non-digit. Anything without leading digits
/// (including `""` and `"NaN"`) is `0`. Out-of-range values saturate.
pub fn parse_int_lenient(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut magnitude: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        magnitude = match magnitude.checked_mul(10).and_then(|m| m.checked_add(digit)) {
            Some(next) => next,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
    }

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Interpret a recorded value as a boolean.
///
/// - Bare flag (`None`) → `true`
/// - Empty value (`-x=`) → `true`, same as a bare flag
/// - A value that is exactly an integer zero (`0`, `00`, `-0`, `+0`) → `false`
/// - Anything else, including non-zero integers and free text → `true`
pub fn interpret_bool(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => !is_integer_zero(v.trim()),
    }
}

fn is_integer_zero(v: &str) -> bool {
    let digits = v.strip_prefix(['-', '+']).unwrap_or(v);
    !digits.is_empty() && digits.bytes().all(|b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_plain_number() {
        assert_eq!(parse_int_lenient("11"), 11);
        assert_eq!(parse_int_lenient("0"), 0);
    }

    #[test]
    fn int_signed() {
        assert_eq!(parse_int_lenient("-42"), -42);
        assert_eq!(parse_int_lenient("+7"), 7);
    }

    #[test]
    fn int_non_numeric_is_zero() {
        assert_eq!(parse_int_lenient("NaN"), 0);
        assert_eq!(parse_int_lenient("NotANumber"), 0);
        assert_eq!(parse_int_lenient("-"), 0);
    }

    #[test]
    fn int_empty_is_zero() {
        assert_eq!(parse_int_lenient(""), 0);
    }

    #[test]
    fn int_leading_whitespace_skipped() {
        assert_eq!(parse_int_lenient("  12"), 12);
    }

    #[test]
    fn int_stops_at_first_non_digit() {
        assert_eq!(parse_int_lenient("12abc"), 12);
        assert_eq!(parse_int_lenient("3.9"), 3);
    }

    #[test]
    fn int_saturates() {
        assert_eq!(parse_int_lenient("99999999999999999999"), i64::MAX);
        assert_eq!(parse_int_lenient("-99999999999999999999"), i64::MIN);
    }

    #[test]
    fn bool_bare_is_true() {
        assert!(interpret_bool(None));
    }

    #[test]
    fn bool_empty_is_true() {
        assert!(interpret_bool(Some("")));
    }

    #[test]
    fn bool_zero_is_false() {
        assert!(!interpret_bool(Some("0")));
        assert!(!interpret_bool(Some("00")));
        assert!(!interpret_bool(Some("-0")));
        assert!(!interpret_bool(Some(" 0 ")));
    }

    #[test]
    fn bool_nonzero_is_true() {
        assert!(interpret_bool(Some("1")));
        assert!(interpret_bool(Some("-3")));
    }

    #[test]
    fn bool_text_is_true() {
        assert!(interpret_bool(Some("yes")));
        assert!(interpret_bool(Some("false")));
        assert!(interpret_bool(Some("0x")));
    }
}
