//! Numeric text input handling.
//!
//! The bill and tip fields hold free-form text. Both are read through
//! [`parse_number`], which never fails: anything that is not a finite number
//! becomes `0.0`.

/// Parses the text of a numeric field.
///
/// Returns `0.0` when the text is empty, is not a number, or parses to a
/// non-finite value such as `NaN` or infinity. Leading and trailing whitespace
/// is ignored.
///
/// # Examples
///
/// ```
/// use tiptime_core::parse_number;
///
/// assert_eq!(parse_number("12.5"), 12.5);
/// assert_eq!(parse_number(" 10 "), 10.0);
/// assert_eq!(parse_number(""), 0.0);
/// assert_eq!(parse_number("abc"), 0.0);
/// assert_eq!(parse_number("inf"), 0.0);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Returns `true` for characters a numeric keyboard can produce.
#[must_use]
pub fn is_numeric_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == '-'
}

/// Drops every character a numeric keyboard could not have typed.
///
/// The result is not guaranteed to parse (`"1.2.3"` is kept as is); the
/// fallback in [`parse_number`] covers that.
///
/// # Examples
///
/// ```
/// use tiptime_core::retain_numeric;
///
/// assert_eq!(retain_numeric("$1,234.50"), "1234.50");
/// assert_eq!(retain_numeric("-3"), "-3");
/// ```
#[must_use]
pub fn retain_numeric(text: &str) -> String {
    text.chars().filter(|&ch| is_numeric_char(ch)).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_number_accepts_plain_numbers() {
        assert_eq!(parse_number("10"), 10.0);
        assert_eq!(parse_number("7.5"), 7.5);
        assert_eq!(parse_number("-4"), -4.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("1e2"), 100.0);
    }

    #[test]
    fn test_parse_number_ignores_surrounding_whitespace() {
        assert_eq!(parse_number(" 10"), 10.0);
        assert_eq!(parse_number("10 "), 10.0);
        assert_eq!(parse_number("\t10"), 10.0);
        assert_eq!(parse_number("\n7.5\n"), 7.5);
        assert_eq!(parse_number("   "), 0.0);
        assert_eq!(parse_number("1 0"), 0.0);
    }

    #[test]
    fn test_parse_number_falls_back_to_zero() {
        for text in ["", "-", ".", "1.2.3", "ten", "1,000"] {
            assert_eq!(parse_number(text), 0.0, "input: {text:?}");
        }
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        for text in ["NaN", "nan", "inf", "-inf", "infinity", "1e400"] {
            assert_eq!(parse_number(text), 0.0, "input: {text:?}");
        }
    }

    #[test]
    fn test_retain_numeric_keeps_partial_input() {
        assert_eq!(retain_numeric(""), "");
        assert_eq!(retain_numeric("12."), "12.");
        assert_eq!(retain_numeric("1.2.3"), "1.2.3");
        assert_eq!(retain_numeric("１２"), "");
        assert_eq!(retain_numeric("20%"), "20");
    }

    proptest! {
        #[test]
        fn test_parse_number_is_always_finite(text in ".*") {
            prop_assert!(parse_number(&text).is_finite());
        }

        #[test]
        fn test_parse_number_matches_std_for_finite_values(value in proptest::num::f64::NORMAL) {
            prop_assert_eq!(parse_number(&value.to_string()), value);
        }

        #[test]
        fn test_retain_numeric_output_is_numeric(text in ".*") {
            let retained = retain_numeric(&text);
            prop_assert!(retained.chars().all(is_numeric_char));
        }

        #[test]
        fn test_retain_numeric_is_idempotent(text in ".*") {
            let once = retain_numeric(&text);
            prop_assert_eq!(retain_numeric(&once), once.clone());
        }
    }
}
