//! String and number conversion helpers

/// Compare two values ignoring case, surrounding whitespace, and
/// newline, carriage-return, and NUL characters at the boundaries
///
/// Branch names read from command output arrive newline-terminated and
/// in whatever case the user typed; this is the comparison used for
/// them.
pub fn values_equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

fn normalize(value: &str) -> String {
    value
        .trim_matches(|c| matches!(c, '\n' | '\r' | '\0'))
        .trim()
        .to_lowercase()
}

/// Split a float into its integer part and its fractional part, the
/// fraction returned as an integer at `decimal_places` digits
///
/// `decimal_places <= 0` defaults to 2. The requested precision never
/// turns a fraction that is already shorter into nonzero digits:
/// `split_float(123456.0, 10)` is `(123456, 0)`.
pub fn split_float(number: f64, decimal_places: i32) -> (i64, i64) {
    let places = if decimal_places > 0 {
        decimal_places as usize
    } else {
        2
    };

    let formatted = format!("{:.*}", places, number);
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "0"));

    (int_part.parse().unwrap_or(0), frac_part.parse().unwrap_or(0))
}
