//! Numeric literal predicates and mean formatting.
//!
//! Two deliberately different rules are in use. Classification accepts a
//! decimal point, imputation does not; a column such as `["1.5", "NaN"]` is
//! therefore reported as numeric but imputed with its mode.

/// Check the classification rule: ASCII digits with at most one `.`.
///
/// At least one digit is required, so `"."` is rejected while `"1."` and
/// `".5"` are accepted. Signs, exponents, whitespace and thousands
/// separators are all rejected.
pub fn is_decimal_literal(value: &str) -> bool {
    let digits = match value.split_once('.') {
        Some((whole, fraction)) => {
            if fraction.contains('.') {
                return false;
            }
            whole.len() + fraction.len()
        }
        None => value.len(),
    };
    digits > 0 && value.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.')
}

/// Check the imputation rule: one or more ASCII digits and nothing else.
pub fn is_digit_literal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

/// Format a mean as a float string that always shows it is a float.
///
/// Uses the shortest round-trip representation: `30.0`, `2.5`,
/// `0.3333333333333333`. Very large or very small magnitudes use a signed
/// exponent of at least two digits, e.g. `1e+16` and `9.99990000099999e-06`.
pub fn format_mean(mean: f64) -> String {
    let text = format!("{mean:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}
