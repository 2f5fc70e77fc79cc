/// Significant digits used for non-integral results.
pub const SIGNIFICANT_DIGITS: usize = 10;

/// Formats a result for display.
///
/// - Finite integral values print as integers (`14`, `-4`, `0`).
/// - Other finite values print like C's `%.10g`: ten significant digits, with
///   trailing zeros removed, and scientific notation when the decimal exponent
///   is below `-4` or at least `10`.
/// - Non-finite values print as `inf`, `-inf` and `nan`.
///
/// # Example
/// ```
/// use safecalc::util::format::format_result;
///
/// assert_eq!(format_result(14.0), "14");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
/// assert_eq!(format_result(1.5e-7), "1.5e-07");
/// assert_eq!(format_result(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    format_general(value, SIGNIFICANT_DIGITS)
}

/// `%.{precision}g` for a finite, non-zero value.
fn format_general(value: f64, precision: usize) -> String {
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let precision = i32::try_from(precision).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs());
    }

    let decimals = usize::try_from(precision - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
