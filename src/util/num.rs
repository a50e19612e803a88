/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Scale used when rounding answers to three decimal places.
const ROUNDING_SCALE: f64 = 1000.0;

/// Safely converts a `u64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use mathgenius::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(42, "too big!"), Ok(42.0));
/// assert!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64_checked<E>(value: u64, error: E) -> Result<f64, E> {
    if value > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Rounds a value to three decimal places, half-up on the scaled value.
///
/// The value is multiplied by 1000, rounded to the nearest integer with ties
/// going toward positive infinity, and divided by 1000 again. Whole numbers,
/// values too large to scale, infinities and NaN pass through unchanged.
///
/// ## Example
/// ```
/// use mathgenius::util::num::round_to_millis;
///
/// assert_eq!(round_to_millis(2.0 / 3.0), 0.667);
/// assert_eq!(round_to_millis(0.0625), 0.063);
/// assert_eq!(round_to_millis(-0.0625), -0.062);
/// assert!(round_to_millis(f64::NAN).is_nan());
/// assert_eq!(round_to_millis(1e306), 1e306);
/// assert_eq!(round_to_millis(100_000_000_000_159_410.0), 100_000_000_000_159_410.0);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn round_to_millis(value: f64) -> f64 {
    let scaled = value * ROUNDING_SCALE;
    if value.fract() == 0.0 || !scaled.is_finite() {
        return value;
    }
    (scaled + 0.5).floor() / ROUNDING_SCALE
}

/// Renders a number the way answers and explanations display it.
///
/// Finite whole numbers always keep one fractional digit so the decimal
/// point is visible; other finite values use the shortest representation
/// that round-trips. Non-finite values render as `inf`, `-inf` and `NaN`.
///
/// ## Example
/// ```
/// use mathgenius::util::num::format_number;
///
/// assert_eq!(format_number(12.0), "12.0");
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(-4.0), "-4.0");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Splits a rendered number into its integer and fractional digits.
///
/// The fractional part is empty when the text has no decimal point.
///
/// ## Example
/// ```
/// use mathgenius::util::num::split_decimal;
///
/// assert_eq!(split_decimal("12.25"), ("12", "25"));
/// assert_eq!(split_decimal("inf"), ("inf", ""));
/// ```
#[must_use]
pub fn split_decimal(text: &str) -> (&str, &str) {
    text.split_once('.').unwrap_or((text, ""))
}
