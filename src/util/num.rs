use std::num::IntErrorKind;

use crate::error::RuntimeError;

/// Largest value any literal, intermediate or final result may take.
pub const MAX_VALUE: f64 = 9_999_999.0;
/// Smallest value any literal, intermediate or final result may take.
pub const MIN_VALUE: f64 = -9_999_999.0;

/// Converts an integer literal to `f64`, rejecting values outside
/// `[min, max]`.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooSmall` or `RuntimeError::LiteralTooBig`
/// when the value falls outside the closed interval.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `min`: Inclusive lower bound.
/// - `max`: Inclusive upper bound.
///
/// ## Example
/// ```
/// use wordcalc::{
///     error::RuntimeError,
///     util::num::{MAX_VALUE, MIN_VALUE, i64_to_f64_bounded},
/// };
///
/// assert_eq!(i64_to_f64_bounded(42, MIN_VALUE, MAX_VALUE).unwrap(), 42.0);
///
/// let err = i64_to_f64_bounded(10_000_000, MIN_VALUE, MAX_VALUE).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooBig { value: 10_000_000 }));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_bounded(value: i64, min: f64, max: f64) -> Result<f64, RuntimeError> {
    let real = value as f64;
    if real < min {
        return Err(RuntimeError::LiteralTooSmall { value });
    }
    if real > max {
        return Err(RuntimeError::LiteralTooBig { value });
    }
    Ok(real)
}

/// Parses a run of ASCII digits, saturating at `i64::MAX` on overflow.
///
/// Saturation keeps oversized literals representable so that the evaluator's
/// range check can reject them with a proper `LiteralTooBig` error.
///
/// ## Returns
/// - `Some(i64)`: The parsed (possibly saturated) value.
/// - `None`: If `text` is empty or contains anything but ASCII digits.
///
/// ## Example
/// ```
/// use wordcalc::util::num::parse_digits_saturating;
///
/// assert_eq!(parse_digits_saturating("0042"), Some(42));
/// assert_eq!(parse_digits_saturating("99999999999999999999999"), Some(i64::MAX));
/// assert_eq!(parse_digits_saturating("4x2"), None);
/// ```
#[must_use]
pub fn parse_digits_saturating(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match text.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
        Err(_) => None,
    }
}
