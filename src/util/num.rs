/// Largest value that can be converted to a `usize` index without loss.
pub const MAX_SAFE_INDEX: f64 = 9_007_199_254_740_991.0;

/// Converts an `f64` to a container index, truncating toward zero.
///
/// Fractional indices are allowed and truncate, so `1.9` names index `1`.
/// Negative, non-finite, and absurdly large values produce `None`.
///
/// ## Parameters
/// - `value`: The number to convert.
///
/// ## Returns
/// - `Some(usize)`: The truncated index if the value can name one.
/// - `None`: If the value is negative, not finite, or too large.
///
/// ## Example
/// ```
/// use rill::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(1.9), Some(1));
/// assert_eq!(f64_to_index(0.0), Some(0));
/// assert_eq!(f64_to_index(-1.0), None);
/// assert_eq!(f64_to_index(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_index(value: f64) -> Option<usize> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_INDEX {
        return None;
    }
    Some(value.trunc() as usize)
}
