use crate::error::SemanticError;

/// Converts a scalar used as a matrix exponent into an `i32`.
///
/// ## Errors
/// - `SemanticError::FractionalExponent` if the value is not a finite
///   integer.
/// - `SemanticError::ExponentOutOfRange` if it does not fit an `i32`.
///
/// ## Example
/// ```
/// use matrica::{error::SemanticError, util::num::f32_to_exponent};
///
/// assert_eq!(f32_to_exponent(3.0), Ok(3));
/// assert_eq!(f32_to_exponent(-2.0), Ok(-2));
/// assert_eq!(f32_to_exponent(1.5), Err(SemanticError::FractionalExponent));
/// assert_eq!(f32_to_exponent(1e12), Err(SemanticError::ExponentOutOfRange));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f32_to_exponent(value: f32) -> Result<i32, SemanticError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(SemanticError::FractionalExponent);
    }
    // i32::MAX rounds up to 2^31 as an f32, so the upper bound is exclusive.
    if value < i32::MIN as f32 || value >= i32::MAX as f32 {
        return Err(SemanticError::ExponentOutOfRange);
    }
    Ok(value as i32)
}
