//! Validating doubler

use crate::{Number, NumseqError, Result};

/// Double `x`, rejecting negative input
///
/// Zero is accepted. The result keeps the input's type, so an integer
/// stays an integer and a float stays a float. NaN is not below zero and
/// comes back as NaN.
///
/// # Errors
///
/// - [`NumseqError::Negative`] if `x < 0`
/// - [`NumseqError::Overflow`] if `2 * x` does not fit an integer type
///
/// ```
/// use numseq_core::{double_or_reject, NumseqError};
///
/// assert_eq!(double_or_reject(4), Ok(8));
/// assert_eq!(double_or_reject(0), Ok(0));
/// assert_eq!(double_or_reject(-1), Err(NumseqError::Negative));
/// ```
pub fn double_or_reject<N: Number>(x: N) -> Result<N> {
    if x < N::ZERO {
        return Err(NumseqError::Negative);
    }
    x.checked_double().ok_or(NumseqError::Overflow)
}
