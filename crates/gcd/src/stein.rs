use core::mem;

use num_traits::{PrimInt, Unsigned};

use crate::{GcdError, fold};

/// Binary GCD: only shifts, parity tests and subtraction.
///
/// Common factors of two are counted once up front, then both operands
/// are kept odd and the smaller one is subtracted from the larger one
/// until they meet.
pub fn stein<T>(x: T, y: T) -> Result<T, GcdError>
where
    T: PrimInt + Unsigned,
{
    if x.is_zero() || y.is_zero() {
        return Err(GcdError::Zero);
    }
    if x == y {
        return Ok(x);
    }

    let shift = (x | y).trailing_zeros();
    let mut x = x.unsigned_shr(x.trailing_zeros());
    let mut y = y;
    loop {
        y = y.unsigned_shr(y.trailing_zeros());
        if x > y {
            mem::swap(&mut x, &mut y);
        }
        y = y - x;
        if y.is_zero() {
            return Ok(x.unsigned_shl(shift));
        }
    }
}

/// Folds [`stein`] over `values` from left to right.
pub fn stein_all<T>(values: &[T]) -> Result<T, GcdError>
where
    T: PrimInt + Unsigned,
{
    fold(values, stein)
}
