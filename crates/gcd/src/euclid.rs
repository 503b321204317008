use num_traits::{PrimInt, Unsigned};

use crate::{GcdError, fold};

/// Euclid's algorithm. Each remainder step collapses the repeated
/// subtraction of the smaller operand from the larger one.
pub fn euclid<T>(x: T, y: T) -> Result<T, GcdError>
where
    T: PrimInt + Unsigned,
{
    if x.is_zero() || y.is_zero() {
        return Err(GcdError::Zero);
    }

    let (mut x, mut y) = (x, y);
    while !y.is_zero() {
        (x, y) = (y, x % y);
    }
    Ok(x)
}

/// Folds [`euclid`] over `values` from left to right.
pub fn euclid_all<T>(values: &[T]) -> Result<T, GcdError>
where
    T: PrimInt + Unsigned,
{
    fold(values, euclid)
}
