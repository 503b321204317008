//! Greatest common divisors of unsigned integers.
//!
//! Zero operands have no meaningful divisor here and are rejected, as
//! are collections with fewer than two values.

mod error;
mod euclid;
mod stein;

pub use self::{error::*, euclid::*, stein::*};

use num_traits::{PrimInt, Unsigned};
use tracing::debug;

/// Method-call form of [`euclid`] and [`stein`].
pub trait Gcd: Sized {
    fn gcd_euclid(self, rhs: Self) -> Result<Self, GcdError>;

    fn gcd_stein(self, rhs: Self) -> Result<Self, GcdError>;
}

macro_rules! impl_gcd {
    ($($t:ty),+) => {$(
        impl Gcd for $t {
            #[inline]
            fn gcd_euclid(self, rhs: Self) -> Result<Self, GcdError> {
                euclid(self, rhs)
            }

            #[inline]
            fn gcd_stein(self, rhs: Self) -> Result<Self, GcdError> {
                stein(self, rhs)
            }
        }
    )+};
}
impl_gcd!(u8, u16, u32, u64, u128, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(strum::Display, strum::EnumString, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Euclid,
    Stein,
}

impl Algorithm {
    #[inline]
    pub fn gcd<T>(self, x: T, y: T) -> Result<T, GcdError>
    where
        T: PrimInt + Unsigned,
    {
        match self {
            Self::Euclid => euclid(x, y),
            Self::Stein => stein(x, y),
        }
    }

    #[inline]
    pub fn gcd_all<T>(self, values: &[T]) -> Result<T, GcdError>
    where
        T: PrimInt + Unsigned,
    {
        match self {
            Self::Euclid => euclid_all(values),
            Self::Stein => stein_all(values),
        }
    }
}

fn fold<T>(values: &[T], gcd: fn(T, T) -> Result<T, GcdError>) -> Result<T, GcdError>
where
    T: PrimInt + Unsigned,
{
    let [first, second, rest @ ..] = values else {
        return Err(GcdError::TooFewValues { len: values.len() });
    };

    let result = rest
        .iter()
        .try_fold(gcd(*first, *second)?, |acc, &value| gcd(acc, value))?;
    debug!(len = values.len(), "folded gcd");
    Ok(result)
}
