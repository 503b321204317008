//! IEEE 754 binary64 bit strings computed from first principles.
//!
//! The sign, exponent and fraction are extracted with plain arithmetic
//! (comparison, division by powers of two and repeated doubling) instead
//! of reading the raw bits of the value.

mod class;
mod error;
mod exponent;
mod fmt;
mod mantissa;
mod sign;

pub use self::{class::*, error::*, exponent::*, mantissa::*, sign::*};

use tracing::debug;

/// Total width of a rendered value.
pub const TOTAL_BITS: usize = 1 + EXPONENT_BITS + MANTISSA_BITS;

/// A finite, non-subnormal `f64` split into its three fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binary64 {
    sign: Sign,
    exponent: u16,
    fraction: f64,
}

impl Binary64 {
    /// Encoding shared by `0.0` and `-0.0`: every field is zero.
    pub const ZERO: Self = Self {
        sign: Sign::Positive,
        exponent: 0,
        fraction: 0.0,
    };

    /// Splits `value` into sign, biased exponent and fraction.
    ///
    /// Both zeros encode as all-zero fields. Subnormals, infinities and NaN
    /// are rejected with [`Error::Unsupported`].
    pub fn decompose(value: f64) -> Result<Self, Error> {
        let class = InputClass::of(value);
        if !class.is_supported() {
            return Err(Error::Unsupported(class));
        }

        let sign = Sign::of(value);
        if class == InputClass::Zero {
            return Ok(Self { sign, ..Self::ZERO });
        }

        let magnitude = sign.strip(value);
        let exponent = find_exponent(magnitude)?;
        let fraction = fraction_of(magnitude, exponent);
        debug!(value, exponent, fraction, "decomposed");

        Ok(Self {
            sign,
            exponent,
            fraction,
        })
    }

    #[inline]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Biased exponent, as stored in the exponent field.
    #[inline]
    pub const fn exponent(&self) -> u16 {
        self.exponent
    }

    /// Power of two the value is scaled by. Zero reports `-BIAS`.
    #[inline]
    pub fn unbiased_exponent(&self) -> i32 {
        i32::from(self.exponent) - BIAS
    }

    /// Fraction in `[0, 1)` without the implicit leading one.
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    #[inline]
    pub fn exponent_bits(&self) -> String {
        render_exponent(self.exponent)
    }

    #[inline]
    pub fn mantissa_bits(&self) -> String {
        render_fraction(self.fraction)
    }
}

impl TryFrom<f64> for Binary64 {
    type Error = Error;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::decompose(value)
    }
}

/// Renders `value` as its 64-character IEEE 754 binary64 bit string:
/// one sign digit, 11 exponent digits and 52 mantissa digits.
#[inline]
pub fn to_binary_string(value: f64) -> Result<String, Error> {
    Binary64::decompose(value).map(|b| b.to_string())
}

/// Renders every value, stopping at the first one that cannot be encoded.
pub fn to_binary_strings(values: impl IntoIterator<Item = f64>) -> Result<Vec<String>, Error> {
    values.into_iter().map(to_binary_string).collect()
}
