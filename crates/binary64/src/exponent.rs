use tracing::trace;

use crate::Error;

/// Width of the exponent field.
pub const EXPONENT_BITS: usize = 11;

/// Offset added to the unbiased exponent before it is stored.
pub const BIAS: i32 = 1023;

/// Smallest unbiased exponent of a normal number.
pub const MIN_EXPONENT: i32 = 1 - BIAS;

/// Largest unbiased exponent of a finite number.
pub const MAX_EXPONENT: i32 = BIAS;

/// Biased field of `2^0`.
const UNIT_BIASED: u16 = 1023;
/// Biased field of `2^MIN_EXPONENT`.
const MIN_BIASED: u16 = 1;
/// Biased field of `2^MAX_EXPONENT`.
const MAX_BIASED: u16 = 2046;

/// Computes `2^exponent` by repeated squaring, which is exact for every
/// exponent in `MIN_EXPONENT..=MAX_EXPONENT`.
#[inline]
pub fn pow2(exponent: i32) -> f64 {
    let magnitude = usize::try_from(exponent.unsigned_abs()).unwrap_or(usize::MAX);
    let scale = num_traits::pow(2.0_f64, magnitude);
    if exponent < 0 { scale.recip() } else { scale }
}

/// Searches for the power of two that normalizes `magnitude` into `[1, 2)`
/// and returns it biased.
///
/// The walk starts at `2^0` and moves one power at a time towards the
/// magnitude. It fails with [`Error::NonConvergent`] once it leaves the
/// normal exponent range, which is what happens for zero, subnormals,
/// negative values, infinities and NaN.
pub fn find_exponent(magnitude: f64) -> Result<u16, Error> {
    let mut biased = UNIT_BIASED;
    loop {
        let power = i32::from(biased) - BIAS;
        let candidate = magnitude / pow2(power) - 1.0;
        trace!(power, candidate, "exponent search step");

        if (0.0..1.0).contains(&candidate) {
            return Ok(biased);
        }

        biased = if candidate >= 1.0 {
            biased + 1
        } else {
            biased - 1
        };
        if !(MIN_BIASED..=MAX_BIASED).contains(&biased) {
            return Err(Error::NonConvergent { value: magnitude });
        }
    }
}

/// Renders a biased exponent as exactly [`EXPONENT_BITS`] binary digits,
/// most significant first. Bits above the field width are dropped.
pub fn render_exponent(mut biased: u16) -> String {
    let mut bits = ['0'; EXPONENT_BITS];
    for bit in bits.iter_mut().rev() {
        if biased & 1 == 1 {
            *bit = '1';
        }
        biased >>= 1;
    }
    bits.iter().collect()
}
