use crate::{BIAS, pow2};

/// Width of the mantissa (fraction) field.
pub const MANTISSA_BITS: usize = 52;

/// Derives the fraction left after removing the implicit leading one,
/// i.e. `magnitude / 2^(biased - BIAS) - 1`.
///
/// This is recomputed from the biased exponent rather than taken from
/// the exponent search, so both halves can be checked on their own.
#[inline]
pub fn fraction_of(magnitude: f64, biased: u16) -> f64 {
    magnitude / pow2(i32::from(biased) - BIAS) - 1.0
}

/// Renders a fraction in `[0, 1)` as exactly [`MANTISSA_BITS`] binary
/// digits by repeated doubling.
pub fn render_fraction(mut fraction: f64) -> String {
    (0..MANTISSA_BITS)
        .map(|_| {
            fraction *= 2.0;
            if fraction < 1.0 {
                '0'
            } else {
                fraction -= 1.0;
                '1'
            }
        })
        .collect()
}
