/// Sign field of a value: `'0'` for positive, `'1'` for negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Only strictly negative values are [`Sign::Negative`], so `-0.0`
    /// is treated as positive.
    #[inline]
    pub const fn of(value: f64) -> Self {
        if value < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    #[inline]
    pub const fn digit(self) -> char {
        match self {
            Self::Positive => '0',
            Self::Negative => '1',
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    /// Strips this sign from `value`, leaving its magnitude.
    #[inline]
    pub const fn strip(self, value: f64) -> f64 {
        match self {
            Self::Positive => value,
            Self::Negative => -value,
        }
    }
}
