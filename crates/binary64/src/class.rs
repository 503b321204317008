use core::num::FpCategory;

/// Category of an input value, as far as the formatter is concerned.
///
/// Only [`InputClass::Zero`] and [`InputClass::Normal`] can be encoded,
/// everything else is rejected with [`Error::Unsupported`](crate::Error::Unsupported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum InputClass {
    Zero,
    Normal,
    Subnormal,
    Infinite,
    Nan,
}

impl InputClass {
    #[inline]
    pub const fn of(value: f64) -> Self {
        match value.classify() {
            FpCategory::Zero => Self::Zero,
            FpCategory::Normal => Self::Normal,
            FpCategory::Subnormal => Self::Subnormal,
            FpCategory::Infinite => Self::Infinite,
            FpCategory::Nan => Self::Nan,
        }
    }

    #[inline]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Zero | Self::Normal)
    }
}
