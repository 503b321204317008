use core::fmt::{self, Display};

use crate::Binary64;

impl Display for Binary64 {
    /// Writes the 64 digits back to back. The alternate form (`{:#}`)
    /// separates the sign, exponent and mantissa fields with spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if f.alternate() { " " } else { "" };
        write!(
            f,
            "{}{separator}{}{separator}{}",
            self.sign().digit(),
            self.exponent_bits(),
            self.mantissa_bits(),
        )
    }
}
