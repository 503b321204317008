use thiserror::Error as ThisError;

use crate::InputClass;

#[derive(Debug, Clone, Copy, PartialEq, ThisError)]
pub enum Error {
    #[error("unsupported input class: {0}")]
    Unsupported(InputClass),
    #[error("exponent search did not converge for {value}")]
    NonConvergent { value: f64 },
}
