use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum GcdError {
    #[error("zero operand")]
    Zero,
    #[error("at least two values required, got {len}")]
    TooFewValues { len: usize },
}
