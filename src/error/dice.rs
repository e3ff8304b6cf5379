use thiserror::Error;

/// Failures raised while parsing or evaluating a dice expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiceError {
    /// The expression does not match `<rolls>d<size><suffix>` or its suffix is malformed.
    ///
    /// Covers a missing `d`, non-positive roll counts, unbalanced parentheses, letters in the
    /// suffix and the unsupported `//`, `**` and `^` operators.
    #[error("Invalid dice expression: {0}")]
    InvalidFormat(String),

    /// The expression is well formed but cannot be computed, e.g. division by zero.
    #[error("Arithmetic error: {0}")]
    ArithmeticError(String),
}
