use dicehole_core::ArithmeticError;

/// Errors that can occur while searching for the closest solution.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// Fewer than two values were given, so no expression can be formed.
    #[display("at least 2 operands are required, got {count}")]
    #[from(skip)]
    InsufficientOperands {
        /// Number of values that were given.
        count: usize,
    },
    /// The operator set is empty.
    #[display("no operators available")]
    #[from(skip)]
    NoOperators,
    /// Evaluating a combination overflowed.
    #[display("arithmetic failed: {_0}")]
    Arithmetic(ArithmeticError),
}
