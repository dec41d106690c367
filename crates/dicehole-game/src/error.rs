use dicehole_core::{ArithmeticError, Operator, SlotValue};
use dicehole_solver::SolverError;

use crate::HoleId;

/// Errors that can occur while setting up or evaluating a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// A hole holds a value of the wrong kind for its position in the expression.
    #[display("{hole} hole expected {expected}, found {found:?}")]
    #[from(skip)]
    TypeMismatch {
        /// The offending hole.
        hole: HoleId,
        /// The kind of value the hole should hold.
        expected: &'static str,
        /// What the hole actually holds.
        found: SlotValue,
    },
    /// Evaluating the expression overflowed.
    #[display("{_0}")]
    Arithmetic(ArithmeticError),
    /// The closest solution could not be computed.
    #[display("{_0}")]
    Solver(SolverError),
    /// The layout cannot host a puzzle.
    #[display("invalid layout: {reason}")]
    #[from(skip)]
    InvalidLayout {
        /// Why the layout was rejected.
        reason: &'static str,
    },
    /// An available operator has no token in the layout.
    #[display("no token is laid out for operator {operator}")]
    #[from(skip)]
    MissingToken {
        /// The operator without a token.
        operator: Operator,
    },
}
