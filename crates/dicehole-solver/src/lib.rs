//! Closest-solution search for dicehole puzzles.
//!
//! Given the dice of a puzzle, its available operators and the goal, the
//! solver finds how close any single `operand <op> operand` expression can
//! get to the goal. The game uses this distance as the winning target.
//!
//! # Examples
//!
//! ```
//! use dicehole_core::OperatorSet;
//! use dicehole_solver::{best_distance, find_best};
//!
//! // 5 * 2 hits the goal exactly
//! assert_eq!(best_distance(OperatorSet::ALL, &[3, 5, 2], 10)?, 0);
//!
//! let solution = find_best(OperatorSet::ALL, &[3, 5, 2], 10)?;
//! assert_eq!(solution.to_string(), "5 * 2 = 10");
//! # Ok::<(), dicehole_solver::SolverError>(())
//! ```

pub use self::{error::*, search::*};

mod error;
mod search;
