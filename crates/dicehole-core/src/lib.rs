//! Core data types for the dicehole puzzle.
//!
//! This crate provides the small building blocks shared by the solver, the
//! generator and the interactive game:
//!
//! - [`operator`]: The arithmetic [`Operator`]s, [`OperatorSet`] and the evaluator
//!   ([`evaluate`], [`Operator::apply`]).
//! - [`slot_value`]: [`SlotValue`], the tagged contents of a hole.
//! - [`geometry`]: Screen-space [`Point`], [`Size`] and axis-aligned [`Rect`].
//!
//! # Examples
//!
//! ```
//! use dicehole_core::{Operator, OperatorSet, evaluate};
//!
//! assert_eq!(evaluate("*", 5, 2)?, 10);
//! assert_eq!(Operator::Sub.apply(3, 5)?, -2);
//!
//! let ops: Vec<_> = OperatorSet::ALL.operators().collect();
//! assert_eq!(ops, [Operator::Add, Operator::Sub, Operator::Mul]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod geometry;
pub mod operator;
pub mod slot_value;

pub use self::{
    geometry::{Point, Rect, Size},
    operator::{ArithmeticError, EvaluateError, InvalidOperator, Operator, OperatorSet, evaluate},
    slot_value::SlotValue,
};
