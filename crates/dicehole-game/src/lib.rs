//! Interactive puzzle state for dicehole.
//!
//! A [`Puzzle`] owns the draggable [`Piece`]s (dice and operator tokens) and
//! the [`Hole`]s they are dropped into. The shell feeds it pointer events and
//! calls [`Puzzle::update`] once per frame; the puzzle fills and empties holes,
//! evaluates the `operand <op> operand` expression once every hole is full,
//! and latches a win when the result is as close to the goal as the dice allow.
//!
//! # Examples
//!
//! ```
//! use dicehole_core::{OperatorSet, Point};
//! use dicehole_game::{Puzzle, PuzzleLayout, PuzzleOptions};
//!
//! let layout = PuzzleLayout::default();
//! let mut puzzle = Puzzle::new(
//!     10,
//!     &[3, 5, 2],
//!     OperatorSet::ALL,
//!     &layout,
//!     PuzzleOptions::default(),
//! )?;
//! assert_eq!(puzzle.best_distance(), 0);
//!
//! // drag the 5 into the left operand hole
//! puzzle.on_pointer_down(Point::new(200, 100));
//! puzzle.on_pointer_move(Point::new(100, 500));
//! puzzle.on_pointer_up(Point::new(100, 500));
//! puzzle.update()?;
//!
//! assert_eq!(puzzle.result(), None); // other holes are still empty
//! assert!(!puzzle.has_won());
//! # Ok::<(), dicehole_game::GameError>(())
//! ```

pub use self::{error::*, frame::*, hole::*, layout::*, piece::*, puzzle::*};

mod error;
mod frame;
mod hole;
mod layout;
mod piece;
mod puzzle;
