//! Random puzzle generation for dicehole.
//!
//! A puzzle is a goal number plus a handful of rolled dice. Generation is
//! driven by a [`PuzzleSeed`], so the same seed always yields the same puzzle.
//!
//! # Examples
//!
//! ```
//! use dicehole_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(GeneratorConfig::default())?;
//! let seed = PuzzleSeed::from_phrase("hello");
//!
//! let puzzle = generator.generate_with_seed(seed);
//! assert!((1..=15).contains(&puzzle.goal));
//! assert_eq!(puzzle.dice.len(), 3);
//! assert_eq!(puzzle, generator.generate_with_seed(seed));
//! # Ok::<(), dicehole_generator::GeneratorError>(())
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
