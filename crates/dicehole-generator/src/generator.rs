use std::ops::RangeInclusive;

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// Parameters for puzzle generation.
///
/// The defaults describe the classic game: a goal in `1..=15` and three
/// six-sided dice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Range the goal is drawn from, uniformly.
    pub goal_range: RangeInclusive<i64>,
    /// Faces of each die, drawn uniformly.
    pub die_faces: RangeInclusive<i64>,
    /// Number of dice to roll.
    pub dice_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            goal_range: 1..=15,
            die_faces: 1..=6,
            dice_count: 3,
        }
    }
}

/// Errors reported for an unusable [`GeneratorConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// A range has no values.
    #[display("{name} range is empty")]
    EmptyRange {
        /// Which range is empty.
        name: &'static str,
    },
    /// Fewer than two dice cannot form an expression.
    #[display("at least 2 dice are required, got {count}")]
    TooFewDice {
        /// The configured dice count.
        count: usize,
    },
}

/// A generated puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The number the player tries to reach.
    pub goal: i64,
    /// Rolled die faces, in creation order.
    pub dice: Vec<i64>,
    /// The seed the puzzle was generated from.
    pub seed: PuzzleSeed,
}

/// Generates puzzles from a validated [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyRange`] if the goal or die range is empty,
    /// and [`GeneratorError::TooFewDice`] if fewer than two dice are requested.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        if config.goal_range.is_empty() {
            return Err(GeneratorError::EmptyRange { name: "goal" });
        }
        if config.die_faces.is_empty() {
            return Err(GeneratorError::EmptyRange { name: "die face" });
        }
        if config.dice_count < 2 {
            return Err(GeneratorError::TooFewDice {
                count: config.dice_count,
            });
        }
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The goal is drawn first, then each die in order.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let goal = rng.random_range(self.config.goal_range.clone());
        let dice = (0..self.config.dice_count)
            .map(|_| rng.random_range(self.config.die_faces.clone()))
            .collect::<Vec<_>>();
        log::debug!("generated puzzle: goal={goal}, dice={dice:?}, seed={seed}");
        GeneratedPuzzle { goal, dice, seed }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_invalid_configs() {
        #[allow(clippy::reversed_empty_ranges)]
        let empty = 5..=1;
        let config = GeneratorConfig {
            goal_range: empty.clone(),
            ..GeneratorConfig::default()
        };
        assert_eq!(
            PuzzleGenerator::new(config).unwrap_err(),
            GeneratorError::EmptyRange { name: "goal" }
        );

        let config = GeneratorConfig {
            die_faces: empty,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            PuzzleGenerator::new(config).unwrap_err(),
            GeneratorError::EmptyRange { name: "die face" }
        );

        let config = GeneratorConfig {
            dice_count: 1,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            PuzzleGenerator::new(config).unwrap_err(),
            GeneratorError::TooFewDice { count: 1 }
        );
    }

    #[test]
    fn test_degenerate_ranges() {
        let config = GeneratorConfig {
            goal_range: 7..=7,
            die_faces: 2..=2,
            dice_count: 4,
        };
        let puzzle = PuzzleGenerator::new(config).unwrap().generate();
        assert_eq!(puzzle.goal, 7);
        assert_eq!(puzzle.dice, [2, 2, 2, 2]);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let generator = PuzzleGenerator::new(GeneratorConfig::default()).unwrap();
        let seed = PuzzleSeed::from_phrase("same");
        assert_eq!(generator.generate_with_seed(seed), generator.generate_with_seed(seed));
    }

    proptest! {
        #[test]
        fn generated_values_stay_in_range(bytes in any::<[u8; 32]>()) {
            let generator = PuzzleGenerator::new(GeneratorConfig::default()).unwrap();
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes(bytes));
            prop_assert!((1..=15).contains(&puzzle.goal));
            prop_assert_eq!(puzzle.dice.len(), 3);
            prop_assert!(puzzle.dice.iter().all(|die| (1..=6).contains(die)));
            prop_assert_eq!(*puzzle.seed.as_bytes(), bytes);
        }
    }
}
