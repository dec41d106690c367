//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use dicehole_core::{InvalidOperator, OperatorSet};
use dicehole_game::PuzzleOptions;
use dicehole_generator::{GeneratorConfig, PuzzleSeed};

/// Play a dicehole puzzle from a script of pointer events.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Seed for the generated puzzle, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    pub seed: Option<PuzzleSeed>,

    /// Derive the seed from a phrase instead.
    #[arg(long, value_name = "TEXT")]
    pub phrase: Option<String>,

    /// Override the generated goal.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub goal: Option<i64>,

    /// Override the generated dice, comma separated.
    #[arg(long, value_name = "N,N,...", value_delimiter = ',', allow_negative_numbers = true)]
    pub dice: Option<Vec<i64>>,

    /// Number of dice to roll when generating.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    pub dice_count: usize,

    /// Available operators, comma separated.
    #[arg(long, value_name = "OPS", value_delimiter = ',', default_value = "+,-,*")]
    pub operators: Vec<String>,

    /// Leave dropped pieces where they are instead of centering them in holes.
    #[arg(long)]
    pub no_snap: bool,

    /// Script to run; reads standard input when omitted.
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

impl Args {
    /// Returns the seed to generate from.
    #[must_use]
    pub fn puzzle_seed(&self) -> PuzzleSeed {
        match (&self.seed, &self.phrase) {
            (Some(seed), _) => *seed,
            (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
            (None, None) => PuzzleSeed::random(),
        }
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            dice_count: self.dice_count,
            ..GeneratorConfig::default()
        }
    }

    /// Parses the operator list.
    pub fn operator_set(&self) -> Result<OperatorSet, InvalidOperator> {
        OperatorSet::from_symbols(&self.operators)
    }

    /// Returns the puzzle options.
    #[must_use]
    pub fn puzzle_options(&self) -> PuzzleOptions {
        PuzzleOptions {
            snap_to_hole: !self.no_snap,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use dicehole_core::Operator;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["dicehole"]);
        assert_eq!(args.operator_set(), Ok(OperatorSet::ALL));
        assert_eq!(args.generator_config(), GeneratorConfig::default());
        assert!(args.puzzle_options().snap_to_hole);
        assert!(args.goal.is_none());
        assert!(args.dice.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "dicehole",
            "--phrase",
            "hello",
            "--goal",
            "12",
            "--dice",
            "4,4,1",
            "--operators",
            "*,-",
            "--no-snap",
        ]);
        assert_eq!(args.puzzle_seed(), PuzzleSeed::from_phrase("hello"));
        assert_eq!(args.goal, Some(12));
        assert_eq!(args.dice, Some(vec![4, 4, 1]));
        assert_eq!(
            args.operator_set().unwrap().operators().collect::<Vec<_>>(),
            [Operator::Sub, Operator::Mul]
        );
        assert!(!args.puzzle_options().snap_to_hole);
    }

    #[test]
    fn test_seed_and_phrase_conflict() {
        let seed = PuzzleSeed::from_phrase("x").to_string();
        assert!(Args::try_parse_from(["dicehole", "--seed", &seed, "--phrase", "x"]).is_err());
        let args = Args::try_parse_from(["dicehole", "--seed", &seed]).unwrap();
        assert_eq!(args.puzzle_seed(), PuzzleSeed::from_phrase("x"));
    }

    #[test]
    fn test_invalid_operator() {
        let args = Args::parse_from(["dicehole", "--operators", "+,/"]);
        assert_eq!(
            args.operator_set(),
            Err(InvalidOperator {
                symbol: "/".to_owned()
            })
        );
    }
}
