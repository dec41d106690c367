//! Runs a script against a puzzle.

use std::io::{self, BufRead, Write};

use dicehole_core::InvalidOperator;
use dicehole_game::{GameError, Puzzle, PuzzleLayout};
use dicehole_generator::{GeneratorError, PuzzleGenerator};

use crate::{
    args::Args,
    render::render_frame,
    script::{self, Command, ScriptError},
};

/// Errors that end a session.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// Reading the script or writing output failed.
    #[display("I/O error: {_0}")]
    Io(io::Error),
    /// A script line could not be parsed.
    #[display("{_0}")]
    Script(ScriptError),
    /// The puzzle reported an error.
    #[display("{_0}")]
    Game(GameError),
    /// The generator configuration is unusable.
    #[display("{_0}")]
    Generator(GeneratorError),
    /// The operator list is invalid.
    #[display("{_0}")]
    Operator(InvalidOperator),
}

/// Creates the puzzle described by the command-line arguments.
///
/// The goal and dice come from the generator unless overridden.
pub fn build_puzzle(args: &Args) -> Result<Puzzle, SessionError> {
    let operators = args.operator_set()?;
    let generator = PuzzleGenerator::new(args.generator_config())?;
    let mut generated = generator.generate_with_seed(args.puzzle_seed());
    log::info!("puzzle seed: {}", generated.seed);

    if let Some(goal) = args.goal {
        generated.goal = goal;
    }
    if let Some(dice) = &args.dice {
        generated.dice.clone_from(dice);
    }
    let puzzle = Puzzle::from_generated(
        &generated,
        operators,
        &PuzzleLayout::default(),
        args.puzzle_options(),
    )?;
    Ok(puzzle)
}

/// Executes one command.
///
/// Pointer commands are followed by a frame tick, as a touch shell would
/// redraw after every event.
pub fn apply_command<W: Write>(
    puzzle: &mut Puzzle,
    command: Command,
    out: &mut W,
) -> Result<(), SessionError> {
    let was_won = puzzle.has_won();
    match command {
        Command::Down(point) => puzzle.on_pointer_down(point),
        Command::Move(point) => puzzle.on_pointer_move(point),
        Command::Up(point) => puzzle.on_pointer_up(point),
        Command::Tick => {}
        Command::Show => {
            write!(out, "{}", render_frame(&puzzle.frame()))?;
            return Ok(());
        }
        Command::Hint => {
            writeln!(out, "hint: {}", puzzle.hint())?;
            return Ok(());
        }
    }
    puzzle.update()?;
    if !was_won && puzzle.has_won() {
        writeln!(out, "WINNER")?;
    }
    Ok(())
}

/// Runs every command in `input`, writing output to `out`.
pub fn run_script<R: BufRead, W: Write>(
    puzzle: &mut Puzzle,
    input: R,
    out: &mut W,
) -> Result<(), SessionError> {
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let command = script::parse_line(&line).map_err(|source| ScriptError {
            line: i + 1,
            source,
        })?;
        if let Some(command) = command {
            log::trace!("command: {command:?}");
            apply_command(puzzle, command, out)?;
        }
    }
    Ok(())
}
