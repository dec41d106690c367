//! Script commands for driving a puzzle.
//!
//! One command per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! down 200 100
//! move 100 500
//! up 100 500
//! tick
//! show
//! hint
//! ```

use std::str::FromStr;

use dicehole_core::Point;

/// A single script command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pointer pressed.
    Down(Point),
    /// Pointer dragged.
    Move(Point),
    /// Pointer released.
    Up(Point),
    /// Advance one frame without input.
    Tick,
    /// Print the current frame.
    Show,
    /// Print the closest solution.
    Hint,
}

/// Why a script line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCommandError {
    /// The command word is unknown.
    #[display("unknown command {name:?}")]
    UnknownCommand {
        /// The rejected word.
        name: String,
    },
    /// The command got the wrong number of arguments.
    #[display("{name} takes {expected} arguments, got {found}")]
    WrongArity {
        /// The command word.
        name: &'static str,
        /// Expected argument count.
        expected: usize,
        /// Given argument count.
        found: usize,
    },
    /// A coordinate is not an integer.
    #[display("invalid coordinate {text:?}")]
    InvalidCoordinate {
        /// The rejected argument.
        text: String,
    },
}

/// A [`ParseCommandError`] with the 1-based line it occurred on.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line {line}: {source}")]
pub struct ScriptError {
    /// 1-based line number.
    pub line: usize,
    /// What went wrong.
    pub source: ParseCommandError,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let point = |name: &'static str| -> Result<Point, ParseCommandError> {
            let &[x, y] = args.as_slice() else {
                return Err(ParseCommandError::WrongArity {
                    name,
                    expected: 2,
                    found: args.len(),
                });
            };
            let coordinate = |text: &str| {
                text.parse::<i32>()
                    .map_err(|_| ParseCommandError::InvalidCoordinate {
                        text: text.to_owned(),
                    })
            };
            Ok(Point::new(coordinate(x)?, coordinate(y)?))
        };
        let bare = |name: &'static str, command: Self| {
            if args.is_empty() {
                Ok(command)
            } else {
                Err(ParseCommandError::WrongArity {
                    name,
                    expected: 0,
                    found: args.len(),
                })
            }
        };

        match name.to_ascii_lowercase().as_str() {
            "down" => point("down").map(Self::Down),
            "move" => point("move").map(Self::Move),
            "up" => point("up").map(Self::Up),
            "tick" => bare("tick", Self::Tick),
            "show" => bare("show", Self::Show),
            "hint" => bare("hint", Self::Hint),
            _ => Err(ParseCommandError::UnknownCommand {
                name: name.to_owned(),
            }),
        }
    }
}

/// Parses one script line, returning `None` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseCommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    line.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_line("down 200 100"),
            Ok(Some(Command::Down(Point::new(200, 100))))
        );
        assert_eq!(
            parse_line("  MOVE -5 40 "),
            Ok(Some(Command::Move(Point::new(-5, 40))))
        );
        assert_eq!(parse_line("up 1 2"), Ok(Some(Command::Up(Point::new(1, 2)))));
        assert_eq!(parse_line("tick"), Ok(Some(Command::Tick)));
        assert_eq!(parse_line("show"), Ok(Some(Command::Show)));
        assert_eq!(parse_line("hint"), Ok(Some(Command::Hint)));
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   # drag the five"), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_line("jump 1 2"),
            Err(ParseCommandError::UnknownCommand {
                name: "jump".to_owned()
            })
        );
        assert_eq!(
            parse_line("down 1"),
            Err(ParseCommandError::WrongArity {
                name: "down",
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            parse_line("tick now"),
            Err(ParseCommandError::WrongArity {
                name: "tick",
                expected: 0,
                found: 1
            })
        );
        assert_eq!(
            parse_line("up 1 y"),
            Err(ParseCommandError::InvalidCoordinate {
                text: "y".to_owned()
            })
        );
    }
}
