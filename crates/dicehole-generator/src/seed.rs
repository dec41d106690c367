use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use dicehole_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("dicehole");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from a human-friendly phrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleSeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("invalid hex digit at position {index}")]
    InvalidDigit {
        /// Character position of the first invalid digit.
        index: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = PuzzleSeedParseError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 64 {
            return Err(PuzzleSeedParseError::InvalidLength { len: chars.len() });
        }

        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let digit = |index: usize| {
                chars[index]
                    .to_digit(16)
                    .ok_or(PuzzleSeedParseError::InvalidDigit { index })
            };
            let hi = digit(i * 2)?;
            let lo = digit(i * 2 + 1)?;
            *byte = ((hi << 4) | lo) as u8;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);

        let upper: PuzzleSeed = SEED.to_uppercase().parse().unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(PuzzleSeedParseError::InvalidLength { len: 3 })
        );
        let mut bad = SEED.to_owned();
        bad.replace_range(10..11, "g");
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(PuzzleSeedParseError::InvalidDigit { index: 10 })
        );
    }

    #[test]
    fn test_from_phrase_is_stable() {
        assert_eq!(PuzzleSeed::from_phrase("a"), PuzzleSeed::from_phrase("a"));
        assert_ne!(PuzzleSeed::from_phrase("a"), PuzzleSeed::from_phrase("b"));
        // SHA-256 of the empty string
        assert_eq!(
            PuzzleSeed::from_phrase("").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
