use dicehole_core::{Operator, Point, Rect, Size};

use crate::{GameError, HoleId};

/// Where pieces start and where holes sit, in screen coordinates.
///
/// The default reproduces the classic screen: three dice in a row at the top,
/// the `+`, `*` and `-` tokens below them, and the two square holes with the
/// circular hole between them near the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleLayout {
    /// Centers of the first dice, in creation order.
    pub dice: Vec<Point>,
    /// Horizontal step used to place dice beyond [`Self::dice`].
    pub die_spacing: i32,
    /// Operator tokens and their centers, in pointer-down priority order.
    pub tokens: Vec<(Operator, Point)>,
    /// Centers of the left operand, operator and right operand holes.
    pub holes: [Point; 3],
    /// Size of dice and tokens.
    pub piece_size: Size,
    /// Size of holes.
    pub hole_size: Size,
}

impl Default for PuzzleLayout {
    fn default() -> Self {
        Self {
            dice: vec![Point::new(100, 100), Point::new(200, 100), Point::new(300, 100)],
            die_spacing: 100,
            tokens: vec![
                (Operator::Add, Point::new(100, 200)),
                (Operator::Mul, Point::new(200, 200)),
                (Operator::Sub, Point::new(300, 200)),
            ],
            holes: [Point::new(100, 500), Point::new(200, 500), Point::new(300, 500)],
            piece_size: Size::square(64),
            hole_size: Size::square(64),
        }
    }
}

impl PuzzleLayout {
    /// Returns the starting center of the `index`-th die.
    ///
    /// Dice past the explicit positions continue the row from the last one.
    #[must_use]
    pub fn die_center(&self, index: usize) -> Point {
        if let Some(center) = self.dice.get(index) {
            return *center;
        }
        let last = self.dice.last().copied().unwrap_or_default();
        let steps = i32::try_from(index + 1 - self.dice.len()).unwrap_or(i32::MAX);
        Point::new(
            last.x.saturating_add(self.die_spacing.saturating_mul(steps)),
            last.y,
        )
    }

    /// Returns the center of a hole.
    #[must_use]
    pub const fn hole_center(&self, id: HoleId) -> Point {
        self.holes[id.index()]
    }

    /// Returns the starting center of the token for `op`, if laid out.
    #[must_use]
    pub fn token_center(&self, op: Operator) -> Option<Point> {
        self.tokens
            .iter()
            .find_map(|&(token, center)| (token == op).then_some(center))
    }

    /// Checks that the layout can host a puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLayout`] if a size is not positive or two
    /// holes overlap, since one piece could then fill both.
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = |size: Size| size.width > 0 && size.height > 0;
        if !positive(self.piece_size) {
            return Err(GameError::InvalidLayout {
                reason: "piece size must be positive",
            });
        }
        if !positive(self.hole_size) {
            return Err(GameError::InvalidLayout {
                reason: "hole size must be positive",
            });
        }

        let rects = HoleId::ALL.map(|id| Rect::new(self.hole_center(id), self.hole_size));
        for (i, a) in rects.iter().enumerate() {
            if rects[i + 1..].iter().any(|b| a.overlaps(b)) {
                return Err(GameError::InvalidLayout {
                    reason: "holes must not overlap",
                });
            }
        }
        Ok(())
    }
}

/// Behavior switches for a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleOptions {
    /// Move a piece onto the hole's center when it snaps in.
    pub snap_to_hole: bool,
}

impl Default for PuzzleOptions {
    fn default() -> Self {
        Self { snap_to_hole: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        let layout = PuzzleLayout::default();
        assert_eq!(layout.validate(), Ok(()));
        assert_eq!(layout.token_center(Operator::Mul), Some(Point::new(200, 200)));
        assert_eq!(layout.hole_center(HoleId::Rhs), Point::new(300, 500));
    }

    #[test]
    fn test_extra_dice_continue_the_row() {
        let layout = PuzzleLayout::default();
        assert_eq!(layout.die_center(2), Point::new(300, 100));
        assert_eq!(layout.die_center(3), Point::new(400, 100));
        assert_eq!(layout.die_center(5), Point::new(600, 100));

        let empty = PuzzleLayout {
            dice: Vec::new(),
            ..PuzzleLayout::default()
        };
        assert_eq!(empty.die_center(0), Point::new(100, 0));
    }

    #[test]
    fn test_invalid_layouts() {
        let overlapping = PuzzleLayout {
            holes: [Point::new(100, 500), Point::new(130, 500), Point::new(300, 500)],
            ..PuzzleLayout::default()
        };
        assert_eq!(
            overlapping.validate(),
            Err(GameError::InvalidLayout {
                reason: "holes must not overlap"
            })
        );

        let flat = PuzzleLayout {
            hole_size: Size::new(64, 0),
            ..PuzzleLayout::default()
        };
        assert!(flat.validate().is_err());

        let missing = PuzzleLayout {
            tokens: vec![(Operator::Add, Point::new(100, 200))],
            ..PuzzleLayout::default()
        };
        assert_eq!(missing.token_center(Operator::Sub), None);
    }
}
