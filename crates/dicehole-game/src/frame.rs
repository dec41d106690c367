use dicehole_core::{Operator, Rect, SlotValue};

use crate::{HoleId, HoleKind, PieceKind, Puzzle};

/// What a drawable item depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DrawKind {
    /// An operand hole.
    SquareHole,
    /// The operator hole.
    CircleHole,
    /// An operator token.
    Token(Operator),
    /// A die showing a face.
    Die(i64),
}

/// One item to draw, positioned in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawItem {
    /// What the item depicts.
    pub kind: DrawKind,
    /// Where the item sits.
    pub bounds: Rect,
}

/// Text shown alongside the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Contents of the left operand, operator and right operand holes.
    pub hole_contents: [SlotValue; 3],
    /// The expression result; `None` until every hole is full.
    pub result: Option<i64>,
    /// The goal number.
    pub goal: i64,
    /// Whether to show the winner banner.
    pub winner: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Items in back-to-front order: holes, then tokens, then dice.
    pub items: Vec<DrawItem>,
    /// Text labels.
    pub labels: Labels,
}

impl Frame {
    pub(crate) fn build(puzzle: &Puzzle) -> Self {
        let holes = puzzle.holes().iter().map(|hole| DrawItem {
            kind: match hole.kind() {
                HoleKind::Square => DrawKind::SquareHole,
                HoleKind::Circle => DrawKind::CircleHole,
            },
            bounds: hole.bounds(),
        });
        let pieces = move |want_die: bool| {
            puzzle
                .pieces()
                .iter()
                .filter(move |piece| piece.kind().is_die() == want_die)
                .map(|piece| DrawItem {
                    kind: match piece.kind() {
                        PieceKind::Die(value) => DrawKind::Die(value),
                        PieceKind::Token(op) => DrawKind::Token(op),
                    },
                    bounds: piece.bounds(),
                })
        };
        let mut items: Vec<_> = holes.collect();
        // holes draw under pieces; square holes come before the circular one
        items.sort_by_key(|item| item.kind.is_circle_hole());
        items.extend(pieces(false));
        items.extend(pieces(true));

        Self {
            items,
            labels: Labels {
                hole_contents: HoleId::ALL.map(|id| puzzle.hole(id).contents()),
                result: puzzle.result(),
                goal: puzzle.goal(),
                winner: puzzle.has_won(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use dicehole_core::{Point, Size};

    use super::*;

    #[test]
    fn test_items_are_ordered_back_to_front() {
        let puzzle = Puzzle::with_dice(10, &[3, 5, 2]).unwrap();
        let frame = puzzle.frame();
        let kinds: Vec<_> = frame.items.iter().map(|item| item.kind).collect();
        assert_eq!(
            kinds,
            [
                DrawKind::SquareHole,
                DrawKind::SquareHole,
                DrawKind::CircleHole,
                DrawKind::Token(Operator::Add),
                DrawKind::Token(Operator::Mul),
                DrawKind::Token(Operator::Sub),
                DrawKind::Die(3),
                DrawKind::Die(5),
                DrawKind::Die(2),
            ]
        );
        assert_eq!(
            frame.items[2].bounds,
            Rect::new(Point::new(200, 500), Size::square(64))
        );
    }

    #[test]
    fn test_labels_track_state() {
        let mut puzzle = Puzzle::with_dice(15, &[1, 1, 1]).unwrap();
        let labels = puzzle.frame().labels;
        assert_eq!(labels.hole_contents, [SlotValue::Empty; 3]);
        assert_eq!(labels.result, None);
        assert_eq!(labels.goal, 15);
        assert!(!labels.winner);

        for (from, to) in [
            (Point::new(100, 100), Point::new(100, 500)),
            (Point::new(100, 200), Point::new(200, 500)),
            (Point::new(200, 100), Point::new(300, 500)),
        ] {
            puzzle.on_pointer_down(from);
            puzzle.on_pointer_move(to);
            puzzle.on_pointer_up(to);
        }
        puzzle.update().unwrap();

        let labels = puzzle.frame().labels;
        assert_eq!(
            labels.hole_contents,
            [
                SlotValue::Number(1),
                SlotValue::Operator(Operator::Add),
                SlotValue::Number(1)
            ]
        );
        assert_eq!(labels.result, Some(2));
        assert!(labels.winner);
    }
}
