use std::fmt::{self, Display};

use dicehole_core::{Point, Rect, Size, SlotValue};

use crate::{Piece, PieceKind};

/// The three holes of an expression: `lhs <operator> rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HoleId {
    /// The left operand (square) hole.
    Lhs,
    /// The operator (circular) hole.
    Operator,
    /// The right operand (square) hole.
    Rhs,
}

impl HoleId {
    /// All holes in expression order.
    pub const ALL: [Self; 3] = [Self::Lhs, Self::Operator, Self::Rhs];

    /// Returns the index of the hole in [`Puzzle::holes`](crate::Puzzle::holes).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Lhs => 0,
            Self::Operator => 1,
            Self::Rhs => 2,
        }
    }

    /// Returns the shape of this hole.
    #[must_use]
    pub const fn kind(self) -> HoleKind {
        match self {
            Self::Lhs | Self::Rhs => HoleKind::Square,
            Self::Operator => HoleKind::Circle,
        }
    }
}

impl Display for HoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lhs => "left operand",
            Self::Operator => "operator",
            Self::Rhs => "right operand",
        };
        f.write_str(name)
    }
}

/// Shape of a hole, which decides the pieces it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum HoleKind {
    /// Accepts dice.
    Square,
    /// Accepts operator tokens.
    Circle,
}

impl HoleKind {
    /// Returns `true` if pieces of `kind` belong in this hole.
    #[must_use]
    pub const fn accepts(self, kind: PieceKind) -> bool {
        matches!(
            (self, kind),
            (Self::Square, PieceKind::Die(_)) | (Self::Circle, PieceKind::Token(_))
        )
    }
}

/// A target slot that pieces snap into.
///
/// The hole is full exactly when its contents are not [`SlotValue::Empty`], so
/// occupancy and contents cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hole {
    kind: HoleKind,
    bounds: Rect,
    contents: SlotValue,
}

impl Hole {
    /// Creates an empty hole centered at `center`.
    #[must_use]
    pub const fn new(kind: HoleKind, center: Point, size: Size) -> Self {
        Self {
            kind,
            bounds: Rect::new(center, size),
            contents: SlotValue::Empty,
        }
    }

    /// Returns the shape of the hole.
    #[must_use]
    pub const fn kind(&self) -> HoleKind {
        self.kind
    }

    /// Returns the bounding box.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the value currently held.
    #[must_use]
    pub const fn contents(&self) -> SlotValue {
        self.contents
    }

    /// Returns `true` if nothing is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Returns `true` if pieces of `kind` belong in this hole.
    #[must_use]
    pub const fn accepts(&self, kind: PieceKind) -> bool {
        self.kind.accepts(kind)
    }

    /// Returns `true` if the piece's bounds intersect the hole's bounds.
    #[must_use]
    pub const fn overlaps(&self, piece: &Piece) -> bool {
        self.bounds.overlaps(&piece.bounds())
    }

    /// Takes in `piece` if it overlaps the hole.
    ///
    /// On overlap the hole holds the piece's value and, when `center_piece` is
    /// set, the piece is moved onto the hole's center. The piece kind is not
    /// checked here. Returns whether the piece snapped.
    pub fn snap_if_close(&mut self, piece: &mut Piece, center_piece: bool) -> bool {
        if !self.overlaps(piece) {
            return false;
        }
        self.contents = piece.slot_value();
        if center_piece {
            piece.set_position(self.bounds.center);
        }
        true
    }

    /// Empties the hole if none of `pieces` overlaps it.
    ///
    /// Returns `true` if the hole went from full to empty.
    pub fn clear_if_empty<'a, I>(&mut self, pieces: I) -> bool
    where
        I: IntoIterator<Item = &'a Piece>,
    {
        if pieces.into_iter().any(|piece| self.overlaps(piece)) {
            return false;
        }
        let was_full = !self.is_empty();
        self.contents = SlotValue::Empty;
        was_full
    }

    #[cfg(test)]
    pub(crate) fn set_contents(&mut self, contents: SlotValue) {
        self.contents = contents;
    }
}
