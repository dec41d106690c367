use std::fmt::{self, Display};

use dicehole_core::{Operator, Point, Rect, Size, SlotValue};

use crate::HoleKind;

/// Identifies a piece within a [`Puzzle`](crate::Puzzle).
///
/// Ids follow pointer-down priority: all dice in creation order, then all
/// operator tokens in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub usize);

impl PieceId {
    /// Returns the index of the piece in [`Puzzle::pieces`](crate::Puzzle::pieces).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a piece represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum PieceKind {
    /// A die showing a face value.
    Die(i64),
    /// An operator token (coin).
    Token(Operator),
}

impl PieceKind {
    /// Returns the value a hole holds when this piece snaps into it.
    #[must_use]
    pub const fn slot_value(self) -> SlotValue {
        match self {
            Self::Die(value) => SlotValue::Number(value),
            Self::Token(op) => SlotValue::Operator(op),
        }
    }

    /// Returns the kind of hole this piece belongs in.
    #[must_use]
    pub const fn hole_kind(self) -> HoleKind {
        match self {
            Self::Die(_) => HoleKind::Square,
            Self::Token(_) => HoleKind::Circle,
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Die(value) => write!(f, "die {value}"),
            Self::Token(op) => write!(f, "token {op}"),
        }
    }
}

/// A draggable piece: a die or an operator token.
///
/// # Examples
///
/// ```
/// use dicehole_core::{Point, Size};
/// use dicehole_game::{Piece, PieceKind};
///
/// let mut die = Piece::new(PieceKind::Die(4), Point::new(100, 100), Size::square(64));
///
/// die.handle_pointer_down(Point::new(500, 500));
/// assert!(!die.is_touched());
///
/// die.handle_pointer_down(Point::new(110, 90));
/// assert!(die.is_touched());
///
/// die.set_position(Point::new(300, 300));
/// die.release();
/// assert!(!die.is_touched());
/// assert_eq!(die.center(), Point::new(300, 300));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    bounds: Rect,
    touched: bool,
}

impl Piece {
    /// Creates an untouched piece centered at `center`.
    #[must_use]
    pub const fn new(kind: PieceKind, center: Point, size: Size) -> Self {
        Self {
            kind,
            bounds: Rect::new(center, size),
            touched: false,
        }
    }

    /// Returns what the piece represents.
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the bounding box.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the center position.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.bounds.center
    }

    /// Returns `true` while the piece is being carried.
    #[must_use]
    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    /// Returns the value a hole holds when this piece snaps into it.
    #[must_use]
    pub const fn slot_value(&self) -> SlotValue {
        self.kind.slot_value()
    }

    /// Marks the piece touched if `point` lies within its bounds.
    ///
    /// A pointer outside the bounds leaves the piece unchanged.
    pub fn handle_pointer_down(&mut self, point: Point) {
        if self.bounds.contains(point) {
            self.touched = true;
        }
    }

    /// Moves the center to `point`, without clamping.
    pub fn set_position(&mut self, point: Point) {
        self.bounds.center = point;
    }

    /// Clears the touched flag.
    pub fn release(&mut self) {
        self.touched = false;
    }
}
