//! Screen-space geometry for pieces and holes.
//!
//! Coordinates are integer pixels with `y` growing downwards, matching the
//! touch coordinates delivered by the shell.

/// A point in screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Width and height of a bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    #[must_use]
    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }
}

/// An axis-aligned rectangle described by its center and size.
///
/// # Examples
///
/// ```
/// use dicehole_core::{Point, Rect, Size};
///
/// let hole = Rect::new(Point::new(100, 500), Size::square(64));
/// assert!(hole.contains(Point::new(68, 532)));
/// assert!(!hole.contains(Point::new(67, 500)));
///
/// let die = Rect::new(Point::new(150, 500), Size::square(64));
/// assert!(hole.overlaps(&die));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Center of the rectangle.
    pub center: Point,
    /// Extent of the rectangle.
    pub size: Size,
}

#[allow(clippy::cast_lossless)]
impl Rect {
    /// Creates a rectangle centered at `center`.
    #[must_use]
    pub const fn new(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    /// Left edge.
    ///
    /// Edges are widened to `i64` so that rectangles centered anywhere in the
    /// `i32` plane have representable edges.
    #[must_use]
    pub const fn left(&self) -> i64 {
        self.center.x as i64 - (self.size.width / 2) as i64
    }

    /// Top edge.
    #[must_use]
    pub const fn top(&self) -> i64 {
        self.center.y as i64 - (self.size.height / 2) as i64
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> i64 {
        self.left() + self.size.width as i64
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i64 {
        self.top() + self.size.height as i64
    }

    /// Returns `true` if `point` lies inside the rectangle, edges included.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        let (x, y) = (point.x as i64, point.y as i64);
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// Returns `true` if the two rectangles share interior area.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
