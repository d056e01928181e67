use std::fmt;
use std::ops::{Add, Neg, Sub};

type X = i32;
type Y = i32;

/// A coordinate on a grid, or the difference between two of them. Either
/// component may be negative when used as a delta.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct Position(pub X, pub Y);

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct Size(pub usize, pub usize);

impl Position {
    pub fn x(self) -> X {
        self.0
    }

    pub fn y(self) -> Y {
        self.1
    }

    /// North, east, south, west. Some of these may lie outside whatever grid
    /// the caller has in mind; check with `Grid::in_bounds`.
    pub fn neighbours(self) -> [Position; 4] {
        let Position(x, y) = self;
        [
            Position(x, y - 1),
            Position(x + 1, y),
            Position(x, y + 1),
            Position(x - 1, y),
        ]
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Self::Output {
        let Position(x, y) = self;
        let Position(dx, dy) = rhs;
        Position(x + dx, y + dy)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Self::Output {
        let Position(x, y) = self;
        let Position(dx, dy) = rhs;
        Position(x - dx, y - dy)
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Self::Output {
        Position(-self.0, -self.1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl Size {
    pub fn width(self) -> usize {
        self.0
    }

    pub fn height(self) -> usize {
        self.1
    }

    /// Longest side a grid may have. Every cell then has an `i32` coordinate.
    pub const MAX_SIDE: usize = i32::MAX as usize;

    /// `width * height`, saturating for sizes no grid can have.
    pub fn count(self) -> usize {
        self.0.saturating_mul(self.1)
    }

    /// `width * height`, or `None` if a side is longer than `MAX_SIDE` or the
    /// product doesn't fit in a `usize`.
    pub fn checked_count(self) -> Option<usize> {
        let Size(width, height) = self;
        if width > Size::MAX_SIDE || height > Size::MAX_SIDE {
            return None;
        }
        width.checked_mul(height)
    }

    pub fn contains(self, pos: Position) -> bool {
        let Size(width, height) = self;
        let Position(x, y) = pos;
        x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height
    }

    /// Row-major index of `pos` into a flat buffer of this size. The caller
    /// must have checked `contains` first.
    pub(crate) fn flat_index(self, pos: Position) -> usize {
        let Position(x, y) = pos;
        y as usize * self.0 + x as usize
    }

    /// Every position inside this size, row by row. Empty for sizes no grid
    /// can have.
    pub fn positions(self) -> Positions {
        Positions {
            size: self,
            count: self.checked_count().unwrap_or(0),
            pos: 0,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.1)
    }
}

#[derive(Debug, Clone)]
pub struct Positions {
    size: Size,
    count: usize,
    pos: usize,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let Size(width, _) = self.size;
        if self.pos < self.count {
            let row = self.pos / width; // Y
            let col = self.pos % width; // X
            self.pos += 1;
            Some(Position(col as X, row as Y))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}
