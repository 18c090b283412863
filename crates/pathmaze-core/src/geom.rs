//! Grid coordinates.
//!
//! `x` is the column and grows right, `y` is the row and grows down.

use std::fmt;
use std::ops::Add;

/// A cell position. Serialized as `{ "col": x, "row": y }`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    #[cfg_attr(feature = "serde", serde(rename = "col"))]
    pub x: i32,
    #[cfg_attr(feature = "serde", serde(rename = "row"))]
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point `dx` columns and `dy` rows away.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The cells `step` away in carving order: up, right, down, left.
    ///
    /// Room-to-room moves on the maze lattice use `step = 2`.
    #[inline]
    pub const fn neighbors_4(self, step: i32) -> [Point; 4] {
        [
            self.shift(0, -step),
            self.shift(step, 0),
            self.shift(0, step),
            self.shift(-step, 0),
        ]
    }

    /// The cell halfway to `other`, rounding toward zero. Between two rooms
    /// of the lattice this is the wall that separates them.
    #[inline]
    pub const fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    /// Number of orthogonal steps to `other`.
    #[inline]
    pub const fn taxicab(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(col {}, row {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.shift(rhs.x, rhs.y)
    }
}

/// The cells of a `width × height` block whose top-left corner is `min`.
/// Columns `min.x..max.x`, rows `min.y..max.y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The block spanned by two corners, `(x0, y0)` included and `(x1, y1)`
    /// excluded. Corners may be given in either order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// A `width × height` block anchored at the origin.
    #[inline]
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// The block minus its one-cell border; empty when nothing is left.
    pub fn interior(self) -> Self {
        let r = Self {
            min: self.min.shift(1, 1),
            max: self.max.shift(-1, -1),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Cells in row-major order, matching node indices of a grid of the
    /// same size.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at {}", self.width(), self.height(), self.min)
    }
}

/// Row-major walk over a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    len: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let w = self.range.width() as usize;
        let p = self
            .range
            .min
            .shift((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carving_neighbors_and_walls_between() {
        let p = Point::new(3, 3);
        let rooms = p.neighbors_4(2);
        assert_eq!(
            rooms,
            [Point::new(3, 1), Point::new(5, 3), Point::new(3, 5), Point::new(1, 3)]
        );
        let walls: Vec<Point> = rooms.iter().map(|&r| p.midpoint(r)).collect();
        assert_eq!(
            walls,
            vec![Point::new(3, 2), Point::new(4, 3), Point::new(3, 4), Point::new(2, 3)]
        );
        assert_eq!(p + Point::new(-1, 2), Point::new(2, 5));
        assert_eq!(p.taxicab(Point::new(0, 7)), 7);
    }

    #[test]
    fn iter_is_row_major() {
        let r = Range::sized(3, 2);
        assert_eq!(r.len(), 6);
        assert_eq!(r.iter().len(), 6);
        let pts: Vec<Point> = r.into_iter().collect();
        assert_eq!(pts[2], Point::new(2, 0));
        assert_eq!(pts[4], Point::new(1, 1));
        assert_eq!(Range::new(2, 5, 4, 7).iter().next(), Some(Point::new(2, 5)));
        assert_eq!(Range::sized(0, 4).iter().count(), 0);
    }

    #[test]
    fn interior_drops_the_border() {
        assert_eq!(Range::sized(5, 7).interior(), Range::new(1, 1, 4, 6));
        assert!(Range::sized(2, 2).interior().is_empty());
    }

    #[test]
    fn contains_excludes_max() {
        let r = Range::sized(3, 3);
        assert!(r.contains(Point::new(2, 2)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(-1, 1)));
    }
}
