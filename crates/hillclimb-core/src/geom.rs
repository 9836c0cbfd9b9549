//! Grid coordinates: [`Point`] and the rectangle [`Range`] a map covers.
//!
//! Height maps are addressed by column/row, so `x` grows right and `y` grows
//! down, matching the order in which the input text is read. Everything that
//! walks a grid (parsing, searching, rendering) does so in row-major order,
//! and [`Point`]'s ordering agrees with it.

use std::cmp::Ordering;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A cell position. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the cardinal neighbours: up, right, down, left.
const CARDINAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved by `(dx, dy)`.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The four cardinal neighbours, up first and then clockwise. Route
    /// reconstruction relies on this order for its tie-break.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        CARDINAL.map(|(dx, dy)| self.shift(dx, dy))
    }

    /// Whether `other` is one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

/// Row-major: by `y`, then by `x`.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `x,y`, the syntax [`FromStr`] accepts.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| PointParseError::MissingComma(s.to_string()))?;
        let coord = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|source| PointParseError::InvalidCoordinate {
                    input: s.to_string(),
                    source,
                })
        };
        Ok(Self::new(coord(x)?, coord(y)?))
    }
}

/// Errors from parsing a [`Point`] written as `x,y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointParseError {
    /// No `,` separator was found.
    MissingComma(String),
    /// One of the two coordinates is not an integer.
    InvalidCoordinate {
        input: String,
        source: ParseIntError,
    },
}

impl fmt::Display for PointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComma(s) => {
                write!(f, "expected a point as `x,y`, got \u{201c}{s}\u{201d}")
            }
            Self::InvalidCoordinate { input, .. } => {
                write!(f, "invalid coordinate in point \u{201c}{input}\u{201d}")
            }
        }
    }
}

impl std::error::Error for PointParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingComma(_) => None,
            Self::InvalidCoordinate { source, .. } => Some(source),
        }
    }
}

/// The cells `min.x..max.x` by `min.y..max.y`, max exclusive.
///
/// A `Range` doubles as the layout of every per-cell buffer in the
/// workspace: [`index_of`](Self::index_of) and [`point_at`](Self::point_at)
/// convert between a cell and its row-major slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The range from `(x0, y0)` inclusive to `(x1, y1)` exclusive. Inverted
    /// corners give an empty range.
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Columns covered, zero when empty.
    #[inline]
    pub fn width(self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    /// Rows covered, zero when empty.
    #[inline]
    pub fn height(self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Row-major slot of `p`, or `None` if outside.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        self.contains(p).then(|| {
            (p.y - self.min.y) as usize * self.width() as usize + (p.x - self.min.x) as usize
        })
    }

    /// The cell in row-major slot `idx`. Only meaningful for
    /// `idx < self.len()`.
    #[inline]
    pub fn point_at(self, idx: usize) -> Point {
        let w = self.width().max(1) as usize;
        self.min.shift((idx % w) as i32, (idx / w) as i32)
    }

    /// Every cell, in row-major order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            end: self.len(),
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

/// Row-major iterator over a [`Range`], walking its slot indices.
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    end: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        (self.next < self.end).then(|| {
            self.next += 1;
            self.range.point_at(self.next - 1)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}
