//! Height maps parsed from text.
//!
//! A [`HeightMap`] is built from lines of elevation letters. Exactly one cell
//! carries the start marker [`START_MARKER`] (elevation `a`) and exactly one
//! carries the end marker [`END_MARKER`] (elevation `z`). Cells are stored
//! row-major in a flat buffer and addressed by [`Point`].

use std::fmt;
use std::str::FromStr;

use crate::elevation::Elevation;
use crate::geom::{Point, Range};

/// Character marking the start cell.
pub const START_MARKER: char = 'S';
/// Character marking the end cell.
pub const END_MARKER: char = 'E';

/// A rectangular grid of elevations with a start and an end cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    cells: Vec<Elevation>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl HeightMap {
    /// Parse a height map from text, one row per line.
    ///
    /// Trailing line breaks are ignored and `\r\n` line endings are accepted.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Self::from_lines(s.trim_end_matches(['\n', '\r']).lines())
    }

    /// Build a height map from already split rows.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;
        let mut start: Option<Point> = None;
        let mut end: Option<Point> = None;

        for (y, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(ParseError::Ragged {
                    row: y,
                    expected,
                    found,
                });
            }

            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let elevation = match ch {
                    START_MARKER => {
                        if let Some(first) = start {
                            return Err(ParseError::DuplicateStart { first, second: pos });
                        }
                        start = Some(pos);
                        Elevation::LOWEST
                    }
                    END_MARKER => {
                        if let Some(first) = end {
                            return Err(ParseError::DuplicateEnd { first, second: pos });
                        }
                        end = Some(pos);
                        Elevation::HIGHEST
                    }
                    _ => Elevation::from_letter(ch)
                        .ok_or(ParseError::InvalidChar { ch, pos })?,
                };
                cells.push(elevation);
            }
            height += 1;
        }

        let width = match width {
            Some(w) if w > 0 => w,
            _ => return Err(ParseError::Empty),
        };
        let start = start.ok_or(ParseError::MissingStart)?;
        let end = end.ok_or(ParseError::MissingEnd)?;
        let bounds = Range::new(0, 0, width as i32, height as i32);

        log::debug!("parsed {width}x{height} height map, start {start}, end {end}");

        Ok(Self {
            cells,
            bounds,
            start,
            end,
        })
    }

    /// The start cell.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The end cell.
    pub fn end(&self) -> Point {
        self.end
    }

    /// The rectangle covered by the map, anchored at (0, 0).
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a successfully parsed map.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies on the map.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Elevation at `p`, or `None` if out of bounds.
    pub fn elevation(&self, p: Point) -> Option<Elevation> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// Iterate over `(Point, Elevation)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Elevation)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// All cells at the given elevation, in row-major order.
    pub fn points_at(&self, elevation: Elevation) -> Vec<Point> {
        self.iter()
            .filter(|&(_, e)| e == elevation)
            .map(|(p, _)| p)
            .collect()
    }

    /// All cells at the lowest elevation (including the start cell), in
    /// row-major order.
    pub fn lowest_points(&self) -> Vec<Point> {
        self.points_at(Elevation::LOWEST)
    }

    /// The character `p` was written as in the input.
    pub fn glyph(&self, p: Point) -> Option<char> {
        if p == self.start {
            return Some(START_MARKER);
        }
        if p == self.end {
            return Some(END_MARKER);
        }
        self.elevation(p).map(Elevation::letter)
    }
}

impl FromStr for HeightMap {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the map back to its input text, markers included.
impl fmt::Display for HeightMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let ch = self.glyph(Point::new(x, y)).unwrap_or('?');
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a height map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no rows, or rows of zero width.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither an elevation letter nor a marker.
    InvalidChar { ch: char, pos: Point },
    /// No start marker was found.
    MissingStart,
    /// No end marker was found.
    MissingEnd,
    /// More than one start marker was found.
    DuplicateStart { first: Point, second: Point },
    /// More than one end marker was found.
    DuplicateEnd { first: Point, second: Point },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "height map is empty"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} columns, expected {expected}"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "no start marker `{START_MARKER}` found"),
            Self::MissingEnd => write!(f, "no end marker `{END_MARKER}` found"),
            Self::DuplicateStart { first, second } => write!(
                f,
                "second start marker `{START_MARKER}` at {second} (first at {first})"
            ),
            Self::DuplicateEnd { first, second } => write!(
                f,
                "second end marker `{END_MARKER}` at {second} (first at {first})"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn parse_sample() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        assert_eq!(map.width(), 8);
        assert_eq!(map.height(), 5);
        assert_eq!(map.len(), 40);
        assert_eq!(map.start(), Point::new(0, 0));
        assert_eq!(map.end(), Point::new(5, 2));
        assert_eq!(map.elevation(map.start()), Some(Elevation::LOWEST));
        assert_eq!(map.elevation(map.end()), Some(Elevation::HIGHEST));
        assert_eq!(
            map.elevation(Point::new(3, 1)).map(Elevation::letter),
            Some('r')
        );
        assert_eq!(map.elevation(Point::new(8, 0)), None);
    }

    #[test]
    fn display_reproduces_input() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        assert_eq!(map.to_string(), SAMPLE);
    }

    #[test]
    fn accepts_crlf_and_missing_final_newline() {
        let crlf = SAMPLE.replace('\n', "\r\n");
        let a = HeightMap::parse(&crlf).unwrap();
        let b = HeightMap::parse(SAMPLE.trim_end()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_str_matches_parse() {
        let map: HeightMap = "SbE".parse().unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 1);
    }

    #[test]
    fn lowest_points_include_start() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let lows = map.lowest_points();
        assert_eq!(lows.len(), 6);
        assert_eq!(lows[0], map.start());
        assert!(lows.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_input() {
        assert_eq!(HeightMap::parse(""), Err(ParseError::Empty));
        assert_eq!(HeightMap::parse("\n\n"), Err(ParseError::Empty));
    }

    #[test]
    fn ragged_rows() {
        let err = HeightMap::parse("Sab\nabcd\nabE").unwrap_err();
        assert_eq!(
            err,
            ParseError::Ragged {
                row: 1,
                expected: 3,
                found: 4,
            }
        );
    }

    #[test]
    fn interior_blank_line_is_ragged() {
        let err = HeightMap::parse("Sab\n\nabE").unwrap_err();
        assert!(matches!(err, ParseError::Ragged { row: 1, .. }));
    }

    #[test]
    fn invalid_character() {
        let err = HeightMap::parse("Sa#\nabE").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidChar {
                ch: '#',
                pos: Point::new(2, 0),
            }
        );
    }

    #[test]
    fn missing_markers() {
        assert_eq!(HeightMap::parse("abc\nabE"), Err(ParseError::MissingStart));
        assert_eq!(HeightMap::parse("Sbc\nabz"), Err(ParseError::MissingEnd));
    }

    #[test]
    fn duplicate_markers() {
        assert_eq!(
            HeightMap::parse("SbS\nabE"),
            Err(ParseError::DuplicateStart {
                first: Point::new(0, 0),
                second: Point::new(2, 0),
            })
        );
        assert!(matches!(
            HeightMap::parse("SbE\nEbc"),
            Err(ParseError::DuplicateEnd { .. })
        ));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = HeightMap::parse("Sa#\nabE").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid character \u{201c}#\u{201d} at 2,0"
        );
        assert_eq!(ParseError::MissingEnd.to_string(), "no end marker `E` found");
    }
}
