//! The obstacle [`Grid`]: a fixed-size wall/free occupancy matrix.

use std::fmt;

use wavefront_core::{Point, Range};
use wavefront_paths::{AdjacencyIndex, Directions};

const WALL_CHAR: char = '#';
const FREE_CHAR: char = '.';

/// A `columns × rows` occupancy matrix. `true` marks a wall.
///
/// Grids are built once (generated, parsed, or assembled with
/// [`with_wall`](Self::with_wall)) and never change afterwards; the
/// adjacency index derived from a grid stays valid for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    columns: i32,
    rows: i32,
    walls: Vec<bool>,
}

impl Grid {
    /// A grid with no walls. Non-positive sizes give an empty grid.
    pub fn open(columns: i32, rows: i32) -> Self {
        let range = Range::sized(columns, rows);
        Self {
            columns: range.width(),
            rows: range.height(),
            walls: vec![false; range.len()],
        }
    }

    /// Build a grid by asking `is_wall` about every cell in row-major order.
    pub fn from_fn(columns: i32, rows: i32, mut is_wall: impl FnMut(Point) -> bool) -> Self {
        let range = Range::sized(columns, rows);
        Self {
            columns: range.width(),
            rows: range.height(),
            walls: range.iter().map(&mut is_wall).collect(),
        }
    }

    /// Build a grid from a row-major wall matrix. Returns `None` when the
    /// length does not match `columns × rows`.
    pub fn from_walls(columns: i32, rows: i32, walls: Vec<bool>) -> Option<Self> {
        if columns < 0 || rows < 0 || walls.len() != Range::sized(columns, rows).len() {
            return None;
        }
        Some(Self {
            columns,
            rows,
            walls,
        })
    }

    /// Parse a grid drawn with `#` for walls and `.` for free cells, one
    /// line per row. Surrounding whitespace of the whole text is ignored.
    pub fn from_ascii(text: &str) -> Result<Self, GridParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GridParseError::Empty);
        }
        let mut walls = Vec::new();
        let mut columns = None;
        let mut rows = 0;
        for (y, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut width = 0;
            for (x, ch) in line.chars().enumerate() {
                walls.push(match ch {
                    WALL_CHAR => true,
                    FREE_CHAR => false,
                    _ => {
                        return Err(GridParseError::InvalidChar {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                });
                width += 1;
            }
            match columns {
                None => columns = Some(width),
                Some(w) if w != width => {
                    return Err(GridParseError::InconsistentWidth {
                        row: y as i32,
                        expected: w,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }
        Ok(Self {
            columns: columns.unwrap_or(0),
            rows,
            walls,
        })
    }

    /// Render the grid back to the [`from_ascii`](Self::from_ascii) format.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.walls.len() + self.rows as usize);
        for y in 0..self.rows {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.columns {
                out.push(if self.is_wall(Point::new(x, y)) {
                    WALL_CHAR
                } else {
                    FREE_CHAR
                });
            }
        }
        out
    }

    /// Mark `p` as a wall (builder). Out-of-range points are ignored.
    pub fn with_wall(mut self, p: Point) -> Self {
        if let Some(i) = self.range().index_of(p) {
            self.walls[i] = true;
        }
        self
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// The valid cells, `[0, columns) × [0, rows)`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::sized(self.columns, self.rows)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// Whether `p` is a wall. Out-of-range points are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.range().index_of(p).is_some_and(|i| self.walls[i])
    }

    /// Whether `p` is inside the grid and free.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.range().index_of(p).is_some_and(|i| !self.walls[i])
    }

    /// Wall cells in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.range()
            .iter()
            .zip(self.walls.iter())
            .filter_map(|(p, &w)| w.then_some(p))
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// First free cell in row-major order.
    pub fn first_free(&self) -> Option<Point> {
        self.range().iter().find(|&p| self.is_free(p))
    }

    /// Build the adjacency index of the free cells.
    pub fn adjacency(&self, directions: Directions) -> AdjacencyIndex {
        AdjacencyIndex::with_directions(self.range(), directions, |p| self.is_free(p))
    }
}

/// Unchecked wire form of a [`Grid`]; deserialization goes through
/// [`Grid::from_walls`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    columns: i32,
    rows: i32,
    walls: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridParseError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let GridRepr {
            columns,
            rows,
            walls,
        } = repr;
        let found = walls.len();
        Self::from_walls(columns, rows, walls).ok_or(GridParseError::ShapeMismatch {
            columns,
            rows,
            found,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

/// Errors that can occur when parsing a grid from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// The text has no rows.
    Empty,
    /// A row is wider or narrower than the first one.
    InconsistentWidth { row: i32, expected: i32, found: i32 },
    /// A character other than `#` or `.` was found.
    InvalidChar { ch: char, pos: Point },
    /// The wall matrix does not have `columns × rows` entries.
    ShapeMismatch { columns: i32, rows: i32, found: usize },
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("grid: no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(f, "grid: row {row} has width {found}, expected {expected}"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::ShapeMismatch {
                columns,
                rows,
                found,
            } => {
                let needed = Range::sized(*columns, *rows).len();
                write!(f, "grid: {columns}x{rows} needs {needed} cells, got {found}")
            }
        }
    }
}

impl std::error::Error for GridParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#...
.#..
....";

    #[test]
    fn parse_and_query() {
        let g = Grid::from_ascii(ROOM).unwrap();
        assert_eq!((g.columns(), g.rows()), (4, 3));
        assert!(g.is_wall(Point::new(0, 0)));
        assert!(g.is_wall(Point::new(1, 1)));
        assert!(g.is_free(Point::new(3, 2)));
        assert!(!g.is_free(Point::new(4, 0)));
        assert!(!g.is_wall(Point::new(4, 0)));
        assert_eq!(g.wall_count(), 2);
        assert_eq!(g.first_free(), Some(Point::new(1, 0)));
    }

    #[test]
    fn ascii_round_trip() {
        let g = Grid::from_ascii(ROOM).unwrap();
        assert_eq!(g.to_ascii(), ROOM);
        assert_eq!(g.to_string(), ROOM);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Grid::from_ascii("  \n "), Err(GridParseError::Empty));
        assert_eq!(
            Grid::from_ascii("..\n..."),
            Err(GridParseError::InconsistentWidth {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Grid::from_ascii("..\n.x"),
            Err(GridParseError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn with_wall_and_walls_iter() {
        let g = Grid::open(3, 2)
            .with_wall(Point::new(2, 0))
            .with_wall(Point::new(0, 1))
            .with_wall(Point::new(9, 9));
        assert_eq!(
            g.walls().collect::<Vec<_>>(),
            vec![Point::new(2, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn from_walls_checks_length() {
        assert!(Grid::from_walls(2, 2, vec![false; 3]).is_none());
        assert!(Grid::from_walls(-2, 2, Vec::new()).is_none());
        // 50000 × 50000 does not fit in an i32.
        assert!(Grid::from_walls(50_000, 50_000, vec![false; 4]).is_none());
        let g = Grid::from_walls(2, 1, vec![true, false]).unwrap();
        assert_eq!(g.first_free(), Some(Point::new(1, 0)));
    }

    #[test]
    fn adjacency_excludes_walls() {
        let g = Grid::from_ascii(ROOM).unwrap();
        let idx = g.adjacency(Directions::DEFAULT);
        assert_eq!(idx.free_count(), 10);
        assert!(!idx.contains(Point::new(0, 0)));
        assert_eq!(
            idx.neighbors_of(Point::new(0, 1)).unwrap(),
            &[Point::new(0, 2)]
        );
    }

    #[test]
    fn full_wall_grid_has_no_free_cell() {
        let g = Grid::from_ascii("##\n##").unwrap();
        assert_eq!(g.first_free(), None);
    }
}
