use std::fmt;
use std::str::FromStr;

use wavefront_core::Point;

/// A fixed priority order over the four orthogonal steps.
///
/// The order decides which neighbour is enqueued first, and therefore the
/// within-layer visiting order of a traversal. Only permutations of the
/// four unit steps can be represented; diagonal movement is impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Directions([Point; 4]);

impl Directions {
    pub const LEFT: Point = Point::new(-1, 0);
    pub const UP: Point = Point::new(0, -1);
    pub const RIGHT: Point = Point::new(1, 0);
    pub const DOWN: Point = Point::new(0, 1);

    /// Left, up, right, down.
    pub const DEFAULT: Self = Self([Self::LEFT, Self::UP, Self::RIGHT, Self::DOWN]);

    /// Build an order from four steps. Returns `None` unless `order` is a
    /// permutation of the four orthogonal unit steps.
    pub fn new(order: [Point; 4]) -> Option<Self> {
        let units = [Self::LEFT, Self::UP, Self::RIGHT, Self::DOWN];
        let all_units = order.iter().all(|d| units.contains(d));
        let distinct = (0..4).all(|i| (i + 1..4).all(|j| order[i] != order[j]));
        (all_units && distinct).then_some(Self(order))
    }

    /// The steps in priority order.
    #[inline]
    pub fn steps(&self) -> &[Point; 4] {
        &self.0
    }

    fn letter(d: Point) -> char {
        match (d.x, d.y) {
            (-1, 0) => 'l',
            (0, -1) => 'u',
            (1, 0) => 'r',
            _ => 'd',
        }
    }
}

impl Default for Directions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.0 {
            write!(f, "{}", Self::letter(d))?;
        }
        Ok(())
    }
}

/// Error returned when a direction order string is not a permutation of
/// `l`, `u`, `r`, `d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDirections(pub String);

impl fmt::Display for InvalidDirections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid direction order \u{201c}{}\u{201d}: expected a permutation of l, u, r, d",
            self.0
        )
    }
}

impl std::error::Error for InvalidDirections {}

impl FromStr for Directions {
    type Err = InvalidDirections;

    /// Parse an order such as `"lurd"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidDirections(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        let [a, b, c, d] = chars.as_slice() else {
            return Err(err());
        };
        let mut order = [Point::ZERO; 4];
        for (slot, ch) in order.iter_mut().zip([a, b, c, d]) {
            *slot = match ch.to_ascii_lowercase() {
                'l' => Self::LEFT,
                'u' => Self::UP,
                'r' => Self::RIGHT,
                'd' => Self::DOWN,
                _ => return Err(err()),
            };
        }
        Self::new(order).ok_or_else(err)
    }
}

impl TryFrom<String> for Directions {
    type Error = InvalidDirections;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Directions> for String {
    fn from(d: Directions) -> Self {
        d.to_string()
    }
}

/// Cached neighbour computation helper.
///
/// Enumerates the orthogonal neighbours of a point in a fixed
/// [`Directions`] order, filtered by a predicate, reusing one buffer.
pub struct Neighbors {
    dirs: Directions,
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new(Directions::DEFAULT)
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper using `dirs`.
    pub fn new(dirs: Directions) -> Self {
        Self {
            dirs,
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the neighbours of `p` for which `keep` returns `true`, in
    /// priority order.
    pub fn around(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for &d in self.dirs.steps() {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn directions_serialize_as_letters() {
        let d: Directions = "rdlu".parse().unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"rdlu\"");
        let back: Directions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Directions>("\"llll\"").is_err());
    }
}
