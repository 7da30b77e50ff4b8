use wavefront_core::{Point, Range};

/// Minimal search interface over a bounded grid graph.
pub trait Pather {
    /// The rectangle every node of the graph lives in.
    fn range(&self) -> Range;

    /// Whether `p` is a node of the graph (in range and not blocked).
    fn passable(&self, p: Point) -> bool;

    /// Append neighbours of `p` into `buf`, in a fixed order. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
