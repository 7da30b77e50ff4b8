//! Precomputed free-neighbour lists.

use wavefront_core::{Point, Range};

use crate::neighbors::{Directions, Neighbors};
use crate::traits::Pather;

/// For every free cell of a grid, the ordered list of its free orthogonal
/// neighbours.
///
/// Walls appear neither as keys nor as neighbours. The lists are stored in
/// compressed form: `edges[starts[i]..starts[i + 1]]` are the neighbours of
/// the cell with flat index `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyIndex {
    range: Range,
    directions: Directions,
    free: Vec<bool>,
    starts: Vec<usize>,
    edges: Vec<Point>,
}

impl AdjacencyIndex {
    /// Build the index over `range` with the default direction order.
    /// `is_free` is only called for points inside `range`.
    pub fn new(range: Range, is_free: impl Fn(Point) -> bool) -> Self {
        Self::with_directions(range, Directions::DEFAULT, is_free)
    }

    /// Build the index with an explicit neighbour order.
    pub fn with_directions(
        range: Range,
        directions: Directions,
        is_free: impl Fn(Point) -> bool,
    ) -> Self {
        let free: Vec<bool> = range.iter().map(&is_free).collect();
        let mut starts = Vec::with_capacity(free.len() + 1);
        let mut edges = Vec::new();
        let mut nb = Neighbors::new(directions);

        for (i, p) in range.iter().enumerate() {
            starts.push(edges.len());
            if !free[i] {
                continue;
            }
            let keep = |q: Point| range.index_of(q).is_some_and(|j| free[j]);
            edges.extend_from_slice(nb.around(p, keep));
        }
        starts.push(edges.len());

        let index = Self {
            range,
            directions,
            free,
            starts,
            edges,
        };
        log::debug!(
            "adjacency index over {range}: {} free cells, {} edges",
            index.free_count(),
            index.edge_count()
        );
        index
    }

    /// The grid rectangle covered by the index.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// The neighbour order used when the index was built.
    #[inline]
    pub fn directions(&self) -> Directions {
        self.directions
    }

    /// Whether `p` is a key of the index (in range and free).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range.index_of(p).is_some_and(|i| self.free[i])
    }

    /// Neighbours of `p` in priority order, or `None` if `p` is not a key.
    pub fn neighbors_of(&self, p: Point) -> Option<&[Point]> {
        let i = self.range.index_of(p)?;
        if !self.free[i] {
            return None;
        }
        Some(&self.edges[self.starts[i]..self.starts[i + 1]])
    }

    /// Number of free cells (keys).
    pub fn free_count(&self) -> usize {
        self.free.iter().filter(|&&f| f).count()
    }

    /// Number of directed edges (each adjacency counted from both ends).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.range
            .iter()
            .zip(self.free.iter())
            .filter_map(|(p, &f)| f.then_some(p))
    }
}

impl Pather for AdjacencyIndex {
    fn range(&self) -> Range {
        self.range
    }

    fn passable(&self, p: Point) -> bool {
        self.contains(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if let Some(ns) = self.neighbors_of(p) {
            buf.extend_from_slice(ns);
        }
    }
}
