//! The visited map of a traversal: discovered cells and their parents.

use wavefront_core::{Point, Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Unseen,
    Root,
    Child(Point),
}

/// Discovered cells of a breadth-first traversal, each with the cell it
/// was discovered from.
///
/// The root maps to no parent. Parent links always point to a cell
/// discovered earlier, so they form a tree rooted at the start cell.
/// Storage is a flat array over the grid range plus the discovery order;
/// [`clear`](Self::clear) only touches the discovered slots, so reusing a
/// `Visited` across traversals costs O(discovered) rather than O(grid).
#[derive(Debug, Clone)]
pub struct Visited {
    range: Range,
    slots: Vec<Slot>,
    order: Vec<Point>,
}

impl Visited {
    /// An empty map over `range`.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            slots: vec![Slot::Unseen; range.len()],
            order: Vec::new(),
        }
    }

    /// Forget every discovered cell.
    pub fn clear(&mut self) {
        for &p in &self.order {
            if let Some(i) = self.range.index_of(p) {
                self.slots[i] = Slot::Unseen;
            }
        }
        self.order.clear();
    }

    /// Record `p` as the root. Returns `false` if `p` is out of range or
    /// already present.
    pub(crate) fn insert_root(&mut self, p: Point) -> bool {
        self.insert_slot(p, Slot::Root)
    }

    /// Record `p` as discovered from `parent`. Returns `false` if `p` is out
    /// of range or already present.
    pub(crate) fn insert(&mut self, p: Point, parent: Point) -> bool {
        self.insert_slot(p, Slot::Child(parent))
    }

    fn insert_slot(&mut self, p: Point, slot: Slot) -> bool {
        let Some(i) = self.range.index_of(p) else {
            return false;
        };
        if self.slots[i] != Slot::Unseen {
            return false;
        }
        self.slots[i] = slot;
        self.order.push(p);
        true
    }

    /// Whether `p` has been discovered.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range
            .index_of(p)
            .is_some_and(|i| self.slots[i] != Slot::Unseen)
    }

    /// The parent of `p`: `None` if `p` was never discovered, `Some(None)`
    /// for the root, `Some(Some(q))` otherwise.
    pub fn parent(&self, p: Point) -> Option<Option<Point>> {
        match self.slots[self.range.index_of(p)?] {
            Slot::Unseen => None,
            Slot::Root => Some(None),
            Slot::Child(q) => Some(Some(q)),
        }
    }

    /// Number of discovered cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been discovered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Discovered cells in discovery order.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.order
    }

    /// `(cell, parent)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Option<Point>)> + '_ {
        self.order
            .iter()
            .map(|&p| (p, self.parent(p).flatten()))
    }

    /// The range the map was created for.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }
}

impl PartialEq for Visited {
    /// Two maps are equal when they discovered the same cells, in the same
    /// order, with the same parents.
    fn eq(&self, other: &Self) -> bool {
        self.range == other.range && self.order == other.order && self.iter().eq(other.iter())
    }
}

impl Eq for Visited {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_then_children() {
        let mut v = Visited::new(Range::sized(3, 3));
        assert!(v.is_empty());
        assert!(v.insert_root(Point::new(1, 1)));
        assert!(v.insert(Point::new(0, 1), Point::new(1, 1)));
        assert!(!v.insert(Point::new(0, 1), Point::new(0, 0)));
        assert_eq!(v.parent(Point::new(1, 1)), Some(None));
        assert_eq!(v.parent(Point::new(0, 1)), Some(Some(Point::new(1, 1))));
        assert_eq!(v.parent(Point::new(2, 2)), None);
        assert_eq!(v.cells().first(), Some(&Point::new(1, 1)));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn out_of_range_is_never_visited() {
        let mut v = Visited::new(Range::sized(2, 2));
        assert!(!v.insert_root(Point::new(5, 5)));
        assert!(!v.contains(Point::new(5, 5)));
        assert_eq!(v.parent(Point::new(-1, 0)), None);
    }

    #[test]
    fn clear_resets_only_discovered() {
        let mut v = Visited::new(Range::sized(4, 1));
        v.insert_root(Point::new(0, 0));
        v.insert(Point::new(1, 0), Point::new(0, 0));
        v.clear();
        assert!(v.is_empty());
        assert!(!v.contains(Point::new(1, 0)));
        assert!(v.insert_root(Point::new(1, 0)));
        assert_eq!(v.parent(Point::new(1, 0)), Some(None));
    }

    #[test]
    fn iter_follows_discovery_order() {
        let mut v = Visited::new(Range::sized(3, 1));
        v.insert_root(Point::new(1, 0));
        v.insert(Point::new(0, 0), Point::new(1, 0));
        v.insert(Point::new(2, 0), Point::new(1, 0));
        let pairs: Vec<_> = v.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Point::new(1, 0), None),
                (Point::new(0, 0), Some(Point::new(1, 0))),
                (Point::new(2, 0), Some(Point::new(1, 0))),
            ]
        );
    }
}
