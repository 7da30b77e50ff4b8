//! Breadth-first traversal state, advanced one frontier pop at a time.

use std::collections::VecDeque;

use wavefront_core::Point;

use crate::error::InvalidCell;
use crate::path;
use crate::traits::Pather;
use crate::visited::Visited;

/// Outcome of a single [`BfsState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `head` was popped from the frontier; `discovered` new cells were
    /// enqueued behind it.
    Expanded { head: Point, discovered: usize },
    /// The frontier was already empty. Nothing changed.
    Exhausted,
}

/// The complete state of one breadth-first traversal.
///
/// The value holds everything a traversal needs between steps (frontier,
/// visited map, current head), so it can be paused simply by not calling
/// [`step`](Self::step), and discarded or [`reset`](Self::reset) at any
/// point. It does not borrow the graph: every operation takes the
/// [`Pather`] explicitly, and callers must keep passing the same one.
#[derive(Debug, Clone)]
pub struct BfsState {
    start: Point,
    head: Point,
    frontier: VecDeque<Point>,
    visited: Visited,
    expansions: usize,
    nbuf: Vec<Point>,
}

impl BfsState {
    /// Start a traversal from `start`: frontier `[start]`, visited
    /// `{start: none}`, head `start`.
    pub fn new<P: Pather>(pather: &P, start: Point) -> Result<Self, InvalidCell> {
        InvalidCell::check(pather, start)?;
        let mut state = Self {
            start,
            head: start,
            frontier: VecDeque::new(),
            visited: Visited::new(pather.range()),
            expansions: 0,
            nbuf: Vec::with_capacity(4),
        };
        state.restart(start);
        Ok(state)
    }

    /// Restart from `start`, reusing the allocated buffers. On error the
    /// current traversal is left untouched.
    pub fn reset<P: Pather>(&mut self, pather: &P, start: Point) -> Result<(), InvalidCell> {
        InvalidCell::check(pather, start)?;
        if self.visited.range() != pather.range() {
            self.visited = Visited::new(pather.range());
        }
        self.restart(start);
        Ok(())
    }

    fn restart(&mut self, start: Point) {
        self.visited.clear();
        self.frontier.clear();
        self.start = start;
        self.head = start;
        self.expansions = 0;
        self.frontier.push_back(start);
        self.visited.insert_root(start);
        log::trace!("bfs reset at {start}");
    }

    /// Pop the front of the frontier into the head and enqueue its unseen
    /// neighbours in the pather's order. A no-op once the frontier is empty.
    pub fn step<P: Pather>(&mut self, pather: &P) -> Step {
        let Some(head) = self.pop() else {
            return Step::Exhausted;
        };
        let discovered = self.expand(pather, head);
        Step::Expanded { head, discovered }
    }

    /// Step until the frontier is empty. Returns the number of expansions
    /// performed by this call.
    pub fn run_to_end<P: Pather>(&mut self, pather: &P) -> usize {
        let before = self.expansions;
        while let Step::Expanded { .. } = self.step(pather) {}
        log::debug!(
            "bfs from {} exhausted: {} cells visited",
            self.start,
            self.visited.len()
        );
        self.expansions - before
    }

    /// Pop and expand until `goal` is popped (it is not expanded) or the
    /// frontier runs dry. Returns whether `goal` was reached.
    pub fn run_until<P: Pather>(&mut self, pather: &P, goal: Point) -> bool {
        while let Some(head) = self.pop() {
            if head == goal {
                return true;
            }
            self.expand(pather, head);
        }
        false
    }

    fn pop(&mut self) -> Option<Point> {
        let head = self.frontier.pop_front()?;
        self.head = head;
        Some(head)
    }

    fn expand<P: Pather>(&mut self, pather: &P, head: Point) -> usize {
        self.nbuf.clear();
        pather.neighbors(head, &mut self.nbuf);
        let mut discovered = 0;
        for &n in &self.nbuf {
            if self.visited.insert(n, head) {
                self.frontier.push_back(n);
                discovered += 1;
            }
        }
        self.expansions += 1;
        log::trace!("bfs expanded {head}: {discovered} new");
        discovered
    }

    /// The cell the traversal started from.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The last popped cell (the start before the first step).
    #[inline]
    pub fn head(&self) -> Point {
        self.head
    }

    /// Whether the frontier is empty.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Cells awaiting expansion, front first.
    #[inline]
    pub fn frontier(&self) -> &VecDeque<Point> {
        &self.frontier
    }

    /// Discovered cells and their parents.
    #[inline]
    pub fn visited(&self) -> &Visited {
        &self.visited
    }

    /// Number of frontier pops that expanded a cell since the last reset.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Path from `target` back to the start; empty if not yet discovered.
    pub fn path_to(&self, target: Point) -> Vec<Point> {
        path::path_to(&self.visited, target)
    }
}
