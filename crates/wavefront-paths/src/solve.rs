use std::collections::VecDeque;

use wavefront_core::Point;

use crate::bfs::BfsState;
use crate::error::InvalidCell;
use crate::traits::Pather;
use crate::visited::Visited;

/// Result of a goal-directed search (see [`solve`]).
#[derive(Debug, Clone)]
pub struct Search {
    state: BfsState,
    goal: Point,
    reached: bool,
}

/// Run a breadth-first search from `start` until `goal` is popped from the
/// frontier or every reachable cell has been expanded.
///
/// Nothing is carried over between calls: each call rebuilds the frontier
/// and visited map from scratch, at O(reachable cells) cost. Use
/// [`Search::resolve`] to reuse the allocations of a previous result.
pub fn solve<P: Pather>(pather: &P, start: Point, goal: Point) -> Result<Search, InvalidCell> {
    InvalidCell::check(pather, goal)?;
    let mut state = BfsState::new(pather, start)?;
    let reached = state.run_until(pather, goal);
    Ok(Search {
        state,
        goal,
        reached,
    })
}

impl Search {
    /// Re-run the search for a new start/goal pair in place. On error the
    /// previous result is left untouched.
    pub fn resolve<P: Pather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<(), InvalidCell> {
        InvalidCell::check(pather, goal)?;
        self.state.reset(pather, start)?;
        self.goal = goal;
        self.reached = self.state.run_until(pather, goal);
        Ok(())
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.state.start()
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether the goal was popped from the frontier.
    #[inline]
    pub fn reached(&self) -> bool {
        self.reached
    }

    /// Cells discovered before the search stopped.
    #[inline]
    pub fn visited(&self) -> &Visited {
        self.state.visited()
    }

    /// Cells still queued when the search stopped.
    #[inline]
    pub fn frontier(&self) -> &VecDeque<Point> {
        self.state.frontier()
    }

    /// Path from the goal back to the start, goal first; empty when the
    /// goal is unreachable.
    pub fn path(&self) -> Vec<Point> {
        self.state.path_to(self.goal)
    }

    /// Path from any discovered cell back to the start.
    pub fn path_to(&self, target: Point) -> Vec<Point> {
        self.state.path_to(target)
    }
}
