use std::fmt;

use wavefront_core::Point;

use crate::traits::Pather;

/// Why a cell was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// Outside the grid.
    OutOfBounds,
    /// Inside the grid but blocked.
    Wall,
}

/// A start or goal cell that is not a node of the search graph.
///
/// Commands that receive it leave their previous state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidCell {
    pub pos: Point,
    pub reason: InvalidReason,
}

impl InvalidCell {
    /// Check `p` against `pather`.
    pub fn check<P: Pather + ?Sized>(pather: &P, p: Point) -> Result<(), InvalidCell> {
        if pather.passable(p) {
            return Ok(());
        }
        let reason = if pather.range().contains(p) {
            InvalidReason::Wall
        } else {
            InvalidReason::OutOfBounds
        };
        Err(InvalidCell { pos: p, reason })
    }
}

impl fmt::Display for InvalidCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            InvalidReason::OutOfBounds => write!(f, "cell {} is out of bounds", self.pos),
            InvalidReason::Wall => write!(f, "cell {} is a wall", self.pos),
        }
    }
}

impl std::error::Error for InvalidCell {}
