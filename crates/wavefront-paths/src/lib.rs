//! Breadth-first search on 4-connected obstacle grids.
//!
//! The pieces, leaves first:
//!
//! - [`AdjacencyIndex`]: free-neighbour lists for every free cell, in a
//!   fixed [`Directions`] order so traversals are reproducible.
//! - [`BfsState`]: an explicit traversal value advanced one frontier pop
//!   per [`BfsState::step`], for animation.
//! - [`solve`]: run-to-completion search that stops as soon as the goal is
//!   popped, recomputed from scratch on every call.
//! - [`path_to`]: parent-pointer walk from a target back to the start.
//!
//! Start and goal cells are validated up front; walls and out-of-range
//! cells are reported as [`InvalidCell`] and no traversal happens.

mod adjacency;
mod bfs;
mod error;
mod neighbors;
mod path;
mod solve;
mod traits;
mod visited;

pub use adjacency::AdjacencyIndex;
pub use bfs::{BfsState, Step};
pub use error::{InvalidCell, InvalidReason};
pub use neighbors::{Directions, InvalidDirections, Neighbors};
pub use path::{depth, path_to};
pub use solve::{Search, solve};
pub use traits::Pather;
pub use visited::Visited;
