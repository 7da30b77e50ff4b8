//! Grid world for the wavefront visualizers.
//!
//! [`Grid`] holds the walls, [`MapGen`] scatters them at random, and
//! [`Explorer`] owns one grid plus a breadth-first traversal over it,
//! exposing the commands and queries a front end needs.

pub mod config;
pub mod explorer;
pub mod grid;
pub mod mapgen;

pub use config::ExplorerConfig;
pub use explorer::{Explorer, Mode};
pub use grid::{Grid, GridParseError};
pub use mapgen::{MapGen, generate};
