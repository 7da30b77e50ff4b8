//! Shared types for the wavefront grid-search demos.
//!
//! Geometry primitives, the glyph canvas and its frame diffs, input
//! messages, and the single-threaded application loop that connects a
//! [`Model`] to a back-end [`Driver`].

pub mod app;
pub mod canvas;
pub mod geom;
pub mod glyph;
pub mod messages;

pub use app::{App, AppConfig, Driver, Effect, Model};
pub use canvas::{Canvas, Frame, FrameCell};
pub use geom::{Point, Range};
pub use glyph::{Color, Glyph};
pub use messages::*;
