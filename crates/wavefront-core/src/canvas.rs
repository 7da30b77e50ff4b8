//! The [`Canvas`] a model draws into, and [`Frame`] diffs sent to drivers.

use crate::geom::{Point, Range};
use crate::glyph::Glyph;

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A fixed-size 2D buffer of [`Glyph`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Vec<Glyph>,
    bounds: Range,
}

impl Canvas {
    /// Create a new canvas of the given dimensions, filled with blank glyphs.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::sized(width, height);
        Self {
            glyphs: vec![Glyph::default(); bounds.len()],
            bounds,
        }
    }

    /// The bounding range of the canvas.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Read the glyph at `p`. Returns `Glyph::default()` if `p` is outside
    /// bounds.
    pub fn at(&self, p: Point) -> Glyph {
        self.bounds
            .index_of(p)
            .map(|i| self.glyphs[i])
            .unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op if `p` is outside bounds.
    pub fn set(&mut self, p: Point, glyph: Glyph) {
        if let Some(i) = self.bounds.index_of(p) {
            self.glyphs[i] = glyph;
        }
    }

    /// Fill every slot with `glyph`.
    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Write `text` left to right starting at `p`, clipped to the canvas.
    /// Returns the number of glyphs written.
    pub fn print(&mut self, p: Point, text: &str, template: Glyph) -> usize {
        let mut written = 0;
        for (i, ch) in text.chars().enumerate() {
            let q = p.shift(i as i32, 0);
            if !self.bounds.contains(q) {
                break;
            }
            self.set(q, template.with_char(ch));
            written += 1;
        }
        written
    }

    /// Copy all glyphs from `src`. Both canvases must have the same size;
    /// otherwise only the overlapping region is copied.
    pub fn copy_from(&mut self, src: &Canvas) {
        if self.bounds == src.bounds {
            self.glyphs.copy_from_slice(&src.glyphs);
            return;
        }
        for p in self.bounds.iter() {
            if src.bounds.contains(p) {
                self.set(p, src.at(p));
            }
        }
    }

    /// Row-major iterator over `(Point, Glyph)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Glyph)> + '_ {
        self.bounds.iter().zip(self.glyphs.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub glyph: Glyph,
    pub pos: Point,
}

/// A set of glyph changes (a diff frame).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

/// Compute the difference between two same-sized canvases.
///
/// Returns a [`Frame`] containing only the glyphs that differ.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let cells = curr
        .iter()
        .filter(|&(p, g)| prev.at(p) != g)
        .map(|(pos, glyph)| FrameCell { glyph, pos })
        .collect();
    Frame {
        cells,
        width: curr.width(),
        height: curr.height(),
    }
}

/// A frame that repaints every glyph of `curr`, used for the first flush.
pub fn full_frame(curr: &Canvas) -> Frame {
    Frame {
        cells: curr
            .iter()
            .map(|(pos, glyph)| FrameCell { glyph, pos })
            .collect(),
        width: curr.width(),
        height: curr.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Color;

    #[test]
    fn canvas_new_and_at() {
        let c = Canvas::new(4, 3);
        assert_eq!(c.bounds().size(), Point::new(4, 3));
        assert_eq!(c.at(Point::new(0, 0)), Glyph::default());
    }

    #[test]
    fn canvas_set_and_get() {
        let mut c = Canvas::new(4, 3);
        c.set(Point::new(2, 1), Glyph::default().with_char('X'));
        assert_eq!(c.at(Point::new(2, 1)).ch, 'X');
        // out of bounds is ignored on write and default on read
        c.set(Point::new(10, 10), Glyph::default().with_char('Y'));
        assert_eq!(c.at(Point::new(10, 10)), Glyph::default());
    }

    #[test]
    fn print_clips_at_edge() {
        let mut c = Canvas::new(5, 1);
        let n = c.print(Point::new(2, 0), "hello", Glyph::default());
        assert_eq!(n, 3);
        assert_eq!(c.at(Point::new(4, 0)).ch, 'l');
    }

    #[test]
    fn compute_frame_diff() {
        let a = Canvas::new(3, 2);
        let mut b = Canvas::new(3, 2);
        b.set(Point::new(1, 0), Glyph::default().with_char('A'));
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Point::new(1, 0));
        assert_eq!(frame.cells[0].glyph.ch, 'A');
    }

    #[test]
    fn copy_then_diff_is_empty() {
        let mut a = Canvas::new(3, 2);
        let mut b = Canvas::new(3, 2);
        b.fill(Glyph::fill(Color::from_rgb(0, 80, 0)));
        a.copy_from(&b);
        assert!(compute_frame(&a, &b).cells.is_empty());
        assert_eq!(full_frame(&b).cells.len(), 6);
    }
}
