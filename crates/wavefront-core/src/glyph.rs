//! Visual styling: [`Color`] and the [`Glyph`] drawn in each canvas slot.

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// The default / unset colour (0). Backends map it to the terminal's
    /// own default.
    pub const DEFAULT: Self = Self(0);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// Glyph
// ---------------------------------------------------------------------------

/// A coloured character occupying one canvas slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Glyph {
    /// A blank glyph with the given background.
    #[inline]
    pub const fn fill(bg: Color) -> Self {
        Self {
            ch: ' ',
            fg: Color::DEFAULT,
            bg,
        }
    }

    /// Set the character (builder).
    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    /// Set the foreground (builder).
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background (builder).
    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self::fill(Color::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_components() {
        let c = Color::from_rgb(255, 115, 0);
        assert_eq!((c.r(), c.g(), c.b()), (255, 115, 0));
        assert_eq!(c.0, 0x00FF7300);
    }

    #[test]
    fn glyph_builders() {
        let g = Glyph::fill(Color::from_rgb(1, 2, 3))
            .with_char('#')
            .with_fg(Color::from_rgb(9, 9, 9));
        assert_eq!(g.ch, '#');
        assert_eq!(g.bg, Color::from_rgb(1, 2, 3));
        assert_eq!(g.fg, Color::from_rgb(9, 9, 9));
        assert_eq!(Glyph::default().ch, ' ');
    }
}
