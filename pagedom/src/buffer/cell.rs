use crate::types::{Rgb, TextStyle};

/// Foreground of a cell nothing has been drawn on.
pub const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
/// Background of a cell nothing has been drawn on.
pub const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

/// One terminal cell.
///
/// A wide character occupies its own cell plus one continuation cell to
/// the right, which carries only the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(DEFAULT_BG)
    }
}

impl Cell {
    /// An empty cell showing `bg`.
    pub fn blank(bg: Rgb) -> Self {
        Self {
            symbol: ' ',
            fg: DEFAULT_FG,
            bg,
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }

    /// A cell showing `symbol`.
    pub fn glyph(symbol: char, fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            symbol,
            fg,
            bg,
            style,
            wide_continuation: false,
        }
    }
}
