use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    cursor,
    event,
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::animation::AnimationState;
use crate::buffer::{Buffer, DEFAULT_BG, DEFAULT_FG};
use crate::element::Element;
use crate::layout::LayoutResult;
use crate::render::{clamp_scroll, render_page};
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// A raw-mode, alternate-screen terminal that renders element trees.
///
/// Input is left to the caller (e.g. crossterm's event stream); this type
/// only owns the screen.
///
/// The tree is rendered onto a page as tall as its content; the screen
/// shows the rows starting at the scroll offset passed to [`Terminal::render`],
/// clamped to the page.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    last_layout: LayoutResult,
    animation: AnimationState,
    content_height: u16,
    scroll_y: u16,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::info!("terminal opened ({width}x{height})");

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
            animation: AnimationState::new(),
            content_height: 0,
            scroll_y: 0,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Largest useful scroll offset for the last rendered page.
    pub fn max_scroll(&self) -> u16 {
        self.content_height
            .saturating_sub(self.current_buffer.height())
    }

    /// Scroll offset actually used by the last render.
    pub fn scroll(&self) -> u16 {
        self.scroll_y
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.animation.set_reduced_motion(enabled);
    }

    /// Returns true while a fade is still running.
    pub fn has_active_transitions(&self) -> bool {
        self.animation.has_active_transitions(Instant::now())
    }

    pub fn render(&mut self, root: &Element, scroll_y: u16) -> io::Result<&LayoutResult> {
        let now = Instant::now();
        self.animation.update(root, now);

        // Check if terminal size changed
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("terminal resized to {width}x{height}");
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            // Force a full redraw
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        let (page, layout) = render_page(root, width, &self.animation, now);
        self.content_height = page.height();
        self.last_layout = layout;
        self.scroll_y = clamp_scroll(&page, height, scroll_y);

        self.current_buffer.clear();
        self.current_buffer.blit_rows(&page, self.scroll_y);

        // Diff and write changes
        self.flush_diff()?;

        // Swap buffers
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = DEFAULT_FG;
        let mut last_bg = DEFAULT_BG;
        let mut last_style = TextStyle::new();

        // Reset to known state at start
        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_ct(last_fg)),
            SetBackgroundColor(to_ct(last_bg))
        )?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // Skip wide character continuation cells - the wide char already occupies this space
            if cell.wide_continuation {
                continue;
            }

            // Move cursor if not sequential (accounting for wide chars)
            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                queue!(self.stdout, SetForegroundColor(to_ct(cell.fg)))?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                queue!(self.stdout, SetBackgroundColor(to_ct(cell.bg)))?;
                last_bg = cell.bg;
            }

            if cell.style != last_style {
                // Attributes are not independently reversible; reset and reapply
                queue!(
                    self.stdout,
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(to_ct(cell.fg)),
                    SetBackgroundColor(to_ct(cell.bg))
                )?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.italic {
                    queue!(self.stdout, SetAttribute(Attribute::Italic))?;
                }
                if cell.style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.symbol)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.symbol).max(1) as u16;
        }

        // Reset at end
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn to_ct(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::info!("terminal restored");
    }
}
