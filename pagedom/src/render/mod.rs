use std::time::Instant;

use crate::animation::AnimationState;
use crate::buffer::{Buffer, Cell, DEFAULT_FG};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width, wrap_spans, wrap_words};
use crate::types::{Border, Rgb, Style, TextWrap};

/// Render `element` and its descendants into `buf`.
///
/// `now` is the frame time used to evaluate fades; elements without a fade
/// or without an entry in `animation` are drawn fully opaque.
pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    animation: &AnimationState,
    now: Instant,
) {
    let t0 = Instant::now();
    let mut count = 0usize;
    render_element(element, layout, buf, animation, now, &mut count);
    log::trace!(
        "render: {} elements in {:>6.2}µs",
        count,
        t0.elapsed().as_secs_f64() * 1_000_000.0
    );
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    animation: &AnimationState,
    now: Instant,
    count: &mut usize,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    *count += 1;

    let opacity = element
        .fade
        .map(|fade| animation.opacity(&element.id, now).unwrap_or(fade.to))
        .unwrap_or(1.0);
    let underlay = (opacity < 1.0).then(|| buf.snapshot(rect));

    let style = element.effective_style();

    if let Some(bg) = &style.background {
        fill_rect(buf, rect, bg.to_rgb());
    }

    render_border(&style, rect, buf);

    let inner = rect.inner(element.padding, element.border_size());
    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element.text_wrap, &style, inner, buf),
        Content::Spans(spans) => {
            let lines = wrap_spans(spans, inner.width as usize);
            for (row, line) in lines.iter().enumerate() {
                let y = inner.y.saturating_add(row as u16);
                if y >= inner.bottom() {
                    break;
                }
                let mut x = inner.x;
                for (ch, span_style) in line {
                    let merged = style.merge(span_style);
                    x = put_char(buf, x, y, *ch, &merged, inner);
                }
            }
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, animation, now, count);
            }
        }
    }

    if let Some(underlay) = underlay {
        apply_opacity(buf, &underlay, opacity);
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                *cell = Cell { fg: cell.fg, ..Cell::blank(bg) };
            }
        }
    }
}

fn render_text(text: &str, wrap: TextWrap, style: &Style, inner: Rect, buf: &mut Buffer) {
    let width = inner.width as usize;
    let lines: Vec<String> = match wrap {
        TextWrap::Wrap => wrap_words(text, width),
        TextWrap::Truncate => text
            .split('\n')
            .map(|line| truncate_to_width(line, width))
            .collect(),
        TextWrap::NoWrap => text.split('\n').map(str::to_string).collect(),
    };

    for (row, line) in lines.iter().enumerate() {
        let y = inner.y.saturating_add(row as u16);
        if y >= inner.bottom() {
            break;
        }
        let mut x = inner.x;
        for ch in line.chars() {
            x = put_char(buf, x, y, ch, style, inner);
        }
    }
}

/// Draw one character, returning the next x position.
fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: &Style, clip: Rect) -> u16 {
    let width = char_width(ch) as u16;
    if width == 0 {
        return x;
    }
    if x.saturating_add(width) > clip.right() {
        return clip.right();
    }

    // Preserve existing background if no explicit background set
    let bg = style
        .background
        .map(|c| c.to_rgb())
        .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or_default());
    let fg = style.foreground.map(|c| c.to_rgb()).unwrap_or(DEFAULT_FG);

    buf.set(
        x,
        y,
        Cell::glyph(ch, fg, bg, style.text_style),
    );
    for dx in 1..width {
        if let Some(cell) = buf.get_mut(x + dx, y) {
            cell.wide_continuation = true;
            cell.bg = bg;
        }
    }
    x + width
}

fn render_border(style: &Style, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = style.foreground.map(|c| c.to_rgb()).unwrap_or(DEFAULT_FG);

    // Corners
    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    // Horizontal lines
    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    // Vertical lines
    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.symbol = ch;
        cell.fg = fg;
        // Preserve existing background
    }
}

/// Blend a faded subtree over what was under it.
///
/// At opacity 0 the underlay is restored exactly; otherwise both colors of
/// each cell are mixed from the underlay background towards the drawn cell.
fn apply_opacity(buf: &mut Buffer, underlay: &[(u16, u16, Cell)], opacity: f32) {
    for (x, y, below) in underlay {
        let Some(cell) = buf.get_mut(*x, *y) else {
            continue;
        };
        if opacity <= 0.0 {
            *cell = *below;
            continue;
        }
        cell.fg = below.bg.mix(cell.fg, opacity);
        cell.bg = below.bg.mix(cell.bg, opacity);
    }
}

/// Lay out and render `root` onto an off-screen page `width` columns wide
/// and as tall as its content.
pub fn render_page(
    root: &Element,
    width: u16,
    animation: &AnimationState,
    now: Instant,
) -> (Buffer, LayoutResult) {
    let height = crate::layout::measure_height(root, width).max(1);
    let layout = crate::layout::layout(root, Rect::from_size(width, height));
    let mut page = Buffer::new(width, height);
    render_to_buffer(root, &layout, &mut page, animation, now);
    (page, layout)
}

/// `scroll`, limited so a `viewport` rows tall screen never starts past the
/// last screenful of `page`.
pub fn clamp_scroll(page: &Buffer, viewport: u16, scroll: u16) -> u16 {
    scroll.min(page.height().saturating_sub(viewport))
}
