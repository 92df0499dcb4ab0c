use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::{display_width, wrap_spans, wrap_words};
use crate::types::{Direction, Size, TextWrap};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out `element` inside `available`.
///
/// The root takes the full available width. Its height is fixed, fills the
/// available height, or (for `Size::Auto`) is measured from content.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();

    let margin = &element.margin;
    let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);

    let width = match element.width {
        Size::Fixed(w) => w.min(after_margin.width),
        Size::Fill | Size::Auto => after_margin.width,
    };
    let height = match element.height {
        Size::Fixed(h) => h,
        Size::Fill => after_margin.height,
        Size::Auto => measure_height(element, width),
    };

    let rect = Rect::new(after_margin.x, after_margin.y, width, height);
    layout_element(element, rect, &mut result);
    result
}

/// Height `element` needs when given `width` columns.
pub fn measure_height(element: &Element, width: u16) -> u16 {
    if let Size::Fixed(h) = element.height {
        return h;
    }

    let border = element.border_size();
    let chrome_w = element.padding.horizontal_total() + border * 2;
    let chrome_h = element.padding.vertical_total() + border * 2;
    let inner_w = width.saturating_sub(chrome_w);

    let content_h = match &element.content {
        Content::None => 0,
        Content::Text(text) => match element.text_wrap {
            TextWrap::Wrap => wrap_words(text, inner_w as usize).len() as u16,
            TextWrap::NoWrap | TextWrap::Truncate => text.split('\n').count() as u16,
        },
        Content::Spans(spans) => wrap_spans(spans, inner_w as usize).len() as u16,
        Content::Children(children) => match element.direction {
            Direction::Column => {
                let gaps = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|child| {
                        let child_w = column_child_width(child, inner_w);
                        measure_height(child, child_w) + child.margin.vertical_total()
                    })
                    .fold(gaps, u16::saturating_add)
            }
            Direction::Row => {
                let widths = row_child_widths(children, inner_w, element.gap);
                children
                    .iter()
                    .zip(widths)
                    .map(|(child, w)| measure_height(child, w) + child.margin.vertical_total())
                    .max()
                    .unwrap_or(0)
            }
        },
    };

    content_h.saturating_add(chrome_h)
}

/// Width `element` would take if unconstrained.
pub fn intrinsic_width(element: &Element) -> u16 {
    if let Size::Fixed(w) = element.width {
        return w;
    }

    let chrome = element.padding.horizontal_total() + element.border_size() * 2;

    let content_w = match &element.content {
        Content::None => 0,
        Content::Text(text) => text.split('\n').map(display_width).max().unwrap_or(0) as u16,
        Content::Spans(spans) => {
            let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
            joined.split('\n').map(display_width).max().unwrap_or(0) as u16
        }
        Content::Children(children) => match element.direction {
            Direction::Column => children
                .iter()
                .map(|c| intrinsic_width(c) + c.margin.horizontal_total())
                .max()
                .unwrap_or(0),
            Direction::Row => {
                let gaps = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| intrinsic_width(c) + c.margin.horizontal_total())
                    .fold(gaps, u16::saturating_add)
            }
        },
    };

    content_w.saturating_add(chrome)
}

fn layout_element(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };
    if children.is_empty() {
        return;
    }

    let inner = rect.inner(element.padding, element.border_size());

    match element.direction {
        Direction::Column => layout_column(element, children, inner, result),
        Direction::Row => layout_row(element, children, inner, result),
    }
}

fn layout_column(element: &Element, children: &[Element], inner: Rect, result: &mut LayoutResult) {
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    // First pass: widths and non-fill heights
    let mut sizes: Vec<(u16, Option<u16>)> = Vec::with_capacity(children.len());
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    for child in children {
        let child_w = column_child_width(child, inner.width);
        let child_h = match child.height {
            Size::Fill => {
                fill_count += 1;
                None
            }
            _ => Some(measure_height(child, child_w)),
        };
        fixed_total = fixed_total
            .saturating_add(child_h.unwrap_or(0))
            .saturating_add(child.margin.vertical_total());
        sizes.push((child_w, child_h));
    }

    let remaining = inner.height.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_h = if fill_count > 0 { remaining / fill_count } else { 0 };

    let mut y = inner.y;
    for (child, (child_w, child_h)) in children.iter().zip(sizes) {
        y = y.saturating_add(child.margin.top);
        let h = child_h.unwrap_or(fill_h);
        let rect = Rect::new(inner.x.saturating_add(child.margin.left), y, child_w, h);
        layout_element(child, rect, result);
        y = y
            .saturating_add(h)
            .saturating_add(child.margin.bottom)
            .saturating_add(element.gap);
    }
}

fn layout_row(element: &Element, children: &[Element], inner: Rect, result: &mut LayoutResult) {
    let widths = row_child_widths(children, inner.width, element.gap);

    let mut x = inner.x;
    for (child, w) in children.iter().zip(widths) {
        x = x.saturating_add(child.margin.left);
        let h = match child.height {
            Size::Fixed(h) => h,
            Size::Fill => inner.height.saturating_sub(child.margin.vertical_total()),
            Size::Auto => measure_height(child, w),
        };
        let rect = Rect::new(x, inner.y.saturating_add(child.margin.top), w, h);
        layout_element(child, rect, result);
        x = x
            .saturating_add(w)
            .saturating_add(child.margin.right)
            .saturating_add(element.gap);
    }
}

/// Cross-axis width of a child stacked in a column.
fn column_child_width(child: &Element, available: u16) -> u16 {
    let available = available.saturating_sub(child.margin.horizontal_total());
    match child.width {
        Size::Fixed(w) => w.min(available),
        Size::Fill => available,
        Size::Auto => intrinsic_width(child).min(available),
    }
}

/// Main-axis widths of children laid out in a row.
fn row_child_widths(children: &[Element], available: u16, gap: u16) -> Vec<u16> {
    let gap_total = gap * children.len().saturating_sub(1) as u16;
    let mut remaining = available.saturating_sub(gap_total);
    let mut widths: Vec<Option<u16>> = Vec::with_capacity(children.len());
    let mut fill_count = 0u16;

    for child in children {
        let margin = child.margin.horizontal_total();
        let w = match child.width {
            Size::Fixed(w) => Some(w.min(remaining.saturating_sub(margin))),
            Size::Auto => Some(intrinsic_width(child).min(remaining.saturating_sub(margin))),
            Size::Fill => {
                fill_count += 1;
                None
            }
        };
        remaining = remaining.saturating_sub(w.unwrap_or(0).saturating_add(margin));
        widths.push(w);
    }

    let fill_w = if fill_count > 0 { remaining / fill_count } else { 0 };
    widths.into_iter().map(|w| w.unwrap_or(fill_w)).collect()
}
