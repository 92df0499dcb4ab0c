use pagedom::layout::{intrinsic_width, layout, measure_height};
use pagedom::{Border, Edges, Element, Rect, Size, Style};

// ============================================================================
// Column stacking
// ============================================================================

#[test]
fn test_column_stacks_children_with_gap() {
    let root = Element::col()
        .id("root")
        .gap(1)
        .child(Element::text("a").id("a"))
        .child(Element::text("b").id("b"));

    let result = layout(&root, Rect::new(0, 0, 20, 10));

    assert_eq!(result["root"], Rect::new(0, 0, 20, 3));
    assert_eq!(result["a"], Rect::new(0, 0, 1, 1));
    assert_eq!(result["b"], Rect::new(0, 2, 1, 1));
}

#[test]
fn test_column_fill_child_takes_full_width() {
    let root = Element::col()
        .id("root")
        .child(Element::text("short").id("t").width(Size::Fill));

    let result = layout(&root, Rect::new(0, 0, 30, 5));
    assert_eq!(result["t"].width, 30);
}

#[test]
fn test_wrapped_text_measures_multiple_lines() {
    let root = Element::col()
        .id("root")
        .child(Element::text("hello world again").id("t").width(Size::Fill));

    let result = layout(&root, Rect::new(0, 0, 11, 10));
    // "hello world" / "again"
    assert_eq!(result["t"].height, 2);
    assert_eq!(result["root"].height, 2);
}

#[test]
fn test_fixed_height_root_is_respected() {
    let root = Element::col().id("root").height(Size::Fixed(4));
    let result = layout(&root, Rect::new(0, 0, 10, 10));
    assert_eq!(result["root"].height, 4);
}

#[test]
fn test_fill_height_children_share_remaining_space() {
    let root = Element::col()
        .id("root")
        .height(Size::Fill)
        .child(Element::text("header").id("header"))
        .child(Element::box_().id("a").height(Size::Fill))
        .child(Element::box_().id("b").height(Size::Fill));

    let result = layout(&root, Rect::new(0, 0, 10, 9));
    assert_eq!(result["header"].height, 1);
    assert_eq!(result["a"], Rect::new(0, 1, 0, 4));
    assert_eq!(result["b"].y, 5);
    assert_eq!(result["b"].height, 4);
}

// ============================================================================
// Rows
// ============================================================================

#[test]
fn test_row_distributes_fill_width() {
    let root = Element::row()
        .id("root")
        .child(Element::box_().id("left").width(Size::Fixed(5)))
        .child(Element::box_().id("mid").width(Size::Fill))
        .child(Element::box_().id("right").width(Size::Fixed(3)));

    let result = layout(&root, Rect::new(0, 0, 20, 1));

    assert_eq!(result["left"].x, 0);
    assert_eq!(result["left"].width, 5);
    assert_eq!(result["mid"].x, 5);
    assert_eq!(result["mid"].width, 12);
    assert_eq!(result["right"].x, 17);
    assert_eq!(result["right"].width, 3);
}

#[test]
fn test_row_auto_children_use_intrinsic_width() {
    let root = Element::row()
        .id("root")
        .gap(1)
        .child(Element::text("Read more").id("label"))
        .child(Element::text("▼").id("icon"));

    let result = layout(&root, Rect::new(0, 0, 40, 1));
    assert_eq!(result["label"], Rect::new(0, 0, 9, 1));
    assert_eq!(result["icon"], Rect::new(10, 0, 1, 1));
}

#[test]
fn test_row_height_is_tallest_child() {
    let root = Element::row()
        .id("root")
        .child(Element::text("one").id("a"))
        .child(Element::text("two\nlines").id("b"));

    assert_eq!(measure_height(&root, 40), 2);
}

// ============================================================================
// Box model
// ============================================================================

#[test]
fn test_border_and_padding_offset_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .padding(Edges::all(1))
        .style(Style::new().border(Border::Rounded))
        .child(Element::text("x").id("x"));

    let result = layout(&root, Rect::new(0, 0, 10, 10));
    assert_eq!(result["x"], Rect::new(2, 2, 1, 1));
    // 1 line + 2 padding + 2 border
    assert_eq!(result["root"].height, 5);
}

#[test]
fn test_margin_offsets_child() {
    let root = Element::col()
        .id("root")
        .child(Element::text("a").id("a").margin(Edges::new(1, 0, 2, 3)))
        .child(Element::text("b").id("b"));

    let result = layout(&root, Rect::new(0, 0, 10, 10));
    assert_eq!(result["a"], Rect::new(3, 1, 1, 1));
    assert_eq!(result["b"].y, 4);
}

#[test]
fn test_intrinsic_width_includes_chrome() {
    let el = Element::text("abcd")
        .padding(Edges::horizontal(2))
        .style(Style::new().border(Border::Single));
    assert_eq!(intrinsic_width(&el), 4 + 4 + 2);
}

#[test]
fn test_empty_column_measures_zero() {
    let root = Element::col().id("root");
    assert_eq!(measure_height(&root, 10), 0);
}
