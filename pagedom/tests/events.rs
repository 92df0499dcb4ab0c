use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtButton,
    MouseEvent, MouseEventKind,
};
use pagedom::{
    collect_focusable, hit_test, hit_test_focusable, Element, Event, FocusState, Key,
    LayoutResult, MouseButton, Rect, FOCUS_GROUP,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn key(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn three_buttons() -> Element {
    Element::col()
        .id("root")
        .child(Element::text("one").id("one").focusable(true).clickable(true))
        .child(Element::text("two").id("two").focusable(true).clickable(true))
        .child(Element::text("plain").id("plain"))
        .child(Element::text("three").id("three").focusable(true).clickable(true))
}

fn three_buttons_layout() -> LayoutResult {
    create_layout(&[
        ("root", Rect::new(0, 0, 20, 4)),
        ("one", Rect::new(0, 0, 3, 1)),
        ("two", Rect::new(0, 1, 3, 1)),
        ("plain", Rect::new(0, 2, 5, 1)),
        ("three", Rect::new(0, 3, 5, 1)),
    ])
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = three_buttons();
    let layout = three_buttons_layout();

    assert_eq!(hit_test(&layout, &root, 1, 1), Some("two".to_string()));
    assert_eq!(hit_test(&layout, &root, 1, 2), None);
    assert_eq!(hit_test(&layout, &root, 50, 50), None);
}

#[test]
fn test_hit_test_overlapping_elements() {
    // Later children should be "on top"
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom").clickable(true))
        .child(Element::box_().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)),
    ]);

    assert_eq!(hit_test(&layout, &root, 40, 40), Some("top".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("bottom".to_string()));
}

#[test]
fn test_hit_test_focusable_returns_deepest() {
    let root = Element::col()
        .id("root")
        .focusable(true)
        .child(Element::text("inner").id("inner").focusable(true));
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 5)),
        ("inner", Rect::new(0, 0, 5, 1)),
    ]);

    assert_eq!(hit_test_focusable(&layout, &root, 1, 0), Some("inner".to_string()));
    assert_eq!(hit_test_focusable(&layout, &root, 1, 3), Some("root".to_string()));
}

// ============================================================================
// Focus navigation
// ============================================================================

#[test]
fn test_collect_focusable_in_tree_order() {
    assert_eq!(collect_focusable(&three_buttons()), vec!["one", "two", "three"]);
}

#[test]
fn test_focus_next_wraps_around() {
    let root = three_buttons();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("one".to_string()));
    assert_eq!(focus.focus_next(&root), Some("two".to_string()));
    assert_eq!(focus.focus_next(&root), Some("three".to_string()));
    assert_eq!(focus.focus_next(&root), Some("one".to_string()));
}

#[test]
fn test_focus_prev_starts_from_last() {
    let root = three_buttons();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_prev(&root), Some("three".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("two".to_string()));
}

#[test]
fn test_focus_next_on_empty_tree() {
    let root = Element::col().id("root");
    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), None);
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_revalidate_moves_focus_within_group() {
    let before = Element::col()
        .id("root")
        .child(Element::text("Read more").id("d-open").focusable(true).data(FOCUS_GROUP, "d"));
    let after = Element::col()
        .id("root")
        .child(Element::text("body").id("body"))
        .child(Element::text("Hide").id("d-close").focusable(true).data(FOCUS_GROUP, "d"));

    let mut focus = FocusState::new();
    focus.focus(&before, "d-open");
    assert_eq!(focus.revalidate(&after), Some("d-close".to_string()));
    assert_eq!(focus.focused(), Some("d-close"));
    // Still present: nothing moves
    assert_eq!(focus.revalidate(&after), None);
}

#[test]
fn test_revalidate_clears_focus_without_group() {
    let before = three_buttons();
    let after = Element::col().id("root");

    let mut focus = FocusState::new();
    focus.focus(&before, "two");
    assert_eq!(focus.revalidate(&after), None);
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_apply_marks_focused_element() {
    let mut root = three_buttons();
    let mut focus = FocusState::new();
    focus.focus(&root, "two");
    focus.apply(&mut root);

    assert!(pagedom::find_element(&root, "two").unwrap().focused);
    assert!(!pagedom::find_element(&root, "one").unwrap().focused);
}

// ============================================================================
// Event processing
// ============================================================================

#[test]
fn test_tab_emits_focus_events() {
    let root = three_buttons();
    let layout = three_buttons_layout();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout, 0);
    assert_eq!(events, vec![Event::Focus { target: "one".into() }]);

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout, 0);
    assert_eq!(
        events,
        vec![
            Event::Blur { target: "one".into() },
            Event::Focus { target: "two".into() },
        ]
    );
}

#[test]
fn test_key_targets_focused_element() {
    let root = three_buttons();
    let layout = three_buttons_layout();
    let mut focus = FocusState::new();
    focus.focus(&root, "three");

    let events = focus.process_events(&[key(KeyCode::Enter)], &root, &layout, 0);
    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("three".into()),
            key: Key::Enter,
            modifiers: Default::default(),
        }]
    );
}

#[test]
fn test_click_focuses_and_targets_clickable() {
    let root = three_buttons();
    let layout = three_buttons_layout();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[click(1, 0)], &root, &layout, 0);
    assert_eq!(focus.focused(), Some("one"));
    assert!(events.contains(&Event::Click {
        target: Some("one".into()),
        x: 1,
        y: 0,
        button: MouseButton::Left,
    }));
}

#[test]
fn test_click_is_translated_by_scroll_offset() {
    let root = three_buttons();
    let layout = three_buttons_layout();
    let mut focus = FocusState::new();

    // Screen row 0 shows content row 3 when scrolled by 3
    let events = focus.process_events(&[click(1, 0)], &root, &layout, 3);
    assert!(events.iter().any(|e| matches!(
        e,
        Event::Click { target: Some(t), .. } if t == "three"
    )));
}

#[test]
fn test_wheel_becomes_scroll_event() {
    let root = three_buttons();
    let layout = three_buttons_layout();
    let mut focus = FocusState::new();

    let wheel = CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    let events = focus.process_events(&[wheel], &root, &layout, 0);
    assert_eq!(events, vec![Event::Scroll { delta_y: 3 }]);
}
