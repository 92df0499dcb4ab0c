//! Tests for the callout container.

use pagedom::{Border, Element, collect_text, find_element};
use quill::presenter::InstantPresenter;
use quill::{Callout, CalloutKind, Visibility};

#[test]
fn test_kind_defaults() {
    assert_eq!(CalloutKind::default(), CalloutKind::Note);
    assert_eq!(CalloutKind::Warning.label(), "Warning");
    assert_eq!(CalloutKind::Tip.glyph(), "★");
    assert_ne!(CalloutKind::Tip.accent(), CalloutKind::Danger.accent());
}

#[test]
fn test_renders_label_then_body() {
    let el = Callout::new(CalloutKind::Info)
        .id("info")
        .child(Element::text("Body text"))
        .element(&InstantPresenter);

    assert_eq!(el.id, "info");
    assert_eq!(el.style.border, Border::Rounded);
    assert_eq!(collect_text(&el), vec!["ℹ", "Info", "Body text"]);
}

#[test]
fn test_custom_label() {
    let el = Callout::new(CalloutKind::Tip)
        .label("Pro tip")
        .children([Element::text("a"), Element::text("b")])
        .element(&InstantPresenter);

    assert_eq!(collect_text(&el), vec!["★", "Pro tip", "a", "b"]);
}

#[test]
fn test_details_constructor_starts_collapsed() {
    let details = Callout::details("why", Element::text("Because."));
    assert_eq!(details.id(), "why");
    assert_eq!(details.visibility(), Visibility::Collapsed);
}

#[test]
fn test_attached_disclosure_follows_body() {
    let mut details = Callout::details("why", Element::text("Because.").id("because"));

    let el = Callout::new(CalloutKind::Note)
        .id("note")
        .child(Element::text("Short version."))
        .with_details(&details)
        .element(&InstantPresenter);
    assert_eq!(
        collect_text(&el),
        vec!["✎", "Note", "Short version.", "Read more", "▼"]
    );
    assert!(find_element(&el, "because").is_none());

    details.toggle_open();
    let el = Callout::new(CalloutKind::Note)
        .id("note")
        .child(Element::text("Short version."))
        .with_details(&details)
        .element(&InstantPresenter);
    assert_eq!(
        collect_text(&el),
        vec!["✎", "Note", "Short version.", "Because.", "Hide", "▲"]
    );
}

#[test]
fn test_attached_disclosure_with_rebuilt_content() {
    let mut details = Callout::details("why", Element::col().id("why-body"));
    details.toggle_open();

    let el = Callout::new(CalloutKind::Tip)
        .id("tip")
        .with_details_content(&details, Element::text("Live body").id("why-body"))
        .element(&InstantPresenter);
    assert_eq!(collect_text(&el), vec!["★", "Tip", "Live body", "Hide", "▲"]);

    // A later with_details goes back to the stored content
    let el = Callout::new(CalloutKind::Tip)
        .with_details_content(&details, Element::text("Live body"))
        .with_details(&details)
        .element(&InstantPresenter);
    assert!(!collect_text(&el).contains(&"Live body".to_string()));
}
