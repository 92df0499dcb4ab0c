//! Tests for the article model and view.

use std::io::Write;
use std::time::Instant;

use pagedom::render::{clamp_scroll, render_page};
use pagedom::{AnimationState, Buffer, collect_text, find_element};
use quill::presenter::{FadePresenter, InstantPresenter};
use quill::{Article, ArticleError, ArticleView, Block, CalloutKind, View, render_snapshot};

const ARTICLE: &str = r#"{
    "title": "How tokenizers work",
    "subtitle": "A short tour",
    "blocks": [
        { "type": "paragraph", "text": "Models read tokens, not letters." },
        { "type": "tokenizer", "text": "Hello world!" },
        {
            "type": "callout",
            "kind": "tip",
            "body": [{ "type": "paragraph", "text": "Spaces stick to words." }],
            "details": [{ "type": "paragraph", "text": "Example detail text" }]
        },
        { "type": "rule" },
        { "type": "details", "body": [{ "type": "code", "text": "let x = 1;" }] }
    ]
}"#;

fn view() -> ArticleView {
    ArticleView::new(Article::from_json(ARTICLE).unwrap())
}

fn texts(view: &ArticleView) -> Vec<String> {
    collect_text(&view.element(&InstantPresenter))
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_blocks() {
    let article = Article::from_json(ARTICLE).unwrap();
    assert_eq!(article.title, "How tokenizers work");
    assert_eq!(article.subtitle.as_deref(), Some("A short tour"));
    assert_eq!(article.blocks.len(), 5);
    assert_eq!(article.blocks[3], Block::Rule);
    assert!(matches!(
        &article.blocks[2],
        Block::Callout { kind: CalloutKind::Tip, label: None, details: Some(_), .. }
    ));
}

#[test]
fn test_callout_kind_defaults_to_note() {
    let article = Article::from_json(
        r#"{ "title": "t", "blocks": [{ "type": "callout", "body": [] }] }"#,
    )
    .unwrap();
    assert!(matches!(
        article.blocks[0],
        Block::Callout { kind: CalloutKind::Note, .. }
    ));
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        Article::from_json("not json"),
        Err(ArticleError::Parse(_))
    ));
    assert!(matches!(
        Article::from_json(r#"{ "title": "t", "blocks": [{ "type": "video" }] }"#),
        Err(ArticleError::Parse(_))
    ));
    assert!(matches!(
        Article::from_json(r#"{ "title": "t", "blocks": [] }"#),
        Err(ArticleError::Empty(title)) if title == "t"
    ));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ARTICLE.as_bytes()).unwrap();

    let article = Article::load(file.path()).unwrap();
    assert_eq!(article.blocks.len(), 5);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Article::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(ArticleError::Io(_))));
}

// ============================================================================
// View
// ============================================================================

#[test]
fn test_widgets_are_keyed_by_position() {
    let view = view();
    assert!(view.tokenizer("tokenizer-1").is_some());
    assert!(view.disclosure("details-2").is_some());
    assert!(view.disclosure("details-4").is_some());
    assert_eq!(view.disclosures().count(), 2);
}

#[test]
fn test_initial_render_is_collapsed() {
    let view = view();
    let texts = texts(&view);

    assert_eq!(texts.iter().filter(|t| *t == "Read more").count(), 2);
    assert!(!texts.contains(&"Example detail text".to_string()));
    assert!(!texts.contains(&"let x = 1;".to_string()));
    assert!(texts.contains(&"Spaces stick to words.".to_string()));
}

#[test]
fn test_activate_expands_only_its_disclosure() {
    let mut view = view();

    assert!(view.activate("details-2-open"));
    let texts = texts(&view);
    assert!(texts.contains(&"Example detail text".to_string()));
    assert!(!texts.contains(&"let x = 1;".to_string()));
    assert_eq!(texts.iter().filter(|t| *t == "Read more").count(), 1);
    assert_eq!(texts.iter().filter(|t| *t == "Hide").count(), 1);

    assert!(view.activate("details-2-close"));
    assert!(!view.disclosure("details-2").unwrap().is_expanded());
}

#[test]
fn test_activate_routes_tokenizer_controls() {
    let mut view = view();
    assert!(View::activate(&mut view, "tokenizer-1-next"));
    assert_eq!(view.tokenizer("tokenizer-1").unwrap().step(), 1);
    assert!(!view.activate("tokenizer-1-prev-nope"));
    assert!(!view.activate("unknown"));
}

#[test]
fn test_fade_wrapper_has_stable_id() {
    let mut view = view();
    view.activate("details-4-open");

    let presenter = FadePresenter::new();
    let a = view.element(&presenter);
    let b = view.element(&presenter);
    assert!(find_element(&a, "details-4-body-fade").is_some());
    assert!(find_element(&b, "details-4-body-fade").is_some());
}

#[test]
fn test_rebuilding_view_resets_state() {
    let mut first = view();
    first.activate("details-4-open");
    let rebuilt = ArticleView::new(first.article().clone());
    assert!(!rebuilt.disclosure("details-4").unwrap().is_expanded());
}

#[test]
fn test_snapshot_contains_title_and_triggers() {
    let lines = render_snapshot(&view(), 60, &InstantPresenter);
    assert!(lines.iter().any(|l| l.contains("How tokenizers work")));
    assert!(lines.iter().any(|l| l.contains("Read more ▼")));
    assert!(lines.iter().any(|l| l.contains("Step 0 / 3")));
}

// ============================================================================
// Nested blocks
// ============================================================================

const NESTED: &str = r#"{
    "title": "Nested",
    "blocks": [
        {
            "type": "details",
            "body": [
                { "type": "paragraph", "text": "Outer detail" },
                { "type": "details", "body": [{ "type": "paragraph", "text": "Inner detail" }] },
                { "type": "tokenizer", "text": "a b" }
            ]
        }
    ]
}"#;

fn nested() -> ArticleView {
    ArticleView::new(Article::from_json(NESTED).unwrap())
}

#[test]
fn test_nested_widgets_are_keyed_under_the_body() {
    let view = nested();
    assert!(view.disclosure("details-0").is_some());
    assert!(view.disclosure("details-0-body-1").is_some());
    assert!(view.tokenizer("tokenizer-0-body-2").is_some());
}

#[test]
fn test_nested_details_start_collapsed_inside_expanded_parent() {
    let mut view = nested();
    assert!(view.activate("details-0-open"));

    let texts = texts(&view);
    assert!(texts.contains(&"Outer detail".to_string()));
    assert!(!texts.contains(&"Inner detail".to_string()));
    assert_eq!(texts.iter().filter(|t| *t == "Read more").count(), 1);

    assert!(view.activate("details-0-body-1-open"));
    assert!(crate::texts(&view).contains(&"Inner detail".to_string()));
    assert!(view.disclosure("details-0").unwrap().is_expanded());
}

#[test]
fn test_nested_tokenizer_steps_inside_disclosure() {
    let mut view = nested();
    view.activate("details-0-open");
    assert!(view.activate("tokenizer-0-body-2-next"));

    let root = view.element(&InstantPresenter);
    let step = find_element(&root, "tokenizer-0-body-2-step").unwrap();
    assert_eq!(collect_text(step), vec!["Step 1 / 2".to_string()]);
}

#[test]
fn test_nested_body_keeps_fade_id_across_frames() {
    let mut view = nested();
    view.activate("details-0-open");
    view.activate("details-0-body-1-open");

    let presenter = FadePresenter::new();
    for root in [view.element(&presenter), view.element(&presenter)] {
        assert!(find_element(&root, "details-0-body-fade").is_some());
        assert!(find_element(&root, "details-0-body-1-body-fade").is_some());
    }
}

// ============================================================================
// Scrolling after collapse
// ============================================================================

fn page(view: &ArticleView) -> Buffer {
    let root = view.element(&InstantPresenter);
    render_page(&root, 40, &AnimationState::new(), Instant::now()).0
}

#[test]
fn test_collapse_at_bottom_of_long_page_stays_visible() {
    let body: Vec<String> = (0..40)
        .map(|i| format!(r#"{{ "type": "paragraph", "text": "paragraph {i}" }}"#))
        .collect();
    let json = format!(
        r#"{{ "title": "Long", "blocks": [{{ "type": "details", "body": [{}] }}] }}"#,
        body.join(",")
    );
    let mut view = ArticleView::new(Article::from_json(&json).unwrap());
    let viewport = 20;

    view.activate("details-0-open");
    let expanded = page(&view);
    let scroll = clamp_scroll(&expanded, viewport, u16::MAX);
    assert!(scroll > 0);

    assert!(view.activate("details-0-close"));
    let collapsed = page(&view);
    assert!(collapsed.height() < scroll);

    let mut screen = Buffer::new(40, viewport);
    screen.blit_rows(&collapsed, clamp_scroll(&collapsed, viewport, scroll));
    assert!(screen.lines().iter().any(|l| l.contains("Read more ▼")));
}
