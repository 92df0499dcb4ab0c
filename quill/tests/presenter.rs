//! Tests for transition presenters.

use std::time::{Duration, Instant};

use pagedom::{AnimationState, Easing, Element, find_element};
use quill::presenter::{FadePresenter, FadeSpec, InstantPresenter, TransitionPresenter};

fn content() -> Element {
    Element::text("Example detail text").id("body")
}

#[test]
fn test_enter_spec_values() {
    assert_eq!(FadeSpec::ENTER.initial_opacity, 0.0);
    assert_eq!(FadeSpec::ENTER.final_opacity, 1.0);
    assert_eq!(FadeSpec::ENTER.delay, Duration::from_millis(100));
}

#[test]
fn test_instant_presenter_returns_content_unchanged() {
    let el = InstantPresenter.present(content(), FadeSpec::ENTER);
    assert_eq!(el.id, "body");
    assert!(el.fade.is_none());
}

#[test]
fn test_fade_presenter_wraps_content() {
    let el = FadePresenter::new().present(content(), FadeSpec::ENTER);

    assert_eq!(el.id, "body-fade");
    let fade = el.fade.expect("wrapper carries the fade");
    assert_eq!(fade.from, 0.0);
    assert_eq!(fade.to, 1.0);
    assert_eq!(fade.delay, Duration::from_millis(100));
    assert_eq!(fade.duration, Duration::from_millis(300));
    assert_eq!(fade.easing, Easing::EaseOut);

    let inner = find_element(&el, "body").unwrap();
    assert!(inner.fade.is_none());
}

#[test]
fn test_fade_presenter_configuration() {
    let presenter = FadePresenter::new()
        .duration(Duration::from_millis(120))
        .easing(Easing::Linear);
    let fade = presenter.fade_for(FadeSpec {
        initial_opacity: 0.25,
        final_opacity: 0.75,
        delay: Duration::ZERO,
    });

    assert_eq!(fade.from, 0.25);
    assert_eq!(fade.to, 0.75);
    assert_eq!(fade.duration, Duration::from_millis(120));
    assert_eq!(fade.easing, Easing::Linear);
}

#[test]
fn test_wrapper_id_is_stable_across_rebuilds() {
    let presenter = FadePresenter::new();
    let a = presenter.present(content(), FadeSpec::ENTER);
    let b = presenter.present(content(), FadeSpec::ENTER);
    assert_eq!(a.id, b.id);
}

// ============================================================================
// Fade timeline
// ============================================================================

#[test]
fn test_opacity_timeline() {
    let root = Element::col()
        .id("root")
        .child(FadePresenter::new().present(content(), FadeSpec::ENTER));
    let t0 = Instant::now();
    let mut animation = AnimationState::new();
    animation.update(&root, t0);

    let at = |ms: u64| {
        animation
            .opacity("body-fade", t0 + Duration::from_millis(ms))
            .unwrap()
    };

    // Held at the initial opacity during the delay
    assert_eq!(at(0), 0.0);
    assert_eq!(at(99), 0.0);

    // Never decreasing once started
    let mut last = 0.0;
    for ms in (100..=400).step_by(20) {
        let o = at(ms);
        assert!(o >= last, "opacity dropped at {ms}ms");
        assert!((0.0..=1.0).contains(&o));
        last = o;
    }

    // Complete after delay + duration
    assert_eq!(at(400), 1.0);
    assert_eq!(at(1000), 1.0);
    assert!(!animation.has_active_transitions(t0 + Duration::from_millis(400)));
}

#[test]
fn test_reduced_motion_is_immediate() {
    let root = Element::col()
        .id("root")
        .child(FadePresenter::new().present(content(), FadeSpec::ENTER));
    let t0 = Instant::now();
    let mut animation = AnimationState::new();
    animation.set_reduced_motion(true);
    animation.update(&root, t0);

    assert_eq!(animation.opacity("body-fade", t0), Some(1.0));
    assert!(!animation.has_active_transitions(t0));
}
