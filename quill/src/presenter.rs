//! Transition presenters - the seam between widgets and the fade machinery.
//!
//! Widgets never drive animations themselves. They describe the fade they
//! want with a [`FadeSpec`] and hand the content to a [`TransitionPresenter`],
//! which decides how (or whether) to play it.

use std::time::Duration;

use pagedom::{Easing, Element, Fade};

/// Opacity transition requested by a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeSpec {
    /// Opacity when the content first appears.
    pub initial_opacity: f32,
    /// Opacity once the transition completes.
    pub final_opacity: f32,
    /// Time before the transition starts.
    pub delay: Duration,
}

impl FadeSpec {
    /// Fade used when disclosed content is revealed.
    pub const ENTER: FadeSpec = FadeSpec {
        initial_opacity: 0.0,
        final_opacity: 1.0,
        delay: Duration::from_millis(100),
    };
}

/// Presents content with an entrance transition.
pub trait TransitionPresenter {
    /// Wrap `content` so it plays `fade` when it mounts.
    ///
    /// The returned element must render `content` verbatim once the
    /// transition has finished.
    fn present(&self, content: Element, fade: FadeSpec) -> Element;
}

/// Default presenter: plays the fade through `pagedom`'s opacity transitions.
#[derive(Debug, Clone, Copy)]
pub struct FadePresenter {
    duration: Duration,
    easing: Easing,
}

impl Default for FadePresenter {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseOut,
        }
    }
}

impl FadePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how long the fade runs once its delay has elapsed.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing curve.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The `pagedom` fade this presenter attaches for `spec`.
    pub fn fade_for(&self, spec: FadeSpec) -> Fade {
        Fade::fade_in()
            .initial(spec.initial_opacity)
            .target(spec.final_opacity)
            .delay(spec.delay)
            .duration(self.duration)
            .easing(self.easing)
    }
}

impl TransitionPresenter for FadePresenter {
    fn present(&self, content: Element, fade: FadeSpec) -> Element {
        // The wrapper id is derived from the content so that it stays stable
        // across rebuilds and the fade is not restarted every frame.
        Element::col()
            .id(format!("{}-fade", content.id))
            .fade(self.fade_for(fade))
            .child(content)
    }
}

/// Presenter that shows content immediately, without any transition.
///
/// Used for reduced motion and for snapshot rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPresenter;

impl TransitionPresenter for InstantPresenter {
    fn present(&self, content: Element, _fade: FadeSpec) -> Element {
        content
    }
}
