//! Disclosure widget - "Read more" / "Hide" toggle over supplementary content.

use log::debug;
use pagedom::{Color, Edges, Element, FOCUS_GROUP, Style};

use crate::presenter::{FadeSpec, TransitionPresenter};

/// Label of the expand trigger.
pub const READ_MORE_LABEL: &str = "Read more";
/// Label of the collapse trigger.
pub const HIDE_LABEL: &str = "Hide";
/// Icon shown next to the expand trigger.
pub const EXPAND_ICON: &str = "▼";
/// Icon shown next to the collapse trigger.
pub const COLLAPSE_ICON: &str = "▲";

/// Whether a disclosure's content is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Collapsed,
    Expanded,
}

/// A widget that hides `content` behind a "Read more" trigger.
///
/// The widget owns its visibility. Nothing is persisted: a freshly
/// constructed disclosure always starts collapsed.
///
/// ```ignore
/// let mut details = Disclosure::new("details", Element::text("Example detail text"));
/// details.toggle_open();
/// let el = details.element(&FadePresenter::new());
/// ```
#[derive(Debug, Clone)]
pub struct Disclosure {
    id: String,
    content: Element,
    visibility: Visibility,
}

impl Disclosure {
    /// Create a collapsed disclosure over `content`.
    pub fn new(id: impl Into<String>, content: Element) -> Self {
        Self {
            id: id.into(),
            content,
            visibility: Visibility::Collapsed,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_expanded(&self) -> bool {
        self.visibility == Visibility::Expanded
    }

    /// Id of the "Read more" trigger.
    pub fn open_trigger_id(&self) -> String {
        format!("{}-open", self.id)
    }

    /// Id of the "Hide" trigger.
    pub fn close_trigger_id(&self) -> String {
        format!("{}-close", self.id)
    }

    /// Reveal the content. Already expanded stays expanded.
    pub fn toggle_open(&mut self) {
        self.set_visibility(Visibility::Expanded);
    }

    /// Hide the content. Already collapsed stays collapsed.
    pub fn toggle_close(&mut self) {
        self.set_visibility(Visibility::Collapsed);
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        if self.visibility != visibility {
            debug!("disclosure {}: {:?} -> {:?}", self.id, self.visibility, visibility);
            self.visibility = visibility;
        }
    }

    /// Route an activation of one of this widget's triggers.
    ///
    /// Returns false if `target` is not a trigger that is currently shown.
    pub fn activate(&mut self, target: &str) -> bool {
        match self.visibility {
            Visibility::Collapsed if target == self.open_trigger_id() => {
                self.toggle_open();
                true
            }
            Visibility::Expanded if target == self.close_trigger_id() => {
                self.toggle_close();
                true
            }
            _ => false,
        }
    }

    /// Build the element for the current visibility.
    ///
    /// Collapsed renders only the expand trigger. Expanded renders the
    /// content, presented with [`FadeSpec::ENTER`], followed by the
    /// collapse trigger.
    pub fn element(&self, presenter: &dyn TransitionPresenter) -> Element {
        self.element_with(self.content.clone(), presenter)
    }

    /// Like [`Disclosure::element`], but shows `content` in place of the
    /// stored content. For owners that rebuild the content from their own
    /// state each frame; `content` should keep the same id between calls so
    /// a running fade is not restarted.
    pub fn element_with(&self, content: Element, presenter: &dyn TransitionPresenter) -> Element {
        let container = Element::col().id(&self.id);

        match self.visibility {
            Visibility::Collapsed => container.child(self.trigger(
                self.open_trigger_id(),
                READ_MORE_LABEL,
                EXPAND_ICON,
            )),
            Visibility::Expanded => container
                .gap(1)
                .child(presenter.present(content, FadeSpec::ENTER))
                .child(self.trigger(self.close_trigger_id(), HIDE_LABEL, COLLAPSE_ICON)),
        }
    }

    fn trigger(&self, id: String, label: &str, icon: &str) -> Element {
        let accent = Color::oklch(0.75, 0.12, 250.0);

        Element::row()
            .id(id)
            .gap(1)
            .padding(Edges::horizontal(1))
            .focusable(true)
            .clickable(true)
            .data(FOCUS_GROUP, self.id.as_str())
            .style_focused(Style::new().background(accent.darken(0.4)))
            .children([
                Element::text(label).style(Style::new().foreground(accent).underline()),
                Element::text(icon).style(Style::new().foreground(accent)),
            ])
    }
}
