//! Callout widget - a labeled, bordered aside with an optional disclosure.

use pagedom::{Border, Color, Edges, Element, Size, Style};

use super::disclosure::Disclosure;
use crate::presenter::TransitionPresenter;

/// Flavor of a callout. Decides the default label, glyph and accent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    #[default]
    Note,
    Tip,
    Info,
    Warning,
    Danger,
}

impl CalloutKind {
    pub fn label(self) -> &'static str {
        match self {
            CalloutKind::Note => "Note",
            CalloutKind::Tip => "Tip",
            CalloutKind::Info => "Info",
            CalloutKind::Warning => "Warning",
            CalloutKind::Danger => "Danger",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            CalloutKind::Note => "✎",
            CalloutKind::Tip => "★",
            CalloutKind::Info => "ℹ",
            CalloutKind::Warning => "⚠",
            CalloutKind::Danger => "✖",
        }
    }

    pub fn accent(self) -> Color {
        match self {
            CalloutKind::Note => Color::oklch(0.75, 0.02, 250.0),
            CalloutKind::Tip => Color::oklch(0.78, 0.14, 150.0),
            CalloutKind::Info => Color::oklch(0.75, 0.12, 240.0),
            CalloutKind::Warning => Color::oklch(0.82, 0.14, 85.0),
            CalloutKind::Danger => Color::oklch(0.68, 0.18, 25.0),
        }
    }
}

/// A callout container builder.
///
/// Renders a bordered column: a `<glyph> <label>` row, the body, and
/// finally the attached disclosure, if any.
///
/// ```ignore
/// let details = Callout::details("why", Element::text("Because."));
/// let el = Callout::new(CalloutKind::Tip)
///     .id("tip")
///     .child(Element::text("Short version."))
///     .with_details(&details)
///     .element(&FadePresenter::new());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Callout<'a> {
    kind: CalloutKind,
    id: Option<String>,
    label: Option<String>,
    children: Vec<Element>,
    details: Option<&'a Disclosure>,
    details_content: Option<Element>,
}

impl<'a> Callout<'a> {
    /// Create a new callout builder.
    pub fn new(kind: CalloutKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Create a disclosure meant to be attached to a callout.
    pub fn details(id: impl Into<String>, content: Element) -> Disclosure {
        Disclosure::new(id, content)
    }

    /// Set the callout id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Override the label shown next to the glyph.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add a single body element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Add body elements.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attach a disclosure shown below the body.
    pub fn with_details(mut self, details: &'a Disclosure) -> Self {
        self.details = Some(details);
        self.details_content = None;
        self
    }

    /// Attach a disclosure that shows `content` instead of its stored
    /// content. See [`Disclosure::element_with`].
    pub fn with_details_content(mut self, details: &'a Disclosure, content: Element) -> Self {
        self.details = Some(details);
        self.details_content = Some(content);
        self
    }

    /// Build the callout element.
    pub fn element(self, presenter: &dyn TransitionPresenter) -> Element {
        let id = self.id.unwrap_or_else(|| "callout".into());
        let accent = self.kind.accent();
        let label = self.label.unwrap_or_else(|| self.kind.label().into());

        let header = Element::row()
            .id(format!("{id}-label"))
            .gap(1)
            .children([
                Element::text(self.kind.glyph()).style(Style::new().foreground(accent)),
                Element::text(label).style(Style::new().foreground(accent).bold()),
            ]);

        let mut el = Element::col()
            .id(&id)
            .width(Size::Fill)
            .padding(Edges::horizontal(1))
            .style(Style::new().border(Border::Rounded).foreground(accent))
            .child(header)
            .children(self.children);

        if let Some(details) = self.details {
            el = el.child(match self.details_content {
                Some(content) => details.element_with(content, presenter),
                None => details.element(presenter),
            });
        }

        el
    }
}
