//! Turns an [`Article`] into an element tree and owns its widget state.

use std::collections::BTreeMap;

use pagedom::{Color, Edges, Element, Size, Style, TextWrap};

use super::model::{Article, Block};
use crate::presenter::TransitionPresenter;
use crate::runtime::View;
use crate::widgets::{Callout, Disclosure, TokenizerDemo};

/// A live article: the document plus the state of its interactive blocks.
///
/// Each `details` block (standalone or attached to a callout) gets a
/// [`Disclosure`] and each `tokenizer` block a [`TokenizerDemo`], keyed by
/// the block's path, at any depth:
///
/// - top-level block `3`: `details-3`
/// - block `0` of the callout at `2`: `tokenizer-2-0`
/// - block `0` of the body of `details-3`: `details-3-body-0`
///
/// Disclosure bodies are rebuilt from this state on every
/// [`ArticleView::element`] call, so nested widgets keep working inside them.
/// The state lives as long as the view.
#[derive(Debug, Clone)]
pub struct ArticleView {
    article: Article,
    disclosures: BTreeMap<String, Disclosure>,
    tokenizers: BTreeMap<String, TokenizerDemo>,
}

impl ArticleView {
    pub fn new(article: Article) -> Self {
        let mut view = Self {
            article,
            disclosures: BTreeMap::new(),
            tokenizers: BTreeMap::new(),
        };
        let blocks = view.article.blocks.clone();
        view.instantiate(&blocks, "");
        log::debug!(
            "article '{}': {} disclosures, {} tokenizers",
            view.article.title,
            view.disclosures.len(),
            view.tokenizers.len()
        );
        view
    }

    fn instantiate(&mut self, blocks: &[Block], prefix: &str) {
        for (i, block) in blocks.iter().enumerate() {
            let path = format!("{prefix}{i}");
            match block {
                Block::Details { body } => {
                    let id = format!("details-{path}");
                    let disclosure = Disclosure::new(&id, body_shell(&id));
                    self.add_disclosure(disclosure, &path, body);
                }
                Block::Callout { body, details, .. } => {
                    self.instantiate(body, &format!("{path}-"));
                    if let Some(details) = details {
                        let id = format!("details-{path}");
                        let disclosure = Callout::details(&id, body_shell(&id));
                        self.add_disclosure(disclosure, &path, details);
                    }
                }
                Block::Tokenizer { text } => {
                    let id = format!("tokenizer-{path}");
                    self.tokenizers
                        .insert(id.clone(), TokenizerDemo::new(id, text.clone()));
                }
                _ => {}
            }
        }
    }

    fn add_disclosure(&mut self, disclosure: Disclosure, path: &str, body: &[Block]) {
        self.disclosures
            .insert(disclosure.id().to_string(), disclosure);
        self.instantiate(body, &format!("{path}-body-"));
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn disclosure(&self, id: &str) -> Option<&Disclosure> {
        self.disclosures.get(id)
    }

    pub fn disclosure_mut(&mut self, id: &str) -> Option<&mut Disclosure> {
        self.disclosures.get_mut(id)
    }

    pub fn disclosures(&self) -> impl Iterator<Item = &Disclosure> {
        self.disclosures.values()
    }

    pub fn tokenizer(&self, id: &str) -> Option<&TokenizerDemo> {
        self.tokenizers.get(id)
    }

    pub fn tokenizer_mut(&mut self, id: &str) -> Option<&mut TokenizerDemo> {
        self.tokenizers.get_mut(id)
    }

    /// Route an activation to the widget owning `target`.
    pub fn activate(&mut self, target: &str) -> bool {
        self.disclosures.values_mut().any(|d| d.activate(target))
            || self.tokenizers.values_mut().any(|t| t.activate(target))
    }

    /// Build the element tree for the current widget state.
    pub fn element(&self, presenter: &dyn TransitionPresenter) -> Element {
        let mut root = Element::col()
            .id("article")
            .width(Size::Fill)
            .padding(Edges::symmetric(1, 2))
            .gap(1)
            .child(
                Element::text(&self.article.title)
                    .id("article-title")
                    .style(Style::new().foreground(Color::oklch(0.9, 0.1, 250.0)).bold()),
            );

        if let Some(subtitle) = &self.article.subtitle {
            root = root.child(
                Element::text(subtitle)
                    .id("article-subtitle")
                    .style(Style::new().foreground(Color::oklch(0.65, 0.0, 0.0)).italic()),
            );
        }

        root.children(self.blocks(&self.article.blocks, "", presenter))
    }

    fn blocks(
        &self,
        blocks: &[Block],
        prefix: &str,
        presenter: &dyn TransitionPresenter,
    ) -> Vec<Element> {
        blocks
            .iter()
            .enumerate()
            .filter_map(|(i, block)| self.block(&format!("{prefix}{i}"), block, presenter))
            .collect()
    }

    fn block(
        &self,
        path: &str,
        block: &Block,
        presenter: &dyn TransitionPresenter,
    ) -> Option<Element> {
        match block {
            Block::Details { body } => {
                let details = self.disclosures.get(&format!("details-{path}"))?;
                Some(match self.body(details, path, body, presenter) {
                    Some(content) => details.element_with(content, presenter),
                    None => details.element(presenter),
                })
            }
            Block::Tokenizer { .. } => self
                .tokenizers
                .get(&format!("tokenizer-{path}"))
                .map(TokenizerDemo::element),
            Block::Callout {
                kind,
                label,
                body,
                details,
            } => {
                let mut callout = Callout::new(*kind)
                    .id(format!("callout-{path}"))
                    .children(self.blocks(body, &format!("{path}-"), presenter));
                if let Some(label) = label {
                    callout = callout.label(label);
                }
                let disclosure = details
                    .as_ref()
                    .zip(self.disclosures.get(&format!("details-{path}")));
                if let Some((blocks, disclosure)) = disclosure {
                    callout = match self.body(disclosure, path, blocks, presenter) {
                        Some(content) => callout.with_details_content(disclosure, content),
                        None => callout.with_details(disclosure),
                    };
                }
                Some(callout.element(presenter))
            }
            leaf => leaf_block(&format!("block-{path}"), leaf),
        }
    }

    /// The body of an expanded disclosure, built from current state.
    fn body(
        &self,
        details: &Disclosure,
        path: &str,
        blocks: &[Block],
        presenter: &dyn TransitionPresenter,
    ) -> Option<Element> {
        details.is_expanded().then(|| {
            body_shell(details.id())
                .children(self.blocks(blocks, &format!("{path}-body-"), presenter))
        })
    }
}

impl View for ArticleView {
    fn element(&self, presenter: &dyn TransitionPresenter) -> Element {
        ArticleView::element(self, presenter)
    }

    fn activate(&mut self, target: &str) -> bool {
        ArticleView::activate(self, target)
    }
}

/// Rules are drawn wider than any terminal and clipped to the column.
const RULE_WIDTH: usize = 512;

/// The column holding a disclosure body. Its id is what the fade is keyed on.
fn body_shell(disclosure_id: &str) -> Element {
    Element::col()
        .id(format!("{disclosure_id}-body"))
        .width(Size::Fill)
        .gap(1)
}

/// Render a block that carries no interactive state. Interactive blocks
/// yield `None`.
fn leaf_block(id: &str, block: &Block) -> Option<Element> {
    let el = match block {
        Block::Heading { text } => Element::text(text)
            .id(id)
            .margin(Edges::top(1))
            .style(Style::new().foreground(Color::oklch(0.85, 0.12, 200.0)).bold()),
        Block::Quote { text } => Element::row().id(id).width(Size::Fill).gap(1).children([
            Element::text("┃").style(Style::new().foreground(Color::oklch(0.6, 0.05, 250.0))),
            Element::text(text)
                .width(Size::Fill)
                .style(Style::new().italic()),
        ]),
        Block::Code { text } => Element::text(text)
            .id(id)
            .width(Size::Fill)
            .padding(Edges::horizontal(1))
            .text_wrap(TextWrap::Truncate)
            .style(
                Style::new()
                    .background(Color::oklch(0.25, 0.01, 250.0))
                    .foreground(Color::oklch(0.85, 0.08, 150.0)),
            ),
        Block::Rule => Element::text("─".repeat(RULE_WIDTH))
            .id(id)
            .width(Size::Fill)
            .text_wrap(TextWrap::NoWrap)
            .style(Style::new().foreground(Color::oklch(0.4, 0.0, 0.0))),
        Block::Paragraph { text } => Element::text(text).id(id).width(Size::Fill),
        Block::Details { .. } | Block::Callout { .. } | Block::Tokenizer { .. } => return None,
    };
    Some(el)
}
