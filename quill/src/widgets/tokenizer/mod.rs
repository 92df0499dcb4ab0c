//! Tokenizer step-through demo.
//!
//! Reveals the tokens of a short text one at a time, showing how the text is
//! split and which vocabulary id each token gets.

mod tokenize;

pub use tokenize::{Token, Vocabulary, tokenize};

use log::debug;
use pagedom::{Color, Edges, Element, Size, Span, Style};

/// Background colors cycled through for revealed tokens.
const TOKEN_COLORS: [(f32, f32, f32); 4] = [
    (0.40, 0.08, 250.0),
    (0.40, 0.08, 150.0),
    (0.40, 0.08, 30.0),
    (0.40, 0.08, 300.0),
];

/// Interactive demo stepping through the tokenization of `text`.
#[derive(Debug, Clone)]
pub struct TokenizerDemo {
    id: String,
    text: String,
    tokens: Vec<Token>,
    ids: Vec<usize>,
    vocabulary: Vocabulary,
    step: usize,
}

impl TokenizerDemo {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = tokenize(&text);
        let (vocabulary, ids) = Vocabulary::from_tokens(&tokens);
        Self {
            id: id.into(),
            text,
            tokens,
            ids,
            vocabulary,
            step: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of revealed tokens.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Vocabulary ids of the tokens revealed so far.
    pub fn revealed_ids(&self) -> &[usize] {
        &self.ids[..self.step]
    }

    /// The most recently revealed token.
    pub fn current(&self) -> Option<&Token> {
        self.step.checked_sub(1).map(|i| &self.tokens[i])
    }

    pub fn prev_id(&self) -> String {
        format!("{}-prev", self.id)
    }

    pub fn next_id(&self) -> String {
        format!("{}-next", self.id)
    }

    pub fn reset_id(&self) -> String {
        format!("{}-reset", self.id)
    }

    /// Reveal one more token. Returns false at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.step >= self.tokens.len() {
            return false;
        }
        self.step += 1;
        debug!("tokenizer {}: step {}/{}", self.id, self.step, self.tokens.len());
        true
    }

    /// Hide the last revealed token. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        debug!("tokenizer {}: step {}/{}", self.id, self.step, self.tokens.len());
        true
    }

    /// Hide all tokens. Returns false if none were revealed.
    pub fn reset(&mut self) -> bool {
        let changed = self.step != 0;
        self.step = 0;
        changed
    }

    /// Reveal all tokens. Returns false if all were already revealed.
    pub fn finish(&mut self) -> bool {
        let changed = self.step != self.tokens.len();
        self.step = self.tokens.len();
        changed
    }

    /// Route an activation of one of the controls. Returns whether the
    /// step changed.
    pub fn activate(&mut self, target: &str) -> bool {
        if target == self.next_id() {
            self.step_forward()
        } else if target == self.prev_id() {
            self.step_back()
        } else if target == self.reset_id() {
            self.reset()
        } else {
            false
        }
    }

    pub fn element(&self) -> Element {
        let muted = Style::new().foreground(Color::oklch(0.65, 0.0, 0.0));

        let ids_line = if self.step == 0 {
            "ids: []".to_string()
        } else {
            let ids: Vec<String> = self.revealed_ids().iter().map(usize::to_string).collect();
            format!("ids: [{}]", ids.join(", "))
        };

        Element::col()
            .id(&self.id)
            .width(Size::Fill)
            .gap(1)
            .children([
                Element::spans(self.token_spans()).id(format!("{}-text", self.id)),
                Element::text(format!("Step {} / {}", self.step, self.tokens.len()))
                    .id(format!("{}-step", self.id))
                    .style(muted),
                Element::text(ids_line)
                    .id(format!("{}-ids", self.id))
                    .style(muted),
                Element::row().id(format!("{}-controls", self.id)).gap(2).children([
                    control(self.prev_id(), "◀ Prev"),
                    control(self.next_id(), "Next ▶"),
                    control(self.reset_id(), "Reset"),
                ]),
            ])
    }

    fn token_spans(&self) -> Vec<Span> {
        let mut spans: Vec<Span> = self
            .tokens
            .iter()
            .take(self.step)
            .enumerate()
            .map(|(i, token)| {
                let (l, c, h) = TOKEN_COLORS[i % TOKEN_COLORS.len()];
                let color = Color::oklch(l, c, h);
                let mut style = Style::new().background(color);
                if i + 1 == self.step {
                    style = style
                        .background(color.lighten(0.3))
                        .foreground(Color::oklch(0.15, 0.0, 0.0))
                        .bold();
                }
                Span::styled(token.text.clone(), style)
            })
            .collect();

        // The unrevealed remainder stays visible, dimmed
        let revealed_end = self.current().map(|t| t.span.end).unwrap_or(0);
        if revealed_end < self.text.len() {
            spans.push(Span::styled(
                self.text[revealed_end..].to_string(),
                Style::new().foreground(Color::oklch(0.5, 0.0, 0.0)),
            ));
        }

        spans
    }
}

fn control(id: String, label: &str) -> Element {
    Element::text(label)
        .id(id)
        .padding(Edges::horizontal(1))
        .focusable(true)
        .clickable(true)
        .style(Style::new().background(Color::oklch(0.3, 0.02, 250.0)))
        .style_focused(
            Style::new()
                .background(Color::oklch(0.55, 0.12, 250.0))
                .bold(),
        )
}
