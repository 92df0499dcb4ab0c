//! Toy word-piece tokenizer used by the step-through demo.

use std::collections::HashMap;
use std::ops::Range;

/// A slice of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte range in the source text.
    pub span: Range<usize>,
    pub text: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Class {
    Word,
    Space,
    Punct,
}

fn classify(c: char) -> Class {
    if c.is_alphanumeric() {
        Class::Word
    } else if c.is_whitespace() {
        Class::Space
    } else {
        Class::Punct
    }
}

/// Split `text` into tokens.
///
/// A token is a run of alphanumerics, a single punctuation character, or
/// whitespace. A whitespace run directly before a word is attached to that
/// word as a leading space (`" word"`); any other whitespace is a token of
/// its own. Concatenating the token texts gives back `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let mut end = start + c.len_utf8();

        match classify(c) {
            Class::Punct => {}
            Class::Word => {
                while let Some(&(i, next)) = chars.peek() {
                    if classify(next) != Class::Word {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }
            }
            Class::Space => {
                while let Some(&(i, next)) = chars.peek() {
                    if classify(next) != Class::Space {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }
                if let Some(&(_, next)) = chars.peek()
                    && classify(next) == Class::Word
                {
                    while let Some(&(i, next)) = chars.peek() {
                        if classify(next) != Class::Word {
                            break;
                        }
                        end = i + next.len_utf8();
                        chars.next();
                    }
                }
            }
        }

        tokens.push(Token {
            span: start..end,
            text: text[start..end].to_string(),
        });
    }

    tokens
}

/// Assigns ids to token texts in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    ids: HashMap<String, usize>,
    entries: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from `tokens`, returning it with the id of each token.
    pub fn from_tokens(tokens: &[Token]) -> (Self, Vec<usize>) {
        let mut vocab = Self::new();
        let ids = tokens.iter().map(|t| vocab.id_for(&t.text)).collect();
        (vocab, ids)
    }

    /// Id of `text`, assigning the next free id on first sight.
    pub fn id_for(&mut self, text: &str) -> usize {
        if let Some(&id) = self.ids.get(text) {
            return id;
        }
        let id = self.entries.len();
        self.ids.insert(text.to_string(), id);
        self.entries.push(text.to_string());
        id
    }

    pub fn get(&self, text: &str) -> Option<usize> {
        self.ids.get(text).copied()
    }

    /// Token text for `id`.
    pub fn text(&self, id: usize) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
