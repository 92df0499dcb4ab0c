//! Article document model.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::widgets::CalloutKind;

/// Errors that can occur when loading an article.
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("Failed to read article: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid article: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Article '{0}' has no blocks")]
    Empty(String),
}

/// A structured article: a title and a sequence of blocks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub blocks: Vec<Block>,
}

/// One block of article content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Quote {
        text: String,
    },
    Code {
        text: String,
    },
    /// A labeled aside, optionally with details behind a disclosure.
    Callout {
        #[serde(default)]
        kind: CalloutKind,
        #[serde(default)]
        label: Option<String>,
        body: Vec<Block>,
        #[serde(default)]
        details: Option<Vec<Block>>,
    },
    /// Supplementary content hidden behind a disclosure.
    Details {
        body: Vec<Block>,
    },
    Tokenizer {
        text: String,
    },
    Rule,
}

impl Article {
    /// Parse an article from JSON.
    pub fn from_json(json: &str) -> Result<Self, ArticleError> {
        let article: Article = serde_json::from_str(json)?;
        if article.blocks.is_empty() {
            return Err(ArticleError::Empty(article.title));
        }
        Ok(article)
    }

    /// Read and parse an article file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArticleError> {
        let path = path.as_ref();
        log::info!("Loading article from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
