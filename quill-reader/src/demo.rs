//! Built-in article shown when no file is given.

use quill::{Article, ArticleError};

const DEMO_ARTICLE: &str = r#"{
    "title": "How a tokenizer sees text",
    "subtitle": "Step through a sentence one token at a time",
    "blocks": [
        {
            "type": "paragraph",
            "text": "Language models never see letters. Before a model reads a sentence, a tokenizer cuts it into pieces and maps every piece to a number."
        },
        { "type": "heading", "text": "Try it" },
        {
            "type": "paragraph",
            "text": "Use Next and Prev to reveal the tokens below. Each new piece of text gets the next free id; pieces seen before reuse their id."
        },
        { "type": "tokenizer", "text": "The cat sat on the mat. The cat slept." },
        {
            "type": "callout",
            "kind": "tip",
            "label": "Spaces belong to words",
            "body": [
                {
                    "type": "paragraph",
                    "text": "A space is glued to the front of the word that follows it, so \" cat\" and \"cat\" are different tokens."
                }
            ],
            "details": [
                {
                    "type": "paragraph",
                    "text": "Keeping the space inside the token means the text can be rebuilt exactly by joining the pieces back together, with no rules about where spaces go."
                },
                { "type": "code", "text": "[\"The\", \" cat\", \" sat\", \" on\", \" the\", \" mat\", \".\"]" }
            ]
        },
        { "type": "rule" },
        { "type": "heading", "text": "Why ids?" },
        {
            "type": "paragraph",
            "text": "Numbers are what the model actually consumes. The list of ids is the whole sentence, as far as the model is concerned."
        },
        {
            "type": "details",
            "body": [
                {
                    "type": "paragraph",
                    "text": "Real tokenizers learn their vocabulary from data and split rare words into several pieces. This demo simply numbers pieces in the order it first meets them."
                }
            ]
        },
        {
            "type": "quote",
            "text": "A token is the unit of text a model reads and writes."
        }
    ]
}"#;

pub fn demo_article() -> Result<Article, ArticleError> {
    Article::from_json(DEMO_ARTICLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_article_parses() {
        let article = demo_article().unwrap();
        assert!(!article.blocks.is_empty());
    }
}
