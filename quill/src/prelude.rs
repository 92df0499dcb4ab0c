//! Prelude module for convenient imports.
//!
//! ```ignore
//! use quill::prelude::*;
//! ```

pub use crate::article::{Article, ArticleView};
pub use crate::presenter::{FadePresenter, FadeSpec, InstantPresenter, TransitionPresenter};
pub use crate::runtime::{Runtime, RuntimeConfig, View, render_snapshot};
pub use crate::widgets::{Callout, CalloutKind, Disclosure, TokenizerDemo, Visibility};

pub use pagedom::{Color, Edges, Element, Size, Style};
