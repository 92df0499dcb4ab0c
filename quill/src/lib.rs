//! Interactive article widgets for the terminal.
//!
//! `quill` builds on `pagedom`: widgets produce element trees, a
//! [`TransitionPresenter`](presenter::TransitionPresenter) decides how
//! revealed content fades in, and the [`Runtime`] drives a [`View`] in a
//! raw-mode terminal.

pub mod article;
pub mod prelude;
pub mod presenter;
pub mod runtime;
pub mod widgets;

pub use article::{Article, ArticleError, ArticleView, Block};
pub use presenter::{FadePresenter, FadeSpec, InstantPresenter, TransitionPresenter};
pub use runtime::{Runtime, RuntimeConfig, RuntimeError, View, render_snapshot};
pub use widgets::{Callout, CalloutKind, Disclosure, TokenizerDemo, Visibility};
