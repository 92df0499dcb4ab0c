//! Articles: a JSON document model and the view that renders it.

mod model;
mod view;

pub use model::{Article, ArticleError, Block};
pub use view::ArticleView;
