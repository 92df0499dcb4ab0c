//! Article widgets.

pub mod callout;
pub mod disclosure;
pub mod tokenizer;

pub use callout::{Callout, CalloutKind};
pub use disclosure::{Disclosure, Visibility};
pub use tokenizer::TokenizerDemo;
