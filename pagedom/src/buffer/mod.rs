#[allow(clippy::module_inception)]
mod buffer;
mod cell;

pub use buffer::Buffer;
pub use cell::{Cell, DEFAULT_BG, DEFAULT_FG};
