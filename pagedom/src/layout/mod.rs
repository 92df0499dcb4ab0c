mod flex;
mod rect;

pub use flex::{intrinsic_width, layout, measure_height, LayoutResult};
pub use rect::Rect;
