pub mod animation;
pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::AnimationState;
pub use buffer::{Buffer, Cell};
pub use element::{collect_text, find_element, Content, Element, Span};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState, FOCUS_GROUP};
pub use hit::{hit_test, hit_test_focusable};
pub use layout::{LayoutResult, Rect};
pub use terminal::Terminal;
pub use transitions::{Easing, Fade};
pub use types::*;
