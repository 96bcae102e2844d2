//! Recorded draw stream.
//!
//! Widgets push paths, images and labels into a [`DrawList`]; the list keeps
//! them in a deterministic paint order (layer, then insertion).

mod cmd;
mod list;
mod order;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use order::{SortKey, ZIndex};
pub use shapes::{FillCmd, ImageCmd, ImageHandle, LabelCmd, StrokeCmd};
