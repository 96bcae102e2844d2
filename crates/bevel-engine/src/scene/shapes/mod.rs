//! Draw payloads and their `DrawList::push_*` helpers, one file per kind.

mod fill;
mod image;
mod label;
mod stroke;

pub use fill::FillCmd;
pub use image::{ImageCmd, ImageHandle};
pub use label::LabelCmd;
pub use stroke::StrokeCmd;
