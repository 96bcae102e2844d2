//! Built-in controls.

pub mod battery;
pub mod button;
pub mod control_box;
pub mod panel;
pub mod picture_frame;
pub mod spinner;
pub mod switch;

pub use battery::{Battery, BatteryShape};
pub use button::Button;
pub use control_box::{ControlBox, ControlBoxKind, WindowCommand};
pub use panel::Panel;
pub use picture_frame::PictureFrame;
pub use spinner::Spinner;
pub use switch::Switch;
