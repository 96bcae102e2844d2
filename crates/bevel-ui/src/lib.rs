//! Bevel UI: custom controls on a retained widget tree.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use bevel_ui::prelude::*;
//!
//! let mut ui = UiScene::default();
//! let panel = ui.insert(Panel::new(), Rect::new(0.0, 0.0, 320.0, 120.0));
//! for (i, label) in ["Low", "Mid", "High"].into_iter().enumerate() {
//!     ui.tree_mut().insert_child(
//!         panel,
//!         Button::new(label).role(ControlRole::Radio),
//!         Rect::new(10.0 + i as f32 * 100.0, 10.0, 90.0, 32.0),
//!     )?;
//! }
//! ui.start();
//!
//! // per input event / frame:
//! ui.click(cursor, MouseButton::Primary);
//! ui.advance(dt);
//! let draw_list = ui.paint();
//! ```
//!
//! # Custom widgets
//!
//! Implement [`Widget`](widget::Widget) and insert it into the tree. Return a
//! role from [`Widget::role`](widget::Widget::role) to take part in toggle or
//! radio handling.

pub mod drag;
pub mod event;
pub mod painter;
pub mod scene;
pub mod tree;
pub mod widget;
pub mod widgets;

/// Everything needed to build and extend a UI.
pub mod prelude {
    pub use crate::drag::{WindowDragger, WindowGeometry, WindowMove};
    pub use crate::event::{EventResult, MouseButton, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::tree::{TreeError, WidgetId, WidgetTree};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        Battery, BatteryShape, Button, ControlBox, ControlBoxKind, Panel, PictureFrame, Spinner,
        Switch, WindowCommand,
    };

    pub use bevel_engine::anim::MotionProfile;
    pub use bevel_engine::coords::{CornerRadii, Rect, Vec2};
    pub use bevel_engine::geometry::{build_rounded_outline, capsule_outline, circle_outline};
    pub use bevel_engine::paint::{named, Color, Paint, Stroke};
    pub use bevel_engine::scene::{DrawCmd, DrawList, ImageHandle};
    pub use bevel_engine::select::{CheckedChanged, ControlRole};
    pub use bevel_engine::style::{ColorTriple, InteractionState, StylePalette};
    pub use bevel_engine::time::TickerConfig;
}
