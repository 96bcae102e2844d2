use bevel_engine::coords::{CornerRadii, Rect};
use bevel_engine::paint::{named, Color};
use bevel_engine::style::InteractionState;

use crate::painter::Painter;
use crate::widget::Widget;

/// Plain container surface.
///
/// Children are attached through the tree; radio buttons placed directly
/// under the same panel form one exclusive group.
pub struct Panel {
    background: Color,
    radii: CornerRadii,
    border_width: f32,
    border_color: Color,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            background: named::white_smoke(),
            radii: CornerRadii::zero(),
            border_width: 0.0,
            border_color: named::gray(),
        }
    }

    pub fn background(mut self, v: Color) -> Self {
        self.background = v;
        self
    }

    pub fn corner_radii(mut self, v: CornerRadii) -> Self {
        self.radii = v.normalized();
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = width.max(0.0);
        self.border_color = color;
        self
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn paint(&self, painter: &mut Painter, rect: Rect, _state: InteractionState) {
        painter.fill_rounded(rect, self.radii, self.background);
        painter.stroke_rounded(rect, self.radii, self.border_width, self.border_color);
    }

    fn background(&self) -> Option<Color> {
        Some(self.background)
    }
}
