use bevel_engine::coords::{CornerRadii, Rect};
use bevel_engine::geometry::{build_rounded_outline, circle_outline, Path};
use bevel_engine::paint::{Color, Stroke};
use bevel_engine::scene::ImageHandle;
use bevel_engine::style::InteractionState;

use crate::painter::Painter;
use crate::widget::Widget;

/// Image area clipped to a per-corner rounded outline or a circle.
///
/// A transparent background takes the color of the nearest opaque ancestor,
/// so the corners cut away by the clip blend with whatever sits behind.
pub struct PictureFrame {
    image: Option<ImageHandle>,
    radii: CornerRadii,
    circle: bool,
    background: Color,
    border_width: f32,
    border_color: Color,
}

impl PictureFrame {
    pub fn new() -> Self {
        Self {
            image: None,
            radii: CornerRadii::zero(),
            circle: false,
            background: Color::TRANSPARENT,
            border_width: 0.0,
            border_color: Color::BLACK,
        }
    }

    pub fn image(mut self, v: ImageHandle) -> Self {
        self.image = Some(v);
        self
    }

    pub fn corner_radii(mut self, v: CornerRadii) -> Self {
        self.radii = v.normalized();
        self
    }

    pub fn circle(mut self, v: bool) -> Self {
        self.circle = v;
        self
    }

    pub fn background(mut self, v: Color) -> Self {
        self.background = v;
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = width.max(0.0);
        self.border_color = color;
        self
    }

    pub fn set_image(&mut self, v: Option<ImageHandle>) {
        self.image = v;
    }

    /// Clip outline for `rect`.
    pub fn clip(&self, rect: Rect) -> Path {
        if self.circle {
            circle_outline(rect)
        } else {
            build_rounded_outline(rect, self.radii)
        }
    }
}

impl Default for PictureFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for PictureFrame {
    fn paint(&self, painter: &mut Painter, rect: Rect, _state: InteractionState) {
        let clip = self.clip(rect);
        let fill = if self.background.is_transparent() { painter.backdrop() } else { self.background };
        painter.fill_outline(clip.clone(), fill);

        if let Some(image) = self.image {
            let dest = if self.circle { rect.centered_square() } else { rect };
            painter.image(image, dest, clip);
        }

        if self.border_width > 0.0 {
            if self.circle {
                let ring = circle_outline(rect.inset(self.border_width * 0.5));
                painter.stroke_outline(ring, Stroke::new(self.border_width, self.border_color));
            } else {
                painter.stroke_rounded(rect, self.radii, self.border_width, self.border_color);
            }
        }
    }

    fn background(&self) -> Option<Color> {
        Some(self.background)
    }
}
