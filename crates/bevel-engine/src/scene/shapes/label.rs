use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Single-line text centred on `center`. Shaping is the consumer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCmd {
    pub text: String,
    pub center: Vec2,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
}

impl DrawList {
    pub fn push_label(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        center: Vec2,
        size: f32,
        color: Color,
    ) -> bool {
        let text = text.into();
        if text.is_empty() || !(size > 0.0) || color.is_transparent() {
            return false;
        }
        self.push(z, DrawCmd::Label(LabelCmd { text, center, size, color }));
        true
    }
}
