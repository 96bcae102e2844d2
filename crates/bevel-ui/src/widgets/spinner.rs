use bevel_engine::anim::SpinnerPhase;
use bevel_engine::coords::Rect;
use bevel_engine::geometry::{circle_outline, open_arc};
use bevel_engine::paint::{named, Color, Stroke};
use bevel_engine::style::InteractionState;

use crate::painter::Painter;
use crate::widget::Widget;

/// Sweep of the rotating arc.
const ARC_SWEEP_DEG: f32 = 270.0;

/// Circular progress indicator: a background ring, a rotating 270° arc and
/// a percentage label.
pub struct Spinner {
    value: f32,
    maximum: f32,
    decimals: usize,
    ring_width: f32,
    ring_color: Color,
    arc_color: Color,
    text_color: Color,
    font_size: f32,
    show_label: bool,
    spinning: bool,
    phase: SpinnerPhase,
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            maximum: 100.0,
            decimals: 0,
            ring_width: 10.0,
            ring_color: named::ring_gray(),
            arc_color: named::medium_slate_blue(),
            text_color: Color::BLACK,
            font_size: 12.0,
            show_label: true,
            spinning: true,
            phase: SpinnerPhase::default(),
        }
    }

    pub fn ring_width(mut self, v: f32) -> Self {
        self.ring_width = v.max(0.0);
        self
    }

    pub fn ring_color(mut self, v: Color) -> Self {
        self.ring_color = v;
        self
    }

    pub fn arc_color(mut self, v: Color) -> Self {
        self.arc_color = v;
        self
    }

    pub fn text_color(mut self, v: Color) -> Self {
        self.text_color = v;
        self
    }

    pub fn font_size(mut self, v: f32) -> Self {
        self.font_size = v;
        self
    }

    pub fn show_label(mut self, v: bool) -> Self {
        self.show_label = v;
        self
    }

    pub fn decimals(mut self, v: usize) -> Self {
        self.decimals = v;
        self
    }

    pub fn step_deg(mut self, v: f32) -> Self {
        self.phase = SpinnerPhase::new(v);
        self
    }

    pub fn maximum(mut self, v: f32) -> Self {
        self.set_maximum(v);
        self
    }

    pub fn value(mut self, v: f32) -> Self {
        self.set_value(v);
        self
    }

    /// Sets the progress value, clamped to `[0, maximum]`.
    pub fn set_value(&mut self, v: f32) {
        if v.is_finite() {
            self.value = v.clamp(0.0, self.maximum);
        }
    }

    /// Sets the maximum (at least 1) and re-clamps the value.
    pub fn set_maximum(&mut self, v: f32) {
        self.maximum = if v.is_finite() { v.max(1.0) } else { 100.0 };
        self.value = self.value.min(self.maximum);
    }

    pub fn set_spinning(&mut self, v: bool) {
        self.spinning = v;
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.phase.angle()
    }

    pub fn percent(&self) -> f32 {
        self.value / self.maximum * 100.0
    }

    /// Label text with the configured number of decimals.
    pub fn label_text(&self) -> String {
        format!("{:.*}%", self.decimals, self.percent())
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Spinner {
    fn paint(&self, painter: &mut Painter, rect: Rect, state: InteractionState) {
        let square = rect.centered_square();
        let half = self.ring_width * 0.5;
        let ring = square.inset(half);
        if ring.is_empty() {
            return;
        }

        let arc_color = if state.enabled { self.arc_color } else { named::gray() };
        painter.stroke_outline(circle_outline(ring), Stroke::new(self.ring_width, self.ring_color));
        painter.stroke_content(
            open_arc(ring.center(), ring.width() * 0.5, self.phase.angle(), ARC_SWEEP_DEG),
            Stroke::round(self.ring_width, arc_color),
        );

        if self.show_label {
            painter.label(self.label_text(), square.center(), self.font_size, self.text_color);
        }
    }

    fn tick(&mut self) -> bool {
        if !self.spinning {
            return false;
        }
        self.phase.step();
        true
    }
}

#[cfg(test)]
mod tests {
    use bevel_engine::geometry::PathEl;
    use bevel_engine::scene::{DrawCmd, DrawList};

    use super::*;

    #[test]
    fn value_is_clamped_to_maximum() {
        let mut s = Spinner::new().maximum(50.0);
        s.set_value(80.0);
        assert_eq!(s.percent(), 100.0);
        s.set_value(-1.0);
        assert_eq!(s.percent(), 0.0);
    }

    #[test]
    fn maximum_is_at_least_one() {
        let s = Spinner::new().maximum(0.0).value(1.0);
        assert_eq!(s.label_text(), "100%");
    }

    #[test]
    fn shrinking_maximum_reclamps_value() {
        let s = Spinner::new().value(90.0).maximum(60.0);
        assert_eq!(s.label_text(), "100%");
    }

    #[test]
    fn label_uses_decimals() {
        let s = Spinner::new().maximum(3.0).value(1.0).decimals(2);
        assert_eq!(s.label_text(), "33.33%");
    }

    #[test]
    fn tick_rotates_until_stopped() {
        let mut s = Spinner::new();
        assert!(s.tick());
        assert!(s.tick());
        assert_eq!(s.angle(), 10.0);
        s.set_spinning(false);
        assert!(!s.tick());
        assert_eq!(s.angle(), 10.0);
    }

    #[test]
    fn arc_starts_at_phase_angle() {
        let mut s = Spinner::new();
        s.tick();
        let mut list = DrawList::new();
        s.paint(&mut Painter::new(&mut list), Rect::new(0.0, 0.0, 100.0, 100.0), InteractionState::default());
        let arc = list
            .items()
            .iter()
            .find_map(|i| match &i.cmd {
                DrawCmd::Stroke(st) if st.stroke.round => match st.path.elements().get(1) {
                    Some(PathEl::Arc(a)) => Some(*a),
                    _ => None,
                },
                _ => None,
            })
            .unwrap();
        assert_eq!((arc.start_deg, arc.sweep_deg, arc.radius), (5.0, 270.0, 45.0));
    }
}
