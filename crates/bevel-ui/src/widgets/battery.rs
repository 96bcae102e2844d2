use bevel_engine::anim::{AnimatedValue, AnimationConfig, MotionProfile};
use bevel_engine::coords::{CornerRadii, Rect};
use bevel_engine::geometry::{build_rounded_outline, capsule_outline, rect_outline, Path};
use bevel_engine::paint::{named, Color, Paint, RadialGradient, Stroke};
use bevel_engine::style::InteractionState;

use crate::painter::Painter;
use crate::widget::Widget;

/// Outline style of a [`Battery`] body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatteryShape {
    #[default]
    Rectangle,
    RoundedRectangle,
    Capsule,
}

/// Inner gap between the body outline and the charge fill.
const FILL_MARGIN: f32 = 2.0;

/// A charge indicator whose level animates toward the value it is given.
///
/// The level is a percentage in `[0, 100]` and starts full. Its fill color tracks the
/// animated level: red up to 20, orange up to 50, then the configured color.
///
/// # Example
/// ```rust,ignore
/// Battery::new()
///     .shape(BatteryShape::Capsule)
///     .motion(MotionProfile::Smooth)
///     .glow(true)
/// ```
pub struct Battery {
    level: AnimatedValue,
    shape: BatteryShape,
    corner_radius: i32,
    color: Color,
    outline_color: Color,
    outline_width: f32,
    text_color: Color,
    font_size: f32,
    glow: bool,
    glow_color: Color,
    charging: bool,
    show_percentage: bool,
}

impl Battery {
    pub fn new() -> Self {
        Self {
            level: AnimatedValue::new(100.0, AnimationConfig::default()),
            shape: BatteryShape::Rectangle,
            corner_radius: 15,
            color: named::lime_green(),
            outline_color: Color::BLACK,
            outline_width: 2.0,
            text_color: Color::BLACK,
            font_size: 10.0,
            glow: false,
            glow_color: named::yellow(),
            charging: false,
            show_percentage: true,
        }
    }

    pub fn shape(mut self, v: BatteryShape) -> Self {
        self.shape = v;
        self
    }

    pub fn corner_radius(mut self, v: i32) -> Self {
        self.corner_radius = v.max(0);
        self
    }

    pub fn color(mut self, v: Color) -> Self {
        self.color = v;
        self
    }

    pub fn outline_color(mut self, v: Color) -> Self {
        self.outline_color = v;
        self
    }

    pub fn outline_width(mut self, v: f32) -> Self {
        self.outline_width = v.max(0.0);
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

    pub fn glow(mut self, v: bool) -> Self {
        self.glow = v;
        self
    }

    pub fn glow_color(mut self, v: Color) -> Self {
        self.glow_color = v;
        self
    }

    pub fn charging(mut self, v: bool) -> Self {
        self.charging = v;
        self
    }

    pub fn show_percentage(mut self, v: bool) -> Self {
        self.show_percentage = v;
        self
    }

    pub fn motion(mut self, v: MotionProfile) -> Self {
        self.level.set_profile(v);
        self
    }

    /// With animation off, new values apply on the spot.
    pub fn animated(mut self, v: bool) -> Self {
        self.level.set_enabled(v);
        self
    }

    /// Starting level, shown without animating.
    pub fn initial(mut self, v: f32) -> Self {
        self.level.snap_to(v);
        self
    }

    /// Sets the target level (clamped to `[0, 100]`).
    ///
    /// Returns `true` when the visible level changed right away, which only
    /// happens with animation off.
    pub fn set_value(&mut self, v: f32) -> bool {
        self.level.set_target(v)
    }

    pub fn set_animated(&mut self, v: bool) -> bool {
        self.level.set_enabled(v)
    }

    pub fn set_charging(&mut self, v: bool) {
        self.charging = v;
    }

    /// Target level.
    #[inline]
    pub fn value(&self) -> f32 {
        self.level.target()
    }

    /// Level currently on screen.
    #[inline]
    pub fn current(&self) -> f32 {
        self.level.current()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.level.is_idle()
    }

    /// Fill color for the level currently on screen.
    pub fn level_color(&self) -> Color {
        let v = self.level.current();
        if v <= 20.0 {
            named::red()
        } else if v <= 50.0 {
            named::orange()
        } else {
            self.color
        }
    }

    /// Percentage text, e.g. `"42%"` or `"⚡42%"` while charging.
    pub fn label_text(&self) -> String {
        let prefix = if self.charging { "⚡" } else { "" };
        format!("{prefix}{}%", self.level.displayed())
    }

    /// Splits `rect` into the body and the terminal tip on its right.
    pub fn layout(rect: Rect) -> (Rect, Rect) {
        let body_w = rect.width() * 0.9;
        let tip_w = (rect.width() * 0.1 - 10.0).max(2.0).min(rect.width() - body_w);
        let body = Rect::new(rect.x(), rect.y(), body_w, rect.height());
        let tip = Rect::new(body.right(), rect.y() + rect.height() * 0.25, tip_w, rect.height() * 0.5);
        (body, tip)
    }

    fn outline(&self, rect: Rect, radius: i32) -> Path {
        match self.shape {
            BatteryShape::Rectangle => rect_outline(rect),
            BatteryShape::RoundedRectangle => build_rounded_outline(rect, CornerRadii::all(radius)),
            BatteryShape::Capsule => capsule_outline(rect),
        }
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Battery {
    fn paint(&self, painter: &mut Painter, rect: Rect, state: InteractionState) {
        let (body, tip) = Self::layout(rect);
        let current = self.level.current();

        if self.glow && current > 20.0 {
            let glow = RadialGradient::glow(body, self.glow_color.with_alpha8(100));
            painter.fill_halo(self.outline(body, self.corner_radius), Paint::Radial(glow));
        }

        if current > 0.0 {
            let inner = body.inset(FILL_MARGIN);
            let fill = Rect::new(inner.x(), inner.y(), inner.width() * current / 100.0, inner.height());
            let radius = (self.corner_radius - FILL_MARGIN as i32).max(0);
            let color = if state.enabled { self.level_color() } else { named::gainsboro() };
            painter.fill_content(self.outline(fill, radius), color);
        }

        painter.stroke_outline(
            self.outline(body, self.corner_radius),
            Stroke::new(self.outline_width, self.outline_color),
        );
        painter.fill_outline(rect_outline(tip), self.outline_color);

        if self.show_percentage {
            painter.label(self.label_text(), body.center(), self.font_size, self.text_color);
        }
    }

    fn tick(&mut self) -> bool {
        self.level.advance()
    }
}

#[cfg(test)]
mod tests {
    use bevel_engine::geometry::PathEl;
    use bevel_engine::scene::{DrawCmd, DrawList};

    use super::*;

    fn painted(b: &Battery) -> DrawList {
        let mut list = DrawList::new();
        b.paint(&mut Painter::new(&mut list), Rect::new(0.0, 0.0, 200.0, 60.0), InteractionState::default());
        list
    }

    // ── level ─────────────────────────────────────────────────────────────

    #[test]
    fn level_color_thresholds() {
        let at = |v: f32| Battery::new().initial(v).level_color();
        assert_eq!(at(20.0), named::red());
        assert_eq!(at(20.5), named::orange());
        assert_eq!(at(50.0), named::orange());
        assert_eq!(at(51.0), named::lime_green());
    }

    #[test]
    fn new_battery_starts_full_as_black_outlined_rectangle() {
        let b = Battery::new();
        assert_eq!((b.current(), b.value()), (100.0, 100.0));
        assert!(!b.is_animating());
        assert_eq!(b.level_color(), named::lime_green());

        let list = painted(&b);
        let outline = list
            .items()
            .iter()
            .find_map(|i| match &i.cmd {
                DrawCmd::Stroke(st) => Some(st),
                _ => None,
            })
            .unwrap();
        assert_eq!(outline.stroke.color, Color::BLACK);
        assert!(outline.path.elements().iter().all(|el| !matches!(el, PathEl::Arc(_))));
    }

    #[test]
    fn value_animates_one_unit_per_tick() {
        let mut b = Battery::new().initial(0.0);
        assert!(!b.set_value(3.0));
        assert!(b.tick());
        assert!(b.tick());
        assert!(b.tick());
        assert!(!b.tick());
        assert_eq!(b.current(), 3.0);
    }

    #[test]
    fn value_is_clamped() {
        let mut b = Battery::new();
        b.set_value(140.0);
        assert_eq!(b.value(), 100.0);
    }

    #[test]
    fn unanimated_value_snaps() {
        let mut b = Battery::new().animated(false);
        assert!(b.set_value(77.0));
        assert_eq!(b.current(), 77.0);
        assert!(!b.is_animating());
    }

    #[test]
    fn label_reflects_charging() {
        let b = Battery::new().initial(42.4).charging(true);
        assert_eq!(b.label_text(), "⚡42%");
        assert_eq!(Battery::new().initial(9.6).label_text(), "10%");
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn empty_battery_has_no_fill() {
        let list = painted(&Battery::new().initial(0.0));
        assert_eq!(list.summary(), vec![("stroke", 1), ("fill", 1), ("label", 1)]);
    }

    #[test]
    fn glow_only_above_twenty() {
        let low = painted(&Battery::new().glow(true).initial(20.0));
        assert!(!low.items().iter().any(|i| matches!(&i.cmd, DrawCmd::Fill(f) if matches!(f.paint, Paint::Radial(_)))));
        let high = painted(&Battery::new().glow(true).initial(80.0));
        assert!(high.items().iter().any(|i| matches!(&i.cmd, DrawCmd::Fill(f) if matches!(f.paint, Paint::Radial(_)))));
    }

    #[test]
    fn tip_sits_right_of_body() {
        let (body, tip) = Battery::layout(Rect::new(0.0, 0.0, 200.0, 60.0));
        assert_eq!(body.width(), 180.0);
        assert_eq!((tip.x(), tip.width()), (180.0, 10.0));
        assert_eq!((tip.y(), tip.height()), (15.0, 30.0));
    }

    #[test]
    fn fill_width_tracks_current_level() {
        let list = painted(&Battery::new().shape(BatteryShape::Rectangle).initial(50.0));
        let fill = list
            .items()
            .iter()
            .find_map(|i| match &i.cmd {
                DrawCmd::Fill(f) if f.paint == Paint::Solid(named::orange()) => Some(f),
                _ => None,
            })
            .unwrap();
        let b = fill.path.bounds().unwrap();
        assert!((b.width() - 88.0).abs() < 1e-4);
    }
}
