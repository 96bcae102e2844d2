use bevel_engine::coords::Rect;
use bevel_engine::geometry::{capsule_outline, circle_outline};
use bevel_engine::paint::{named, Color, LinearGradient, Paint};
use bevel_engine::select::ControlRole;
use bevel_engine::style::InteractionState;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// A pill-shaped on/off switch.
///
/// # Example
/// ```rust,ignore
/// Switch::new()
///     .checked(true)
///     .on_track(Color::from_rgb8(123, 104, 238))
///     .on_change(|v| log::info!("switch: {v}"))
/// ```
pub struct Switch {
    checked: bool,
    padding: f32,
    on_track: Color,
    off_track: Color,
    on_thumb: Color,
    off_thumb: Color,
    shadow: Color,
    /// Vertical fade instead of a flat track.
    gradient: bool,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl Switch {
    pub fn new() -> Self {
        Self {
            checked: false,
            padding: 2.0,
            on_track: named::medium_slate_blue(),
            off_track: named::gray(),
            on_thumb: named::white_smoke(),
            off_thumb: named::gainsboro(),
            shadow: Color::BLACK.with_alpha8(20),
            gradient: false,
            on_change: None,
        }
    }

    /// Initial state. Does not notify.
    pub fn checked(mut self, v: bool) -> Self {
        self.checked = v;
        self
    }

    pub fn padding(mut self, v: f32) -> Self {
        self.padding = v.max(0.0);
        self
    }

    pub fn on_track(mut self, v: Color) -> Self {
        self.on_track = v;
        self
    }

    pub fn off_track(mut self, v: Color) -> Self {
        self.off_track = v;
        self
    }

    pub fn on_thumb(mut self, v: Color) -> Self {
        self.on_thumb = v;
        self
    }

    pub fn off_thumb(mut self, v: Color) -> Self {
        self.off_thumb = v;
        self
    }

    pub fn gradient(mut self, v: bool) -> Self {
        self.gradient = v;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Thumb square: inset by `padding`, hugging the left edge when off and
    /// the right edge when on.
    pub fn thumb_rect(&self, rect: Rect) -> Rect {
        let size = (rect.height() - 2.0 * self.padding).min(rect.height() - 5.0).max(0.0);
        let x = if self.checked {
            rect.right() - size - self.padding
        } else {
            rect.x() + self.padding
        };
        Rect::new(x, rect.y() + self.padding, size, size)
    }
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Switch {
    fn paint(&self, painter: &mut Painter, rect: Rect, state: InteractionState) {
        let (track, thumb) = match (state.enabled, self.checked) {
            (false, _) => (named::gainsboro(), named::gray()),
            (true, true) => (self.on_track, self.on_thumb),
            (true, false) => (self.off_track, self.off_thumb),
        };

        let track_paint = if self.gradient {
            Paint::Linear(LinearGradient::vertical(rect, track, track.with_alpha8(50)))
        } else {
            Paint::Solid(track)
        };
        painter.fill_outline(capsule_outline(rect), track_paint);

        let thumb_rect = self.thumb_rect(rect);
        if state.hovered && state.enabled {
            painter.fill_content(circle_outline(thumb_rect), self.shadow);
        }
        painter.fill_content(circle_outline(thumb_rect), thumb);
    }

    fn on_event(&mut self, event: &UiEvent, _rect: Rect) -> EventResult {
        match event {
            UiEvent::HoverEnter | UiEvent::HoverLeave => EventResult::Consumed,
            UiEvent::Click { .. } => EventResult::Consumed,
        }
    }

    fn role(&self) -> ControlRole {
        ControlRole::Toggle
    }

    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) -> bool {
        if self.checked == checked {
            return false;
        }
        self.checked = checked;
        if let Some(f) = &mut self.on_change {
            f(checked);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use bevel_engine::scene::DrawList;
    use bevel_engine::select::handle_click;

    use super::*;
    use crate::tree::WidgetTree;

    #[test]
    fn thumb_moves_to_the_right_when_on() {
        let rect = Rect::new(0.0, 0.0, 60.0, 30.0);
        let off = Switch::new().thumb_rect(rect);
        let on = Switch::new().checked(true).thumb_rect(rect);
        assert_eq!((off.x(), off.width()), (2.0, 25.0));
        assert_eq!(on.right(), 58.0);
    }

    #[test]
    fn hover_adds_shadow() {
        let sw = Switch::new();
        let rect = Rect::new(0.0, 0.0, 60.0, 30.0);
        let mut calm = DrawList::new();
        sw.paint(&mut Painter::new(&mut calm), rect, InteractionState::default());
        let mut hot = DrawList::new();
        sw.paint(&mut Painter::new(&mut hot), rect, InteractionState::default().hovered(true));
        assert_eq!(hot.len(), calm.len() + 1);
    }

    #[test]
    fn click_through_tree_flips_and_notifies_once_each() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut tree = WidgetTree::new();
        let id = tree.insert(Switch::new().on_change(move |v| sink.borrow_mut().push(v)), Rect::new(0.0, 0.0, 60.0, 30.0));

        handle_click(&mut tree, id);
        handle_click(&mut tree, id);
        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!tree.get::<Switch>(id).unwrap().is_checked());
    }
}
