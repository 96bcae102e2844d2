use bevel_engine::coords::{CornerRadii, RadiiParseError, Rect};
use bevel_engine::select::ControlRole;
use bevel_engine::style::{resolve_colors, InteractionState, StylePalette};

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// A labelled button with per-corner radii and an inner border ring.
///
/// With [`ControlRole::Toggle`] or [`ControlRole::Radio`] it keeps a checked
/// flag; the scene's click handling flips it and `on_checked_changed` fires
/// on every real change.
///
/// # Example
/// ```rust,ignore
/// Button::new("Save")
///     .corner_radii(CornerRadii::new(12, 12, 0, 0))
///     .border_width(2.0)
///     .role(ControlRole::Radio)
///     .on_checked_changed(|on| log::info!("save mode: {on}"))
/// ```
pub struct Button {
    text: String,
    font_size: f32,
    role: ControlRole,
    checked: bool,
    palette: StylePalette,
    radii: CornerRadii,
    border_width: f32,
    on_click: Option<Box<dyn FnMut()>>,
    on_checked_changed: Option<Box<dyn FnMut(bool)>>,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 12.0,
            role: ControlRole::Normal,
            checked: false,
            palette: StylePalette::default(),
            radii: CornerRadii::all(10),
            border_width: 0.0,
            on_click: None,
            on_checked_changed: None,
        }
    }

    pub fn font_size(mut self, v: f32) -> Self {
        self.font_size = v;
        self
    }

    pub fn role(mut self, v: ControlRole) -> Self {
        self.role = v;
        self
    }

    pub fn palette(mut self, v: StylePalette) -> Self {
        self.palette = v;
        self
    }

    pub fn corner_radii(mut self, v: CornerRadii) -> Self {
        self.radii = v.normalized();
        self
    }

    pub fn border_width(mut self, v: f32) -> Self {
        self.border_width = v.max(0.0);
        self
    }

    /// Initial checked state. Does not notify.
    pub fn checked(mut self, v: bool) -> Self {
        self.checked = v;
        self
    }

    /// Radii from `"r"` or `"tl, tr, bl, br"`.
    pub fn corner_radii_str(self, s: &str) -> Result<Self, RadiiParseError> {
        Ok(self.corner_radii(s.parse()?))
    }

    /// Callback invoked after every click.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Callback invoked when the checked flag actually changes.
    pub fn on_checked_changed(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_checked_changed = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[inline]
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }
}

impl Widget for Button {
    fn paint(&self, painter: &mut Painter, rect: Rect, state: InteractionState) {
        let colors = resolve_colors(state, &self.palette);

        painter.fill_rounded(rect, self.radii, colors.background);
        painter.stroke_rounded(rect, self.radii, self.border_width, colors.border);
        painter.label(self.text.as_str(), rect.center(), self.font_size, colors.text);
    }

    fn on_event(&mut self, event: &UiEvent, _rect: Rect) -> EventResult {
        match event {
            UiEvent::Click { .. } => {
                if let Some(f) = &mut self.on_click {
                    f();
                }
                EventResult::Consumed
            }
            UiEvent::HoverEnter | UiEvent::HoverLeave => EventResult::Consumed,
        }
    }

    fn role(&self) -> ControlRole {
        self.role
    }

    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) -> bool {
        if self.checked == checked {
            return false;
        }
        self.checked = checked;
        if let Some(f) = &mut self.on_checked_changed {
            f(checked);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use bevel_engine::paint::Paint;
    use bevel_engine::scene::{DrawCmd, DrawList};

    use super::*;

    fn paint(b: &Button, state: InteractionState) -> DrawList {
        let mut list = DrawList::new();
        b.paint(&mut Painter::new(&mut list), Rect::new(0.0, 0.0, 120.0, 40.0), state);
        list
    }

    #[test]
    fn checked_callback_fires_only_on_change() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let mut b = Button::new("x").on_checked_changed(move |v| sink.borrow_mut().push(v));

        assert!(!b.set_checked(false));
        assert!(b.set_checked(true));
        assert!(!b.set_checked(true));
        assert!(b.set_checked(false));
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[test]
    fn toggled_palette_wins_over_hover() {
        let b = Button::new("x");
        let list = paint(&b, InteractionState::default().hovered(true).toggled(true));
        let DrawCmd::Fill(fill) = &list.items()[0].cmd else { panic!("expected fill") };
        assert_eq!(fill.paint, Paint::Solid(StylePalette::default().toggled.background));
    }

    #[test]
    fn border_is_drawn_only_with_width() {
        let plain = paint(&Button::new("x"), InteractionState::default());
        assert_eq!(plain.summary(), vec![("fill", 1), ("label", 1)]);

        let bordered = paint(&Button::new("x").border_width(2.0), InteractionState::default());
        assert_eq!(bordered.summary(), vec![("fill", 1), ("stroke", 1), ("label", 1)]);
    }

    #[test]
    fn radii_from_string() {
        let b = Button::new("x").corner_radii_str("4, 8, 0, 12").unwrap();
        assert_eq!(b.radii(), CornerRadii::new(4, 8, 0, 12));
        assert!(Button::new("x").corner_radii_str("1, 2").is_err());
    }

    #[test]
    fn click_runs_callback() {
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        let mut b = Button::new("x").on_click(move || *h.borrow_mut() += 1);
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(b.on_event(&UiEvent::Click { pos: r.center() }, r).is_consumed());
        assert_eq!(*hits.borrow(), 1);
    }
}
