use bevel_engine::coords::{Rect, Vec2};
use bevel_engine::geometry::{polyline, rect_outline, Path};
use bevel_engine::paint::{named, Color, Stroke};
use bevel_engine::style::InteractionState;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// Which window command a [`ControlBox`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlBoxKind {
    Close,
    Maximize,
    Minimize,
}

/// What a [`ControlBox`] click asks the host window to do.
///
/// A maximize box alternates between [`WindowCommand::Maximize`] and
/// [`WindowCommand::Restore`] on successive clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Close,
    Maximize,
    Restore,
    Minimize,
}

/// Gap between the two squares of the restore glyph, relative to glyph size.
const RESTORE_OFFSET: f32 = 0.15;

/// A window caption button drawing a close, maximize/restore or minimize glyph.
pub struct ControlBox {
    kind: ControlBoxKind,
    maximized: bool,
    icon_scale: f32,
    thickness: f32,
    icon_color: Color,
    normal_color: Color,
    hover_color: Color,
    on_click: Option<Box<dyn FnMut(WindowCommand)>>,
}

impl ControlBox {
    pub fn new(kind: ControlBoxKind) -> Self {
        Self {
            kind,
            maximized: false,
            icon_scale: 1.0,
            thickness: 1.0,
            icon_color: named::gray(),
            normal_color: Color::TRANSPARENT,
            hover_color: match kind {
                ControlBoxKind::Close => named::red(),
                _ => named::gainsboro(),
            },
            on_click: None,
        }
    }

    pub fn icon_color(mut self, v: Color) -> Self {
        self.icon_color = v;
        self
    }

    pub fn normal_color(mut self, v: Color) -> Self {
        self.normal_color = v;
        self
    }

    pub fn hover_color(mut self, v: Color) -> Self {
        self.hover_color = v;
        self
    }

    pub fn icon_scale(mut self, v: f32) -> Self {
        self.set_icon_scale(v);
        self
    }

    pub fn thickness(mut self, v: f32) -> Self {
        self.set_thickness(v);
        self
    }

    pub fn on_click(mut self, f: impl FnMut(WindowCommand) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Accepts scales in `[0.1, 2.0]`; anything else is ignored.
    pub fn set_icon_scale(&mut self, v: f32) -> bool {
        if (0.1..=2.0).contains(&v) {
            self.icon_scale = v;
            true
        } else {
            log::warn!("icon scale {v} outside [0.1, 2]; keeping {}", self.icon_scale);
            false
        }
    }

    /// Accepts thickness in `(0, 5]`; anything else is ignored.
    pub fn set_thickness(&mut self, v: f32) -> bool {
        if v > 0.0 && v <= 5.0 {
            self.thickness = v;
            true
        } else {
            log::warn!("icon thickness {v} outside (0, 5]; keeping {}", self.thickness);
            false
        }
    }

    /// Switches the maximize glyph between "maximize" and "restore".
    pub fn set_maximized(&mut self, v: bool) {
        self.maximized = v;
    }

    #[inline]
    pub fn kind(&self) -> ControlBoxKind {
        self.kind
    }

    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Command for a click in the current state. A maximize box flips its
    /// own state, so its glyph switches between maximize and restore.
    fn activate(&mut self) -> WindowCommand {
        match self.kind {
            ControlBoxKind::Close => WindowCommand::Close,
            ControlBoxKind::Minimize => WindowCommand::Minimize,
            ControlBoxKind::Maximize => {
                self.maximized = !self.maximized;
                if self.maximized { WindowCommand::Maximize } else { WindowCommand::Restore }
            }
        }
    }

    #[inline]
    pub fn icon_scale_value(&self) -> f32 {
        self.icon_scale
    }

    #[inline]
    pub fn thickness_value(&self) -> f32 {
        self.thickness
    }

    /// Glyph strokes for `rect`.
    pub fn glyph(&self, rect: Rect) -> Vec<Path> {
        let size = rect.min_side();
        let padding = size / 4.0 / self.icon_scale;
        let span = (rect.width() - 2.0 * padding).max(0.0);
        let c = rect.center();

        match self.kind {
            ControlBoxKind::Close => {
                let h = span * 0.5 * self.icon_scale;
                vec![
                    polyline(&[Vec2::new(c.x - h, c.y - h), Vec2::new(c.x + h, c.y + h)]),
                    polyline(&[Vec2::new(c.x + h, c.y - h), Vec2::new(c.x - h, c.y + h)]),
                ]
            }
            ControlBoxKind::Maximize => {
                let x = rect.x() + (rect.width() - span) * 0.5;
                let y = rect.y() + (rect.height() - span) * 0.5;
                if self.maximized {
                    let off = span * RESTORE_OFFSET;
                    let side = span - off;
                    vec![
                        rect_outline(Rect::new(x, y, side, side)),
                        rect_outline(Rect::new(x + off, y + off, side, side)),
                    ]
                } else {
                    vec![rect_outline(Rect::new(x, y, span, span))]
                }
            }
            ControlBoxKind::Minimize => {
                let w = span * self.icon_scale;
                let x = rect.x() + (rect.width() - w) * 0.5;
                vec![polyline(&[Vec2::new(x, c.y), Vec2::new(x + w, c.y)])]
            }
        }
    }
}

impl Widget for ControlBox {
    fn paint(&self, painter: &mut Painter, rect: Rect, state: InteractionState) {
        let bg = if state.hovered && state.enabled { self.hover_color } else { self.normal_color };
        painter.fill_outline(rect_outline(rect), bg);

        let stroke = Stroke::round(self.thickness, self.icon_color);
        for path in self.glyph(rect) {
            painter.stroke_content(path, stroke);
        }
    }

    fn on_event(&mut self, event: &UiEvent, _rect: Rect) -> EventResult {
        match event {
            UiEvent::Click { .. } => {
                let command = self.activate();
                log::debug!("{:?} box -> {command:?}", self.kind);
                if let Some(f) = &mut self.on_click {
                    f(command);
                }
                EventResult::Consumed
            }
            UiEvent::HoverEnter | UiEvent::HoverLeave => EventResult::Consumed,
        }
    }
}
