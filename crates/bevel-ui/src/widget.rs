use std::any::Any;

use bevel_engine::coords::Rect;
use bevel_engine::paint::Color;
use bevel_engine::select::ControlRole;
use bevel_engine::style::InteractionState;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The trait every control implements.
///
/// Widgets don't own children or positions; [`crate::tree::WidgetTree`] does.
/// A widget only paints itself into the rect it is given and keeps its own
/// state (checked flag, animated values, callbacks).
///
/// ```rust,ignore
/// use bevel_ui::prelude::*;
///
/// struct Dot(Color);
///
/// impl Widget for Dot {
///     fn paint(&self, painter: &mut Painter, rect: Rect, _state: InteractionState) {
///         painter.fill_outline(circle_outline(rect), self.0);
///     }
/// }
/// ```
pub trait Widget: AsAny {
    /// Draws into `rect` given the current interaction state.
    fn paint(&self, painter: &mut Painter, rect: Rect, state: InteractionState);

    /// Handles an input event routed to this widget.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }

    /// Advances animations by one tick. Returns `true` if a repaint is needed.
    fn tick(&mut self) -> bool {
        false
    }

    /// Selection behaviour used by the click coordinator.
    fn role(&self) -> ControlRole {
        ControlRole::Normal
    }

    fn is_checked(&self) -> bool {
        false
    }

    /// Stores `checked`; returns `true` (and notifies listeners) only when
    /// the value actually changed.
    fn set_checked(&mut self, _checked: bool) -> bool {
        false
    }

    /// Opaque fill this widget paints behind its children, if any.
    fn background(&self) -> Option<Color> {
        None
    }
}

/// Downcasting support for boxed widgets.
pub trait AsAny: 'static {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget, as stored in the tree.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn widget(&self) -> &dyn Widget {
        self.0.as_ref()
    }

    #[inline]
    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        self.0.as_mut()
    }

    pub fn downcast_ref<W: Widget>(&self) -> Option<&W> {
        self.0.as_ref().as_any().downcast_ref::<W>()
    }

    pub fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        self.0.as_mut().as_any_mut().downcast_mut::<W>()
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}

impl core::fmt::Debug for Element {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Element").field("role", &self.0.role()).finish_non_exhaustive()
    }
}
