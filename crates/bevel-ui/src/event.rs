use bevel_engine::coords::Vec2;

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// Input events delivered to a single widget by [`crate::scene::UiScene`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Cursor entered the widget's rect.
    HoverEnter,
    /// Cursor left the widget's rect.
    HoverLeave,
    /// Primary button pressed and released over the widget.
    ///
    /// Checked-state changes have already been applied when this arrives.
    Click { pos: Vec2 },
}

/// Result returned by [`crate::widget::Widget::on_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Handled; the widget wants a repaint.
    Consumed,
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
