use bevel_engine::coords::Vec2;

use crate::event::MouseButton;

/// Outer window position and size, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub position: Vec2,
    pub size: Vec2,
}

/// Instruction produced while dragging a borderless window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMove {
    pub position: Vec2,
    /// Resize to this first (leaving a maximized state).
    pub restore_size: Option<Vec2>,
}

/// Turns pointer presses and moves on a drag handle into window moves.
///
/// Pointer positions are local to the handle, so the window follows the
/// cursor by the offset from where the press started.
#[derive(Debug, Default, Clone)]
pub struct WindowDragger {
    anchor: Option<Vec2>,
    restore_size: Option<Vec2>,
}

impl WindowDragger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size to return to when a drag starts from a maximized window.
    pub fn set_restore_size(&mut self, size: Option<Vec2>) {
        self.restore_size = size;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn press(&mut self, local: Vec2, button: MouseButton) {
        if button == MouseButton::Primary {
            log::trace!("window drag anchored at {local:?}");
            self.anchor = Some(local);
        }
    }

    /// Pointer moved to `local`; returns where the window should go.
    ///
    /// Nothing happens unless a drag is active and the pointer has left
    /// the anchor point.
    pub fn moved(&mut self, local: Vec2, window: WindowGeometry) -> Option<WindowMove> {
        let anchor = self.anchor?;
        if local == anchor {
            return None;
        }
        let restore_size = self.restore_size.filter(|&s| s != window.size);
        Some(WindowMove { position: window.position + (local - anchor), restore_size })
    }

    pub fn release(&mut self, button: MouseButton) {
        if button == MouseButton::Primary {
            self.anchor = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(x: f32, y: f32) -> WindowGeometry {
        WindowGeometry { position: Vec2::new(x, y), size: Vec2::new(800.0, 600.0) }
    }

    #[test]
    fn moves_by_offset_from_anchor() {
        let mut d = WindowDragger::new();
        d.press(Vec2::new(10.0, 5.0), MouseButton::Primary);
        let mv = d.moved(Vec2::new(30.0, 0.0), window(100.0, 100.0)).unwrap();
        assert_eq!(mv.position, Vec2::new(120.0, 95.0));
        assert_eq!(mv.restore_size, None);
    }

    #[test]
    fn no_move_without_press_or_at_anchor() {
        let mut d = WindowDragger::new();
        assert!(d.moved(Vec2::new(3.0, 3.0), window(0.0, 0.0)).is_none());
        d.press(Vec2::new(3.0, 3.0), MouseButton::Secondary);
        assert!(!d.is_dragging());
        d.press(Vec2::new(3.0, 3.0), MouseButton::Primary);
        assert!(d.moved(Vec2::new(3.0, 3.0), window(0.0, 0.0)).is_none());
    }

    #[test]
    fn release_ends_drag() {
        let mut d = WindowDragger::new();
        d.press(Vec2::zero(), MouseButton::Primary);
        d.release(MouseButton::Primary);
        assert!(d.moved(Vec2::new(5.0, 5.0), window(0.0, 0.0)).is_none());
    }

    #[test]
    fn restores_pre_maximize_size_only_when_different() {
        let mut d = WindowDragger::new();
        d.set_restore_size(Some(Vec2::new(400.0, 300.0)));
        d.press(Vec2::zero(), MouseButton::Primary);
        let mv = d.moved(Vec2::new(1.0, 1.0), window(0.0, 0.0)).unwrap();
        assert_eq!(mv.restore_size, Some(Vec2::new(400.0, 300.0)));

        d.set_restore_size(Some(Vec2::new(800.0, 600.0)));
        let mv = d.moved(Vec2::new(2.0, 2.0), window(0.0, 0.0)).unwrap();
        assert_eq!(mv.restore_size, None);
    }

    #[test]
    fn window_tracks_cursor_with_window_local_positions() {
        let mut d = WindowDragger::new();
        let mut w = window(100.0, 100.0);
        let grab = Vec2::new(40.0, 10.0);
        d.press(grab, MouseButton::Primary);
        let start = w.position + grab;
        for step in 1..=3 {
            let screen = start + Vec2::new(step as f32 * 15.0, step as f32 * 5.0);
            let mv = d.moved(screen - w.position, w).unwrap();
            w.position = mv.position;
            assert_eq!(w.position + grab, screen);
        }
        assert_eq!(w.position, Vec2::new(145.0, 115.0));
    }
}
