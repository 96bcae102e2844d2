use crate::coords::{Rect, Vec2};

use super::Color;

/// Two-stop linear gradient in logical pixel space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub from: Color,
    pub to: Color,
}

impl LinearGradient {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self { start, end, from, to }
    }

    /// Top-to-bottom gradient across `rect`.
    #[inline]
    pub fn vertical(rect: Rect, from: Color, to: Color) -> Self {
        Self::new(
            Vec2::new(rect.x(), rect.y()),
            Vec2::new(rect.x(), rect.bottom()),
            from,
            to,
        )
    }

    /// Structurally usable: finite and with a non-degenerate axis.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.from.is_finite()
            && self.to.is_finite()
            && self.start != self.end
    }
}

/// Radial falloff from `center` (color `inner`) to `radius` (color `outer`).
///
/// Used for glow halos that fade to transparent at the edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub inner: Color,
    pub outer: Color,
}

impl RadialGradient {
    #[inline]
    pub fn new(center: Vec2, radius: f32, inner: Color, outer: Color) -> Self {
        Self { center, radius, inner, outer }
    }

    /// Glow that covers `rect`, fading from `inner` to fully transparent.
    #[inline]
    pub fn glow(rect: Rect, inner: Color) -> Self {
        let half = rect.size * 0.5;
        Self::new(rect.center(), half.length(), inner, inner.with_alpha8(0))
    }

    pub fn is_valid(&self) -> bool {
        self.center.is_finite() && self.radius > 0.0 && self.inner.is_finite() && self.outer.is_finite()
    }
}
