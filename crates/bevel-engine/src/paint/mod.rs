//! Paint model shared between widgets and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, linear and radial gradients)
//! - strokes

pub mod color;
pub mod gradient;

pub use color::{named, Color};
pub use gradient::{LinearGradient, RadialGradient};

/// Paint source for filling geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    /// `true` when filling with this paint cannot change any pixel.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_transparent(),
            Paint::Linear(g) => g.from.is_transparent() && g.to.is_transparent(),
            Paint::Radial(g) => g.inner.is_transparent() && g.outer.is_transparent(),
        }
    }

    /// Finite, non-degenerate and able to change a pixel.
    pub fn is_drawable(&self) -> bool {
        let valid = match self {
            Paint::Solid(c) => c.is_finite(),
            Paint::Linear(g) => g.is_valid(),
            Paint::Radial(g) => g.is_valid(),
        };
        valid && !self.is_invisible()
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

/// Stroke drawn centred on a path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    /// Round caps and joins; square otherwise.
    pub round: bool,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color, round: false }
    }

    #[inline]
    pub fn round(width: f32, color: Color) -> Self {
        Self { width, color, round: true }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && !self.color.is_transparent()
    }
}
