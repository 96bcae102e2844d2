/// Linear premultiplied RGBA color.
///
/// Invariant: `rgb` components are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Creates a premultiplied color from straight alpha components in `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Opaque color from 8-bit channels.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Straight-alpha 8-bit channels.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let f = |v: u8| v as f32 / 255.0;
        Self::from_straight(f(r), f(g), f(b), f(a))
    }

    /// Returns a straight-alpha `(r, g, b, a)` tuple. RGB is zero when `a == 0`.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Same hue with alpha replaced by `a8 / 255`.
    #[inline]
    pub fn with_alpha8(self, a8: u8) -> Self {
        let (r, g, b, _) = self.to_straight();
        Self::from_straight(r, g, b, a8 as f32 / 255.0)
    }

    /// Moves each straight channel `amount` towards white.
    #[inline]
    pub fn lighten(self, amount: f32) -> Self {
        let (r, g, b, a) = self.to_straight();
        let l = |c: f32| c + (1.0 - c) * amount.clamp(0.0, 1.0);
        Self::from_straight(l(r), l(g), l(b), a)
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

/// Named colors used by the default widget themes.
pub mod named {
    use super::Color;

    pub fn red() -> Color {
        Color::from_rgb8(255, 0, 0)
    }

    pub fn orange() -> Color {
        Color::from_rgb8(255, 165, 0)
    }

    pub fn yellow() -> Color {
        Color::from_rgb8(255, 255, 0)
    }

    pub fn lime_green() -> Color {
        Color::from_rgb8(50, 205, 50)
    }

    pub fn gray() -> Color {
        Color::from_rgb8(128, 128, 128)
    }

    pub fn gainsboro() -> Color {
        Color::from_rgb8(220, 220, 220)
    }

    pub fn white_smoke() -> Color {
        Color::from_rgb8(245, 245, 245)
    }

    pub fn medium_slate_blue() -> Color {
        Color::from_rgb8(123, 104, 238)
    }

    pub fn light_sky_blue() -> Color {
        Color::from_rgb8(135, 206, 250)
    }

    pub fn ring_gray() -> Color {
        Color::from_rgb8(240, 240, 240)
    }
}
