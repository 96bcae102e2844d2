use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Width and height may be fractional. Zero or negative sizes are legal
/// values; geometry built from them is empty.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    /// Length of the shorter side (negative sizes count as zero).
    #[inline]
    pub fn min_side(self) -> f32 {
        self.size.x.min(self.size.y).max(0.0)
    }

    #[inline]
    pub fn area(self) -> f32 {
        if self.is_empty() { 0.0 } else { self.size.x * self.size.y }
    }

    /// `true` when the rectangle has no drawable area (including NaN sizes).
    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Shrinks every side by `d` (grows when `d` is negative).
    ///
    /// The size saturates at zero; the origin still moves so the result stays
    /// centred on the original rectangle.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        Rect::new(
            self.origin.x + d,
            self.origin.y + d,
            (self.size.x - 2.0 * d).max(0.0),
            (self.size.y - 2.0 * d).max(0.0),
        )
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < self.right() && p.y < self.bottom()
    }

    /// Square of side `min_side()` centred inside this rectangle.
    #[inline]
    pub fn centered_square(self) -> Self {
        let side = self.min_side();
        let c = self.center();
        Rect::new(c.x - side * 0.5, c.y - side * 0.5, side, side)
    }
}
