use std::fmt;
use std::str::FromStr;

use super::Rect;

/// Per-corner radii for a rounded outline, in whole logical pixels.
///
/// Field order follows the style-sheet form `"tl, tr, bl, br"` accepted by
/// [`FromStr`]. Outlines are *emitted* in a different order (top-left,
/// top-right, bottom-right, bottom-left), see [`CornerRadii::clamp_for`].
///
/// Negative values are legal and behave as square corners.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CornerRadii {
    pub top_left: i32,
    pub top_right: i32,
    pub bottom_left: i32,
    pub bottom_right: i32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: i32, top_right: i32, bottom_left: i32, bottom_right: i32) -> Self {
        Self { top_left, top_right, bottom_left, bottom_right }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: i32) -> Self {
        Self { top_left: r, top_right: r, bottom_left: r, bottom_right: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0)
    }

    /// Every radius clamped to `>= 0`.
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            top_left: self.top_left.max(0),
            top_right: self.top_right.max(0),
            bottom_left: self.bottom_left.max(0),
            bottom_right: self.bottom_right.max(0),
        }
    }

    /// Radii for a ring drawn `by` pixels inside the outline; saturates at 0.
    #[inline]
    pub fn shrink(self, by: i32) -> Self {
        let n = self.normalized();
        let s = |r: i32| r.saturating_sub(by).max(0);
        Self {
            top_left: s(n.top_left),
            top_right: s(n.top_right),
            bottom_left: s(n.bottom_left),
            bottom_right: s(n.bottom_right),
        }
    }

    /// Effective radii for `rect`, in outline emission order:
    /// `[top_left, top_right, bottom_right, bottom_left]`.
    ///
    /// Each radius is clamped to `[0, min(width, height) / 2]` so adjacent arcs
    /// never overlap. An empty rect yields all zeros.
    pub fn clamp_for(self, rect: Rect) -> [f32; 4] {
        let limit = if rect.is_empty() { 0.0 } else { rect.min_side() * 0.5 };
        let c = |r: i32| (r.max(0) as f32).min(limit);
        [
            c(self.top_left),
            c(self.top_right),
            c(self.bottom_right),
            c(self.bottom_left),
        ]
    }
}

impl fmt::Display for CornerRadii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.top_left, self.top_right, self.bottom_left, self.bottom_right
        )
    }
}

// ── parsing ───────────────────────────────────────────────────────────────

/// Error returned when a radius string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadiiParseError {
    /// The string had a component count other than 1 or 4.
    Arity(usize),
    /// A component was not an integer.
    Number(String),
}

impl fmt::Display for RadiiParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadiiParseError::Arity(n) => {
                write!(f, "corner radii need 1 or 4 comma-separated values, got {n}")
            }
            RadiiParseError::Number(s) => write!(f, "corner radius {s:?} is not an integer"),
        }
    }
}

impl std::error::Error for RadiiParseError {}

impl FromStr for CornerRadii {
    type Err = RadiiParseError;

    /// Accepts `"r"` (uniform) or `"tl, tr, bl, br"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let num = |p: &str| p.parse::<i32>().map_err(|_| RadiiParseError::Number(p.to_string()));
        match parts.as_slice() {
            [r] => Ok(Self::all(num(r)?)),
            [tl, tr, bl, br] => Ok(Self::new(num(tl)?, num(tr)?, num(bl)?, num(br)?)),
            other => Err(RadiiParseError::Arity(other.len())),
        }
    }
}
