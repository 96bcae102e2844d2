/// Paint layer. Higher layers are drawn on top.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Glows and drop shadows behind a control.
    pub const HALO: ZIndex = ZIndex(-10);
    pub const SURFACE: ZIndex = ZIndex(0);
    pub const BORDER: ZIndex = ZIndex(10);
    /// Fill levels, thumbs, glyphs and labels.
    pub const CONTENT: ZIndex = ZIndex(20);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// Layer `by` steps above this one.
    #[inline]
    pub const fn raised(self, by: i32) -> Self {
        Self(self.0.saturating_add(by))
    }
}

/// Paint-order key: layer first, then recording order within a layer.
///
/// Field order matters for the derived `Ord`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
