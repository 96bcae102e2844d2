use super::{DrawCmd, SortKey, ZIndex};

/// A recorded command with its paint-order key.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Draw stream for one frame.
///
/// `push()` is O(1). Paint order is computed lazily and cached in an index
/// buffer that is reused across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded items, keeping capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in recording order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Records `cmd` on layer `z`.
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Items back-to-front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.sorted_indices.clear();
            self.sorted_indices.extend(0..self.items.len());
            let items = &self.items;
            self.sorted_indices.sort_by_key(|&i| items[i].key);
            self.sorted_dirty = false;
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    /// Count of each command kind, in first-seen order.
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        let mut out: Vec<(&'static str, usize)> = Vec::new();
        for item in &self.items {
            let kind = item.cmd.kind();
            match out.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, n)) => *n += 1,
                None => out.push((kind, 1)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect, Vec2};
    use crate::geometry::{build_rounded_outline, Path};
    use crate::paint::{Color, LinearGradient, Paint, RadialGradient, Stroke};

    fn outline() -> Path {
        build_rounded_outline(Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::all(2))
    }

    #[test]
    fn paint_order_is_layer_then_insertion() {
        let mut list = DrawList::new();
        list.push_label(ZIndex::CONTENT, "a", Vec2::zero(), 12.0, Color::BLACK);
        list.push_fill(ZIndex::SURFACE, outline(), Color::WHITE);
        list.push_stroke(ZIndex::BORDER, outline(), Stroke::new(1.0, Color::BLACK));
        list.push_fill(ZIndex::SURFACE, outline(), Color::BLACK);

        let kinds: Vec<_> = list.iter_in_paint_order().map(|i| (i.cmd.kind(), i.key.order)).collect();
        assert_eq!(kinds, vec![("fill", 1), ("fill", 3), ("stroke", 2), ("label", 0)]);
    }

    #[test]
    fn empty_geometry_and_invisible_paint_are_skipped() {
        let mut list = DrawList::new();
        assert!(!list.push_fill(ZIndex::SURFACE, Path::new(), Color::WHITE));
        assert!(!list.push_fill(ZIndex::SURFACE, outline(), Color::TRANSPARENT));
        assert!(!list.push_stroke(ZIndex::BORDER, outline(), Stroke::new(0.0, Color::BLACK)));
        assert!(!list.push_label(ZIndex::CONTENT, "", Vec2::zero(), 12.0, Color::BLACK));
        assert!(list.is_empty());
    }

    #[test]
    fn degenerate_gradients_are_skipped() {
        let mut list = DrawList::new();
        let flat = LinearGradient::vertical(Rect::new(0.0, 0.0, 10.0, 0.0), Color::BLACK, Color::WHITE);
        let dot = RadialGradient::new(Vec2::new(5.0, 5.0), 0.0, Color::BLACK, Color::TRANSPARENT);
        assert!(!list.push_fill(ZIndex::SURFACE, outline(), Paint::Linear(flat)));
        assert!(!list.push_fill(ZIndex::HALO, outline(), Paint::Radial(dot)));

        let glow = RadialGradient::glow(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert!(list.push_fill(ZIndex::HALO, outline(), Paint::Radial(glow)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn clear_resets_order() {
        let mut list = DrawList::new();
        list.push_fill(ZIndex::SURFACE, outline(), Color::WHITE);
        list.clear();
        list.push_fill(ZIndex::SURFACE, outline(), Color::WHITE);
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(list.summary(), vec![("fill", 1)]);
    }
}
