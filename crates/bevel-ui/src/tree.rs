use bevel_engine::coords::{Rect, Vec2};
use bevel_engine::paint::Color;
use bevel_engine::select::{ControlRole, ControlTree};
use bevel_engine::style::InteractionState;
use slotmap::{new_key_type, SlotMap};

use crate::widget::{Element, Widget};

new_key_type! {
    /// Stable handle to a node in a [`WidgetTree`]. Invalid once the node is removed.
    pub struct WidgetId;
}

/// Structural errors from [`WidgetTree`] edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    UnknownWidget(WidgetId),
    /// Re-parenting would make a node its own ancestor.
    Cycle { node: WidgetId, parent: WidgetId },
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::UnknownWidget(id) => write!(f, "unknown widget {id:?}"),
            TreeError::Cycle { node, parent } => {
                write!(f, "cannot move {node:?} under its descendant {parent:?}")
            }
        }
    }
}

impl std::error::Error for TreeError {}

struct Node {
    element: Element,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
    rect: Rect,
    enabled: bool,
    hovered: bool,
}

/// Arena of widgets with parent/child links and absolute rects.
///
/// Child order is insertion order; it defines radio-group sibling order and
/// paint order (later siblings on top).
#[derive(Default)]
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, Node>,
    roots: Vec<WidgetId>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level widget.
    pub fn insert(&mut self, widget: impl Into<Element>, rect: Rect) -> WidgetId {
        let id = self.nodes.insert(Node::new(widget.into(), None, rect));
        self.roots.push(id);
        id
    }

    /// Adds `widget` as the last child of `parent`.
    pub fn insert_child(
        &mut self,
        parent: WidgetId,
        widget: impl Into<Element>,
        rect: Rect,
    ) -> Result<WidgetId, TreeError> {
        if !self.nodes.contains_key(parent) {
            return Err(TreeError::UnknownWidget(parent));
        }
        let id = self.nodes.insert(Node::new(widget.into(), Some(parent), rect));
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(id);
        }
        Ok(id)
    }

    /// Removes `id` and its whole subtree.
    pub fn remove(&mut self, id: WidgetId) -> Result<(), TreeError> {
        let parent = self.node(id)?.parent;
        self.unlink(id, parent);
        for victim in self.subtree(id) {
            self.nodes.remove(victim);
        }
        Ok(())
    }

    /// Moves `id` under `new_parent` (or to the top level), appended last.
    pub fn set_parent(&mut self, id: WidgetId, new_parent: Option<WidgetId>) -> Result<(), TreeError> {
        let old_parent = self.node(id)?.parent;
        if let Some(p) = new_parent {
            self.node(p)?;
            if self.ancestors_inclusive(p).contains(&id) {
                return Err(TreeError::Cycle { node: id, parent: p });
            }
        }

        self.unlink(id, old_parent);
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = new_parent;
        }
        match new_parent {
            Some(p) => {
                if let Some(pn) = self.nodes.get_mut(p) {
                    pn.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        Ok(())
    }

    fn unlink(&mut self, id: WidgetId, parent: Option<WidgetId>) {
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(pn) => pn.children.retain(|&c| c != id),
            None => self.roots.retain(|&r| r != id),
        }
    }

    fn node(&self, id: WidgetId) -> Result<&Node, TreeError> {
        self.nodes.get(id).ok_or(TreeError::UnknownWidget(id))
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    pub fn parent_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    pub fn children_of(&self, id: WidgetId) -> &[WidgetId] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn rect(&self, id: WidgetId) -> Option<Rect> {
        self.nodes.get(id).map(|n| n.rect)
    }

    pub fn set_rect(&mut self, id: WidgetId, rect: Rect) {
        if let Some(n) = self.nodes.get_mut(id) {
            n.rect = rect;
        }
    }

    /// `id` followed by its parent, grandparent and so on.
    pub fn ancestors_inclusive(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut cur = self.nodes.contains_key(id).then_some(id);
        while let Some(c) = cur {
            out.push(c);
            cur = self.parent_of(c);
        }
        out
    }

    /// Depth below the top level (roots are 0).
    pub fn depth(&self, id: WidgetId) -> usize {
        self.ancestors_inclusive(id).len().saturating_sub(1)
    }

    /// `id` and every descendant, parents before children.
    pub fn subtree(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            let Some(node) = self.nodes.get(cur) else { continue };
            out.push(cur);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Every node in paint order: each root's subtree, depth first.
    pub fn paint_order(&self) -> Vec<WidgetId> {
        self.roots.iter().flat_map(|&r| self.subtree(r)).collect()
    }

    // ── widget access ─────────────────────────────────────────────────────

    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.nodes.get(id).map(|n| n.element.widget())
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        self.nodes.get_mut(id).map(|n| n.element.widget_mut())
    }

    /// Typed access to a widget.
    pub fn get<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        self.nodes.get(id).and_then(|n| n.element.downcast_ref())
    }

    pub fn get_mut<W: Widget>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.nodes.get_mut(id).and_then(|n| n.element.downcast_mut())
    }

    // ── interaction state ─────────────────────────────────────────────────

    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) {
        if let Some(n) = self.nodes.get_mut(id) {
            n.enabled = enabled;
        }
    }

    /// Enabled itself and through every ancestor.
    pub fn is_effectively_enabled(&self, id: WidgetId) -> bool {
        let chain = self.ancestors_inclusive(id);
        !chain.is_empty() && chain.iter().all(|&a| self.nodes.get(a).is_some_and(|n| n.enabled))
    }

    pub fn set_hovered(&mut self, id: WidgetId, hovered: bool) -> bool {
        match self.nodes.get_mut(id) {
            Some(n) if n.hovered != hovered => {
                n.hovered = hovered;
                true
            }
            _ => false,
        }
    }

    pub fn is_hovered(&self, id: WidgetId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.hovered)
    }

    /// State handed to [`Widget::paint`] for `id`.
    pub fn interaction_state(&self, id: WidgetId) -> InteractionState {
        InteractionState {
            enabled: self.is_effectively_enabled(id),
            hovered: self.is_hovered(id),
            toggled: self.widget(id).is_some_and(|w| w.is_checked()),
        }
    }

    /// Background showing through behind `id`: the first opaque background
    /// among its ancestors, or `fallback` when none has one.
    pub fn effective_background(&self, id: WidgetId, fallback: Color) -> Color {
        self.ancestors_inclusive(id)
            .into_iter()
            .skip(1)
            .filter_map(|a| self.widget(a).and_then(|w| w.background()))
            .find(|c| !c.is_transparent())
            .unwrap_or(fallback)
    }

    /// Deepest enabled widget whose rect contains `pos`. Later siblings win.
    pub fn hit_test(&self, pos: Vec2) -> Option<WidgetId> {
        self.paint_order()
            .into_iter()
            .rev()
            .find(|&id| {
                self.nodes.get(id).is_some_and(|n| n.rect.contains(pos))
                    && self.is_effectively_enabled(id)
            })
    }
}

impl Node {
    fn new(element: Element, parent: Option<WidgetId>, rect: Rect) -> Self {
        Self { element, parent, children: Vec::new(), rect, enabled: true, hovered: false }
    }
}

impl ControlTree for WidgetTree {
    type Id = WidgetId;

    fn role(&self, id: WidgetId) -> ControlRole {
        self.widget(id).map(|w| w.role()).unwrap_or_default()
    }

    fn is_checked(&self, id: WidgetId) -> bool {
        self.widget(id).is_some_and(|w| w.is_checked())
    }

    fn set_checked(&mut self, id: WidgetId, checked: bool) -> bool {
        self.widget_mut(id).is_some_and(|w| w.set_checked(checked))
    }

    fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent_of(id)
    }

    fn children(&self, id: WidgetId) -> Vec<WidgetId> {
        self.children_of(id).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevel_engine::select::handle_click;

    use crate::painter::Painter;

    /// Minimal checkable widget.
    struct Probe {
        role: ControlRole,
        checked: bool,
        bg: Option<Color>,
    }

    impl Probe {
        fn radio() -> Self {
            Self { role: ControlRole::Radio, checked: false, bg: None }
        }

        fn plain(bg: Option<Color>) -> Self {
            Self { role: ControlRole::Normal, checked: false, bg }
        }
    }

    impl Widget for Probe {
        fn paint(&self, _: &mut Painter, _: Rect, _: InteractionState) {}

        fn role(&self) -> ControlRole {
            self.role
        }

        fn is_checked(&self) -> bool {
            self.checked
        }

        fn set_checked(&mut self, c: bool) -> bool {
            let changed = self.checked != c;
            self.checked = c;
            changed
        }

        fn background(&self) -> Option<Color> {
            self.bg
        }
    }

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── structure ─────────────────────────────────────────────────────────

    #[test]
    fn insert_child_into_missing_parent_fails() {
        let mut t = WidgetTree::new();
        let p = t.insert(Probe::plain(None), r(0.0, 0.0, 10.0, 10.0));
        t.remove(p).unwrap();
        assert_eq!(
            t.insert_child(p, Probe::radio(), r(0.0, 0.0, 1.0, 1.0)),
            Err(TreeError::UnknownWidget(p))
        );
    }

    #[test]
    fn remove_drops_subtree() {
        let mut t = WidgetTree::new();
        let root = t.insert(Probe::plain(None), r(0.0, 0.0, 100.0, 100.0));
        let panel = t.insert_child(root, Probe::plain(None), r(0.0, 0.0, 50.0, 50.0)).unwrap();
        let leaf = t.insert_child(panel, Probe::radio(), r(0.0, 0.0, 5.0, 5.0)).unwrap();
        t.remove(panel).unwrap();
        assert!(!t.contains(leaf));
        assert!(t.children_of(root).is_empty());
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn set_parent_rejects_cycles() {
        let mut t = WidgetTree::new();
        let a = t.insert(Probe::plain(None), r(0.0, 0.0, 10.0, 10.0));
        let b = t.insert_child(a, Probe::plain(None), r(0.0, 0.0, 5.0, 5.0)).unwrap();
        assert_eq!(t.set_parent(a, Some(b)), Err(TreeError::Cycle { node: a, parent: b }));
        t.set_parent(b, None).unwrap();
        assert_eq!(t.roots(), &[a, b]);
        assert_eq!(t.depth(b), 0);
    }

    // ── selection through the tree ────────────────────────────────────────

    #[test]
    fn radio_group_is_scoped_to_parent() {
        let mut t = WidgetTree::new();
        let root = t.insert(Probe::plain(None), r(0.0, 0.0, 200.0, 100.0));
        let left = t.insert_child(root, Probe::plain(None), r(0.0, 0.0, 100.0, 100.0)).unwrap();
        let right = t.insert_child(root, Probe::plain(None), r(100.0, 0.0, 100.0, 100.0)).unwrap();
        let a = t.insert_child(left, Probe::radio(), r(0.0, 0.0, 10.0, 10.0)).unwrap();
        let b = t.insert_child(left, Probe::radio(), r(0.0, 20.0, 10.0, 10.0)).unwrap();
        let c = t.insert_child(right, Probe::radio(), r(100.0, 0.0, 10.0, 10.0)).unwrap();

        handle_click(&mut t, a);
        handle_click(&mut t, c);
        handle_click(&mut t, b);
        assert!(!t.is_checked(a));
        assert!(t.is_checked(b));
        assert!(t.is_checked(c));
    }

    // ── backgrounds, hit testing ──────────────────────────────────────────

    #[test]
    fn effective_background_skips_transparent_ancestors() {
        let mut t = WidgetTree::new();
        let gray = Color::from_rgb8(40, 40, 40);
        let root = t.insert(Probe::plain(Some(gray)), r(0.0, 0.0, 100.0, 100.0));
        let glass = t.insert_child(root, Probe::plain(Some(Color::TRANSPARENT)), r(0.0, 0.0, 50.0, 50.0)).unwrap();
        let pic = t.insert_child(glass, Probe::plain(None), r(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(t.effective_background(pic, Color::WHITE), gray);
        assert_eq!(t.effective_background(root, Color::WHITE), Color::WHITE);
    }

    #[test]
    fn hit_test_prefers_deepest_enabled() {
        let mut t = WidgetTree::new();
        let root = t.insert(Probe::plain(None), r(0.0, 0.0, 100.0, 100.0));
        let btn = t.insert_child(root, Probe::radio(), r(10.0, 10.0, 20.0, 20.0)).unwrap();
        assert_eq!(t.hit_test(Vec2::new(15.0, 15.0)), Some(btn));
        assert_eq!(t.hit_test(Vec2::new(50.0, 50.0)), Some(root));

        t.set_enabled(btn, false);
        assert_eq!(t.hit_test(Vec2::new(15.0, 15.0)), Some(root));
        t.set_enabled(root, false);
        assert_eq!(t.hit_test(Vec2::new(15.0, 15.0)), None);
        assert!(!t.interaction_state(btn).enabled);
    }

    #[test]
    fn set_rect_moves_the_hit_area() {
        let mut t = WidgetTree::new();
        let root = t.insert(Probe::plain(None), r(0.0, 0.0, 100.0, 100.0));
        let btn = t.insert_child(root, Probe::radio(), r(10.0, 10.0, 20.0, 20.0)).unwrap();
        t.set_rect(btn, r(60.0, 60.0, 20.0, 20.0));
        assert_eq!(t.rect(btn), Some(r(60.0, 60.0, 20.0, 20.0)));
        assert_eq!(t.hit_test(Vec2::new(15.0, 15.0)), Some(root));
        assert_eq!(t.hit_test(Vec2::new(65.0, 65.0)), Some(btn));
    }
}
