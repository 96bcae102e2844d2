use std::time::{Duration, Instant};

use bevel_engine::coords::{Rect, Vec2};
use bevel_engine::paint::Color;
use bevel_engine::scene::DrawList;
use bevel_engine::select::{handle_click, CheckedChanged};
use bevel_engine::time::{RedrawQueue, RedrawSender, Ticker, TickerConfig};

use crate::event::{MouseButton, UiEvent};
use crate::painter::Painter;
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Element;

/// Owns a widget tree plus the machinery that drives it.
///
/// Input, ticks and painting all run on the caller's thread:
///
/// ```rust,ignore
/// let mut ui = UiScene::new(TickerConfig::default());
/// let panel = ui.tree_mut().insert(Panel::new(), Rect::new(0.0, 0.0, 300.0, 200.0));
/// ui.start();
///
/// // event loop
/// ui.pointer_moved(cursor);
/// if released { ui.click(cursor, MouseButton::Primary); }
/// ui.advance(frame_dt);
/// if ui.needs_redraw() {
///     let list = ui.paint();
///     // hand `list` to a rasterizer
/// }
/// ```
pub struct UiScene {
    tree: WidgetTree,
    ticker: Ticker,
    redraw: RedrawQueue<WidgetId>,
    draw_list: DrawList,
    hovered: Option<WidgetId>,
    clear_color: Color,
}

impl UiScene {
    pub fn new(ticker: TickerConfig) -> Self {
        Self {
            tree: WidgetTree::new(),
            ticker: Ticker::new(ticker),
            redraw: RedrawQueue::new(),
            draw_list: DrawList::new(),
            hovered: None,
            clear_color: Color::WHITE,
        }
    }

    /// Color behind the top-level widgets.
    pub fn clear_color(mut self, v: Color) -> Self {
        self.clear_color = v;
        self
    }

    #[inline]
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    #[inline]
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    /// Handle for posting redraw requests from outside the scene.
    pub fn redraw_sender(&self) -> RedrawSender<WidgetId> {
        self.redraw.sender()
    }

    pub fn request_redraw(&self, id: WidgetId) {
        self.redraw.request(id);
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        !self.redraw.is_empty()
    }

    /// Adds a top-level widget and schedules its first paint.
    pub fn insert(&mut self, widget: impl Into<Element>, rect: Rect) -> WidgetId {
        let id = self.tree.insert(widget, rect);
        self.redraw.request(id);
        id
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Starts animation ticks.
    pub fn start(&mut self) {
        self.ticker.start();
    }

    /// Stops animation ticks; animations freeze where they are.
    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    #[inline]
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Updates hover state for a cursor at `pos` and returns the hovered widget.
    pub fn pointer_moved(&mut self, pos: Vec2) -> Option<WidgetId> {
        let hit = self.tree.hit_test(pos);
        if hit == self.hovered {
            return hit;
        }
        if let Some(old) = self.hovered.take() {
            self.tree.set_hovered(old, false);
            self.dispatch(old, &UiEvent::HoverLeave);
            self.redraw.request(old);
        }
        if let Some(new) = hit {
            self.tree.set_hovered(new, true);
            self.dispatch(new, &UiEvent::HoverEnter);
            self.redraw.request(new);
        }
        self.hovered = hit;
        hit
    }

    /// Cursor left the surface entirely.
    pub fn pointer_left(&mut self) {
        if let Some(old) = self.hovered.take() {
            self.tree.set_hovered(old, false);
            self.dispatch(old, &UiEvent::HoverLeave);
            self.redraw.request(old);
        }
    }

    /// Routes a completed click at `pos`.
    ///
    /// The deepest enabled widget under the cursor receives it. Checked
    /// state is resolved first (toggle flip, radio exclusivity), then the
    /// widget sees [`UiEvent::Click`]. Returns the checked-state flips.
    pub fn click(&mut self, pos: Vec2, button: MouseButton) -> Vec<CheckedChanged<WidgetId>> {
        if button != MouseButton::Primary {
            return Vec::new();
        }
        let Some(id) = self.tree.hit_test(pos) else {
            log::trace!("click at {pos:?} hit nothing");
            return Vec::new();
        };

        let changes = handle_click(&mut self.tree, id);
        for change in &changes {
            self.redraw.request(change.id);
        }
        if self.dispatch(id, &UiEvent::Click { pos }) {
            self.redraw.request(id);
        }
        changes
    }

    fn dispatch(&mut self, id: WidgetId, event: &UiEvent) -> bool {
        let Some(rect) = self.tree.rect(id) else { return false };
        self.tree
            .widget_mut(id)
            .is_some_and(|w| w.on_event(event, rect).is_consumed())
    }

    // ── time ──────────────────────────────────────────────────────────────

    /// Accounts `elapsed` and runs any ticks that fell due. Returns the tick count.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let due = self.ticker.advance(elapsed);
        for _ in 0..due {
            self.tick_all();
        }
        due
    }

    /// Wall-clock variant of [`advance`](Self::advance).
    pub fn poll(&mut self, now: Instant) -> u32 {
        let due = self.ticker.poll(now);
        for _ in 0..due {
            self.tick_all();
        }
        due
    }

    fn tick_all(&mut self) {
        for id in self.tree.paint_order() {
            if self.tree.widget_mut(id).is_some_and(|w| w.tick()) {
                self.redraw.request(id);
            }
        }
    }

    // ── paint ─────────────────────────────────────────────────────────────

    /// Widgets that asked for a repaint since the last call, deduplicated.
    pub fn take_dirty(&mut self) -> Vec<WidgetId> {
        self.redraw.drain()
    }

    /// Repaints the whole tree and clears pending redraw requests.
    pub fn paint(&mut self) -> &mut DrawList {
        let dirty = self.redraw.drain();
        log::trace!("painting {} node(s), {} dirty", self.tree.len(), dirty.len());

        self.draw_list.clear();
        let mut painter = Painter::new(&mut self.draw_list);
        for id in self.tree.paint_order() {
            let (Some(widget), Some(rect)) = (self.tree.widget(id), self.tree.rect(id)) else {
                continue;
            };
            painter.set_depth(self.tree.depth(id));
            painter.set_backdrop(self.tree.effective_background(id, self.clear_color));
            widget.paint(&mut painter, rect, self.tree.interaction_state(id));
        }
        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new(TickerConfig::default())
    }
}
