use bevel_engine::coords::{CornerRadii, Rect, Vec2};
use bevel_engine::geometry::{build_rounded_outline, Path};
use bevel_engine::paint::{Color, Paint, Stroke};
use bevel_engine::scene::{DrawList, ImageHandle, ZIndex};

/// Layers per tree level; a widget's layers never reach its children's.
const DEPTH_STRIDE: i32 = 1_000;

/// Drawing surface passed to [`crate::widget::Widget::paint`].
///
/// Wraps the engine's [`DrawList`]. Each call records one command on a
/// semantic layer (halo, surface, border, content) offset by the widget's
/// depth in the tree. Empty geometry is dropped without recording anything.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    base: ZIndex,
    backdrop: Color,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, base: ZIndex::new(0), backdrop: Color::WHITE }
    }

    /// Places subsequent commands at tree depth `depth`.
    pub(crate) fn set_depth(&mut self, depth: usize) {
        let depth = i32::try_from(depth).unwrap_or(i32::MAX / DEPTH_STRIDE);
        self.base = ZIndex::new(depth.saturating_mul(DEPTH_STRIDE));
    }

    pub(crate) fn set_backdrop(&mut self, color: Color) {
        self.backdrop = color;
    }

    /// Nearest opaque background behind the widget being painted.
    #[inline]
    pub fn backdrop(&self) -> Color {
        self.backdrop
    }

    #[inline]
    fn layer(&self, z: ZIndex) -> ZIndex {
        self.base.raised(z.0)
    }

    // ── paths ─────────────────────────────────────────────────────────────

    /// Fills a closed path on the surface layer.
    pub fn fill_outline(&mut self, path: Path, paint: impl Into<Paint>) -> bool {
        let z = self.layer(ZIndex::SURFACE);
        self.draw_list.push_fill(z, path, paint)
    }

    /// Fills a path on the content layer (levels, thumbs, glyph fills).
    pub fn fill_content(&mut self, path: Path, paint: impl Into<Paint>) -> bool {
        let z = self.layer(ZIndex::CONTENT);
        self.draw_list.push_fill(z, path, paint)
    }

    /// Fills a path behind the surface (glows, shadows).
    pub fn fill_halo(&mut self, path: Path, paint: impl Into<Paint>) -> bool {
        let z = self.layer(ZIndex::HALO);
        self.draw_list.push_fill(z, path, paint)
    }

    /// Strokes a path on the border layer.
    pub fn stroke_outline(&mut self, path: Path, stroke: Stroke) -> bool {
        let z = self.layer(ZIndex::BORDER);
        self.draw_list.push_stroke(z, path, stroke)
    }

    /// Strokes a path on the content layer (arcs, glyph lines).
    pub fn stroke_content(&mut self, path: Path, stroke: Stroke) -> bool {
        let z = self.layer(ZIndex::CONTENT);
        self.draw_list.push_stroke(z, path, stroke)
    }

    // ── rounded rects ─────────────────────────────────────────────────────

    /// Fills `rect` with per-corner radii.
    pub fn fill_rounded(&mut self, rect: Rect, radii: CornerRadii, paint: impl Into<Paint>) -> bool {
        self.fill_outline(build_rounded_outline(rect, radii), paint)
    }

    /// Draws a border ring of `width` inside `rect`.
    ///
    /// The ring follows the surface outline: the rect is inset by half the
    /// width and every radius shrinks by the full width.
    pub fn stroke_rounded(&mut self, rect: Rect, radii: CornerRadii, width: f32, color: Color) -> bool {
        if !(width > 0.0) {
            return false;
        }
        let ring = rect.inset(width * 0.5);
        let radii = radii.shrink(width.round() as i32);
        self.stroke_outline(build_rounded_outline(ring, radii), Stroke::new(width, color))
    }

    // ── images & text ─────────────────────────────────────────────────────

    /// Image stretched over `dest`, masked by `clip`.
    pub fn image(&mut self, image: ImageHandle, dest: Rect, clip: Path) -> bool {
        let z = self.layer(ZIndex::CONTENT);
        self.draw_list.push_image(z, image, dest, clip)
    }

    /// Single-line label centred on `center`.
    pub fn label(&mut self, text: impl Into<String>, center: Vec2, size: f32, color: Color) -> bool {
        let z = self.layer(ZIndex::CONTENT.raised(1));
        self.draw_list.push_label(z, text, center, size, color)
    }
}
