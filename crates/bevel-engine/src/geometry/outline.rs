use crate::coords::{CornerRadii, Rect, Vec2};

use super::path::{ArcSegment, Path};

/// Builds the closed outline of `rect` with independently rounded corners.
///
/// Corners are emitted top-left → top-right → bottom-right → bottom-left, then
/// the figure is closed. A corner with a positive radius becomes a 90° arc;
/// a square corner becomes a zero-length line at the corner point, so every
/// non-empty outline has the same element layout:
///
/// ```text
/// MoveTo, corner(TL), LineTo, corner(TR), LineTo, corner(BR), LineTo, corner(BL), Close
/// ```
///
/// Radii are clamped to `[0, min(width, height) / 2]`. A rect with a
/// non-positive (or non-finite) size yields an empty path.
pub fn build_rounded_outline(rect: Rect, radii: CornerRadii) -> Path {
    if rect.is_empty() || !rect.is_finite() {
        return Path::new();
    }

    let [tl, tr, br, bl] = radii.clamp_for(rect);
    let (x, y, r, b) = (rect.x(), rect.y(), rect.right(), rect.bottom());

    let mut path = Path::with_capacity(9);

    path.move_to(Vec2::new(x, y + tl));
    corner(&mut path, Vec2::new(x + tl, y + tl), tl, 180.0, Vec2::new(x, y));

    path.line_to(Vec2::new(r - tr, y));
    corner(&mut path, Vec2::new(r - tr, y + tr), tr, 270.0, Vec2::new(r, y));

    path.line_to(Vec2::new(r, b - br));
    corner(&mut path, Vec2::new(r - br, b - br), br, 0.0, Vec2::new(r, b));

    path.line_to(Vec2::new(x + bl, b));
    corner(&mut path, Vec2::new(x + bl, b - bl), bl, 90.0, Vec2::new(x, b));

    path.close();
    path
}

fn corner(path: &mut Path, center: Vec2, radius: f32, start_deg: f32, point: Vec2) {
    if radius > 0.0 {
        path.arc(ArcSegment::new(center, radius, start_deg, 90.0));
    } else {
        path.line_to(point);
    }
}

/// Plain rectangle outline (all corners square).
#[inline]
pub fn rect_outline(rect: Rect) -> Path {
    build_rounded_outline(rect, CornerRadii::zero())
}

/// Pill outline: the short side is fully rounded at both ends.
///
/// A square rect produces a circle.
#[inline]
pub fn capsule_outline(rect: Rect) -> Path {
    build_rounded_outline(rect, CornerRadii::all(i32::MAX))
}

/// Circle inscribed in the short side of `rect`, centred.
#[inline]
pub fn circle_outline(rect: Rect) -> Path {
    capsule_outline(rect.centered_square())
}

/// Open (unclosed) arc, used for stroked rings and spinners.
pub fn open_arc(center: Vec2, radius: f32, start_deg: f32, sweep_deg: f32) -> Path {
    if !(radius > 0.0) || sweep_deg == 0.0 {
        return Path::new();
    }
    let arc = ArcSegment::new(center, radius, start_deg, sweep_deg);
    let mut path = Path::with_capacity(2);
    path.move_to(arc.start());
    path.arc(arc);
    path
}

/// Open polyline through `points`. Fewer than two points yields an empty path.
pub fn polyline(points: &[Vec2]) -> Path {
    let [first, rest @ ..] = points else { return Path::new() };
    if rest.is_empty() {
        return Path::new();
    }
    let mut path = Path::with_capacity(points.len());
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::path::PathEl;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    fn corner_els(p: &Path) -> [PathEl; 4] {
        let e = p.elements();
        [e[1], e[3], e[5], e[7]]
    }

    // ── structure ─────────────────────────────────────────────────────────

    #[test]
    fn outline_has_fixed_layout_and_closes() {
        let p = build_rounded_outline(r(0.0, 0.0, 100.0, 40.0), CornerRadii::new(8, 0, 4, 12));
        assert_eq!(p.elements().len(), 9);
        assert!(matches!(p.elements()[0], PathEl::MoveTo(_)));
        assert!(p.is_closed());
    }

    #[test]
    fn corners_emitted_tl_tr_br_bl() {
        let p = build_rounded_outline(r(0.0, 0.0, 100.0, 40.0), CornerRadii::all(10));
        let starts: Vec<f32> = corner_els(&p)
            .iter()
            .map(|el| match el {
                PathEl::Arc(a) => a.start_deg,
                other => panic!("expected arc, got {other:?}"),
            })
            .collect();
        assert_eq!(starts, vec![180.0, 270.0, 0.0, 90.0]);
    }

    #[test]
    fn square_corner_is_zero_length_line_at_corner() {
        let p = build_rounded_outline(r(5.0, 5.0, 20.0, 10.0), CornerRadii::new(0, 3, 3, 3));
        assert_eq!(p.elements()[0], PathEl::MoveTo(Vec2::new(5.0, 5.0)));
        assert_eq!(p.elements()[1], PathEl::LineTo(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn bottom_right_square_corner_point() {
        let p = build_rounded_outline(r(0.0, 0.0, 20.0, 10.0), CornerRadii::new(3, 3, 3, 0));
        assert_eq!(p.elements()[5], PathEl::LineTo(Vec2::new(20.0, 10.0)));
    }

    #[test]
    fn negative_radius_behaves_as_square() {
        let a = build_rounded_outline(r(0.0, 0.0, 30.0, 30.0), CornerRadii::new(-5, 2, 2, 2));
        let b = build_rounded_outline(r(0.0, 0.0, 30.0, 30.0), CornerRadii::new(0, 2, 2, 2));
        assert_eq!(a, b);
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn non_positive_size_yields_empty_path() {
        assert!(build_rounded_outline(r(0.0, 0.0, 0.0, 10.0), CornerRadii::all(4)).is_empty());
        assert!(build_rounded_outline(r(0.0, 0.0, 10.0, -3.0), CornerRadii::all(4)).is_empty());
        assert!(build_rounded_outline(r(0.0, 0.0, f32::INFINITY, 3.0), CornerRadii::all(4)).is_empty());
    }

    #[test]
    fn oversized_radius_matches_half_short_side() {
        let rect = r(0.0, 0.0, 40.0, 40.0);
        assert_eq!(
            build_rounded_outline(rect, CornerRadii::all(1000)),
            build_rounded_outline(rect, CornerRadii::all(20)),
        );
    }

    // ── area ──────────────────────────────────────────────────────────────

    #[test]
    fn area_is_bounded_by_rect_for_assorted_inputs() {
        let rects = [r(0.0, 0.0, 40.0, 40.0), r(3.5, 1.25, 120.5, 33.75), r(-10.0, 4.0, 1.0, 80.0)];
        let radii = [
            CornerRadii::zero(),
            CornerRadii::all(6),
            CornerRadii::new(0, 50, 3, -2),
            CornerRadii::all(i32::MAX),
        ];
        for rect in rects {
            for rd in radii {
                let p = build_rounded_outline(rect, rd);
                assert!(p.is_closed());
                let area = p.signed_area();
                assert!(area >= 0.0, "{rect:?} {rd:?} -> {area}");
                assert!(area <= rect.area() + 1e-2, "{rect:?} {rd:?} -> {area}");
            }
        }
    }

    #[test]
    fn square_outline_area_is_exact() {
        let p = rect_outline(r(0.0, 0.0, 12.0, 5.0));
        assert!((p.area() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn circle_area_close_to_pi_r_squared() {
        let p = circle_outline(r(0.0, 0.0, 100.0, 40.0));
        let expected = core::f32::consts::PI * 20.0 * 20.0;
        assert!((p.area() - expected).abs() / expected < 0.01);
        let b = p.bounds().unwrap();
        assert!((b.center().x - 50.0).abs() < 1e-3);
    }

    // ── open shapes ───────────────────────────────────────────────────────

    #[test]
    fn open_arc_is_not_closed() {
        let p = open_arc(Vec2::new(50.0, 50.0), 40.0, 30.0, 270.0);
        assert!(!p.is_closed());
        assert_eq!(p.elements().len(), 2);
    }

    #[test]
    fn open_arc_with_no_radius_is_empty() {
        assert!(open_arc(Vec2::zero(), 0.0, 0.0, 90.0).is_empty());
    }

    #[test]
    fn polyline_needs_two_points() {
        assert!(polyline(&[Vec2::zero()]).is_empty());
        assert_eq!(polyline(&[Vec2::zero(), Vec2::new(1.0, 0.0)]).elements().len(), 2);
    }
}
