use crate::coords::{Rect, Vec2};

/// Flattening tolerance used by [`Path::signed_area`] and [`Path::bounds`].
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// Circular arc segment.
///
/// Angles are in degrees, clockwise on screen (y-down). A positive sweep runs
/// clockwise. When appended to a path, the current point is implicitly joined
/// to the arc's start point with a straight line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSegment {
    pub center: Vec2,
    pub radius: f32,
    pub start_deg: f32,
    pub sweep_deg: f32,
}

impl ArcSegment {
    #[inline]
    pub const fn new(center: Vec2, radius: f32, start_deg: f32, sweep_deg: f32) -> Self {
        Self { center, radius, start_deg, sweep_deg }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        Vec2::on_circle(self.center, self.radius, self.start_deg)
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        Vec2::on_circle(self.center, self.radius, self.start_deg + self.sweep_deg)
    }

    /// Number of chords needed so no chord strays more than `tolerance`
    /// from the true arc.
    fn segment_count(&self, tolerance: f32) -> usize {
        let sweep = self.sweep_deg.abs().to_radians();
        if sweep == 0.0 || self.radius <= 0.0 {
            return 1;
        }
        let max_step = if tolerance < self.radius {
            2.0 * (1.0 - tolerance / self.radius).acos()
        } else {
            core::f32::consts::FRAC_PI_2
        };
        ((sweep / max_step).ceil() as usize).clamp(1, 256)
    }
}

/// A single path verb.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc(ArcSegment),
    /// Closes the current figure back to its `MoveTo` point.
    Close,
}

/// A flattened figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

/// Renderer-agnostic vector outline.
///
/// Paths are plain data: widgets build them on every paint and hand them to
/// the draw list. An empty path means "nothing to draw".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    els: Vec<PathEl>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self { els: Vec::with_capacity(n) }
    }

    #[inline]
    pub fn move_to(&mut self, p: Vec2) {
        self.els.push(PathEl::MoveTo(p));
    }

    #[inline]
    pub fn line_to(&mut self, p: Vec2) {
        self.els.push(PathEl::LineTo(p));
    }

    #[inline]
    pub fn arc(&mut self, arc: ArcSegment) {
        self.els.push(PathEl::Arc(arc));
    }

    #[inline]
    pub fn close(&mut self) {
        self.els.push(PathEl::Close);
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    /// `true` when the path ends by closing its last figure.
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self.els.last(), Some(PathEl::Close))
    }

    /// Converts arcs into chords, one [`Polyline`] per figure.
    ///
    /// Consecutive identical points are collapsed, so zero-length segments
    /// do not show up in the output.
    pub fn flatten(&self, tolerance: f32) -> Vec<Polyline> {
        let tolerance = if tolerance > 0.0 { tolerance } else { DEFAULT_TOLERANCE };
        let mut out = Vec::new();
        let mut cur: Option<Polyline> = None;

        fn push(line: &mut Polyline, p: Vec2) {
            if line.points.last() != Some(&p) {
                line.points.push(p);
            }
        }

        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) => {
                    if let Some(done) = cur.take() {
                        out.push(done);
                    }
                    cur = Some(Polyline { points: vec![p], closed: false });
                }
                PathEl::LineTo(p) => {
                    push(cur.get_or_insert_with(|| Polyline { points: Vec::new(), closed: false }), p);
                }
                PathEl::Arc(arc) => {
                    let line = cur.get_or_insert_with(|| Polyline { points: Vec::new(), closed: false });
                    let n = arc.segment_count(tolerance);
                    for i in 0..=n {
                        let t = i as f32 / n as f32;
                        let deg = arc.start_deg + arc.sweep_deg * t;
                        push(line, Vec2::on_circle(arc.center, arc.radius, deg));
                    }
                }
                PathEl::Close => {
                    if let Some(mut done) = cur.take() {
                        done.closed = true;
                        out.push(done);
                    }
                }
            }
        }
        if let Some(done) = cur.take() {
            out.push(done);
        }
        out
    }

    /// Sum of shoelace areas of every closed figure.
    ///
    /// Positive for clockwise-on-screen figures, which is how every outline
    /// builder in this crate winds.
    pub fn signed_area(&self) -> f32 {
        self.flatten(DEFAULT_TOLERANCE)
            .iter()
            .filter(|l| l.closed && l.points.len() >= 3)
            .map(|l| {
                let pts = &l.points;
                let twice: f32 = pts
                    .iter()
                    .zip(pts.iter().cycle().skip(1))
                    .map(|(a, b)| a.cross(*b))
                    .sum();
                twice * 0.5
            })
            .sum()
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Bounding box of the flattened path, `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        let lines = self.flatten(DEFAULT_TOLERANCE);
        let mut pts = lines.iter().flat_map(|l| l.points.iter());
        let first = *pts.next()?;
        let (mut min, mut max) = (first, first);
        for p in pts {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        Some(Rect::from_origin_size(min, max - min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn arc_endpoints_follow_screen_angles() {
        let arc = ArcSegment::new(Vec2::new(10.0, 10.0), 10.0, 180.0, 90.0);
        let (s, e) = (arc.start(), arc.end());
        assert!(approx(s.x, 0.0) && approx(s.y, 10.0));
        assert!(approx(e.x, 10.0) && approx(e.y, 0.0));
    }

    #[test]
    fn unit_square_area_and_winding() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.line_to(Vec2::new(2.0, 0.0));
        p.line_to(Vec2::new(2.0, 2.0));
        p.line_to(Vec2::new(0.0, 2.0));
        p.close();
        assert!(p.is_closed());
        assert!(approx(p.signed_area(), 4.0));
    }

    #[test]
    fn open_figures_have_no_area() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.line_to(Vec2::new(5.0, 0.0));
        p.line_to(Vec2::new(5.0, 5.0));
        assert!(!p.is_closed());
        assert_eq!(p.area(), 0.0);
    }

    #[test]
    fn flatten_collapses_zero_length_segments() {
        let mut p = Path::new();
        p.move_to(Vec2::new(1.0, 1.0));
        p.line_to(Vec2::new(1.0, 1.0));
        p.line_to(Vec2::new(3.0, 1.0));
        let lines = p.flatten(0.1);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].points.len(), 2);
    }

    #[test]
    fn flatten_arc_stays_within_tolerance() {
        let arc = ArcSegment::new(Vec2::zero(), 50.0, 0.0, 90.0);
        let mut p = Path::new();
        p.arc(arc);
        let pts = &p.flatten(0.05)[0].points;
        for w in pts.windows(2) {
            let mid = (w[0] + w[1]) * 0.5;
            assert!(50.0 - mid.length() <= 0.05 + 1e-3);
        }
    }

    #[test]
    fn bounds_of_empty_path_is_none() {
        assert!(Path::new().bounds().is_none());
    }

    #[test]
    fn multiple_figures_flatten_separately() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.line_to(Vec2::new(1.0, 1.0));
        p.move_to(Vec2::new(1.0, 0.0));
        p.line_to(Vec2::new(0.0, 1.0));
        assert_eq!(p.flatten(0.1).len(), 2);
    }
}
