//! Outline geometry.
//!
//! Every builder here is a pure function of its inputs and never fails:
//! degenerate rectangles produce an empty [`Path`], oversized radii are
//! clamped. Callers skip drawing empty paths.

mod outline;
mod path;

pub use outline::{build_rounded_outline, capsule_outline, circle_outline, open_arc, polyline, rect_outline};
pub use path::{ArcSegment, Path, PathEl, Polyline, DEFAULT_TOLERANCE};
