use crate::geometry::Path;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroked path (open or closed).
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub path: Path,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a stroke. Empty paths and invisible strokes are dropped.
    pub fn push_stroke(&mut self, z: ZIndex, path: Path, stroke: Stroke) -> bool {
        if path.is_empty() || !stroke.is_visible() {
            return false;
        }
        self.push(z, DrawCmd::Stroke(StrokeCmd { path, stroke }));
        true
    }
}
