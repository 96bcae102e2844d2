use crate::geometry::Path;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled closed path.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub path: Path,
    pub paint: Paint,
}

impl DrawList {
    /// Records a fill. Empty paths and paints that cannot draw (invisible or
    /// degenerate gradients) are dropped.
    pub fn push_fill(&mut self, z: ZIndex, path: Path, paint: impl Into<Paint>) -> bool {
        let paint = paint.into();
        if path.is_empty() || !paint.is_drawable() {
            return false;
        }
        self.push(z, DrawCmd::Fill(FillCmd { path, paint }));
        true
    }
}
