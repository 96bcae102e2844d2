use crate::coords::Rect;
use crate::geometry::Path;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Opaque reference to an image owned by the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// Image stretched over `dest`, masked by the closed `clip` path.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub image: ImageHandle,
    pub dest: Rect,
    pub clip: Path,
}

impl DrawList {
    pub fn push_image(&mut self, z: ZIndex, image: ImageHandle, dest: Rect, clip: Path) -> bool {
        if dest.is_empty() || clip.is_empty() {
            return false;
        }
        self.push(z, DrawCmd::Image(ImageCmd { image, dest, clip }));
        true
    }
}
