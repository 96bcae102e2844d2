use crate::scene::shapes::{FillCmd, ImageCmd, LabelCmd, StrokeCmd};

/// Backend-agnostic draw command.
///
/// Every geometric command carries a [`crate::geometry::Path`]; rasterization
/// is left to whoever consumes the list.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(FillCmd),
    Stroke(StrokeCmd),
    Image(ImageCmd),
    Label(LabelCmd),
}

impl DrawCmd {
    /// Short name of the variant, for logs and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Fill(_) => "fill",
            DrawCmd::Stroke(_) => "stroke",
            DrawCmd::Image(_) => "image",
            DrawCmd::Label(_) => "label",
        }
    }
}
