//! Coordinate and geometry value types shared by the engine and widgets.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles used by arcs are measured in degrees, clockwise on screen
//! (0° points along +X, 90° along +Y).

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::{CornerRadii, RadiiParseError};
pub use rect::Rect;
pub use vec2::Vec2;
