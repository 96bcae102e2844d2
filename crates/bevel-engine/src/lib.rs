//! Bevel engine crate.
//!
//! Renderer-free core shared by every bevel widget:
//! - [`geometry`]: per-corner rounded outlines and other paths
//! - [`anim`]: tick-driven value animation
//! - [`select`]: toggle/radio click handling over a control tree
//! - [`style`]: interaction-state color resolution
//! - [`scene`]: the recorded draw stream widgets paint into
//! - [`time`]: tick scheduling and redraw requests

pub mod anim;
pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod select;
pub mod style;
pub mod time;
