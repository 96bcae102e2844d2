//! Tick-driven value animation.
//!
//! Nothing here owns a timer. Hosts call `advance()` / `step()` once per tick
//! (see [`crate::time::Ticker`]) and repaint when a call reports movement.

mod spinner;
mod value;

pub use spinner::SpinnerPhase;
pub use value::{AnimatedValue, AnimationConfig, AnimationState, MotionProfile, ValueDomain};
