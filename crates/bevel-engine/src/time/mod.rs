//! Timing and repaint scheduling.
//!
//! - [`Ticker`] turns elapsed time into a count of due animation ticks.
//! - [`RedrawQueue`] carries "needs redraw" messages to the rendering side.

mod redraw;
mod ticker;

pub use redraw::{RedrawQueue, RedrawRequest, RedrawSender};
pub use ticker::{Ticker, TickerConfig};
