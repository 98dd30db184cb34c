//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer, and
//! schedules redraws per the viewer's [`RedrawMode`].

mod redraw;
mod runtime;

pub use redraw::{RedrawMode, RedrawScheduler};
pub use runtime::{Runtime, RuntimeConfig};
