//! Frame timing.
//!
//! The runtime ticks one [`FrameClock`] per window and hands the resulting
//! [`FrameTime`] snapshot to the app each driven frame; nothing here touches
//! the GPU or the event loop.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
