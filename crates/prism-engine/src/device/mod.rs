//! GPU device + surface management.
//!
//! Everything between the window and the render passes lives here: wgpu
//! instance/adapter/device/queue setup, surface (swapchain) configuration,
//! the optional depth buffer that shadows the surface size, and per-frame
//! texture/encoder acquisition.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction, DEPTH_FORMAT};
