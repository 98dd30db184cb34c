//! Prism engine crate.
//!
//! This crate owns the platform + GPU runtime pieces shared by the viewer
//! binaries: window/event loop, device layer, frame timing, and the fixed
//! shape renderers with their geometry and shader sources.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod mesh;
pub mod shader;
pub mod render;
