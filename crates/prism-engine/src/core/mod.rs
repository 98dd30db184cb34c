//! Core engine-facing contracts.
//!
//! The seam between the platform loop and the viewer binaries: a viewer
//! implements [`App`] and draws through the [`FrameCtx`] it is handed each
//! frame, without ever seeing the event loop or the window entry.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
