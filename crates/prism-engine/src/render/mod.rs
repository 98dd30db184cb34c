//! GPU rendering subsystem.
//!
//! Each shape owns its full GPU footprint (shader pipeline, vertex/index
//! buffers) and draws in a self-contained pass, so nothing stays bound
//! between shapes or frames.
//!
//! Convention:
//! - shape geometry is authored in GL-style clip coordinates
//! - the vertex stages remap depth to the [0, 1] clip range

mod ctx;
mod settings;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use settings::RenderSettings;
pub use shapes::{Cone, Cube};
