//! Fixed shape renderers.

mod common;

mod cone;
mod cube;

pub use cone::Cone;
pub use cube::Cube;
