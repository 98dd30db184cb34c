//! Fixed shape geometry.
//!
//! Meshes are built once at shape construction and never mutated. Every index
//! stream splits into two equal halves, one per draw call; that split and the
//! in-bounds property of every index are validated centrally in
//! [`ShapeMesh::from_parts`].

mod cone;
mod cube;
mod shape_mesh;

pub use cone::{cone, DEFAULT_CONE_SEGMENTS, MAX_CONE_SEGMENTS};
pub use cube::cube;
pub use shape_mesh::ShapeMesh;
