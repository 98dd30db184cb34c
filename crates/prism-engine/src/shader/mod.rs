//! Shader source registry.
//!
//! Sources are WGSL strings keyed by id, following the
//! `<shape>-vertex-shader` / `<shape>-fragment-shader` naming convention the
//! stock viewers rely on. Compilation happens at shape construction, not
//! here; the registry only resolves ids to source text.

mod library;

pub use library::{conventional_ids, ShaderLibrary};
