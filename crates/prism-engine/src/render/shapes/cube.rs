use anyhow::{Context, Result};

use crate::mesh;
use crate::render::{RenderCtx, RenderSettings, RenderTarget};
use crate::shader::{conventional_ids, ShaderLibrary};

use super::common::ShapeCore;

/// Cube shape: eight half-unit corners drawn as two four-vertex rings.
///
/// Owns its compiled shader pair and vertex/index buffers; geometry and
/// pipeline state are fixed at construction. A failed construction returns
/// an error and no shape, so there is nothing half-built to render with.
pub struct Cube {
    core: ShapeCore,
}

impl Cube {
    /// Builds a cube wired to the conventional `Cube-*` shader ids.
    pub fn new(
        ctx: &RenderCtx<'_>,
        settings: &RenderSettings,
        library: &ShaderLibrary,
    ) -> Result<Self> {
        let (vertex_id, fragment_id) = conventional_ids("Cube");
        Self::with_shader_ids(ctx, settings, library, &vertex_id, &fragment_id)
    }

    /// Builds a cube from an explicit shader id pair.
    pub fn with_shader_ids(
        ctx: &RenderCtx<'_>,
        settings: &RenderSettings,
        library: &ShaderLibrary,
        vertex_id: &str,
        fragment_id: &str,
    ) -> Result<Self> {
        let mesh = mesh::cube();
        let core = ShapeCore::build(
            ctx,
            settings,
            library,
            "prism cube",
            vertex_id,
            fragment_id,
            &mesh,
        )
        .with_context(|| {
            format!(
                "cube shader pipeline failed to build \
                 (vertex shader id: {vertex_id}, fragment shader id: {fragment_id})"
            )
        })?;

        Ok(Self { core })
    }

    /// Draws the front and back rings in one pass; leaves nothing bound.
    pub fn render(&self, target: &mut RenderTarget<'_>) {
        self.core.draw(target);
    }
}
