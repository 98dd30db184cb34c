use anyhow::{Context, Result};

use crate::mesh;
use crate::render::{RenderCtx, RenderSettings, RenderTarget};
use crate::shader::{conventional_ids, ShaderLibrary};

use super::common::ShapeCore;

/// Cone shape: unit-radius base fan in the XY plane with its apex up +Z.
///
/// Owns its compiled shader pair and vertex/index buffers; geometry and
/// pipeline state are fixed at construction. A failed construction returns
/// an error and no shape, so there is nothing half-built to render with.
pub struct Cone {
    core: ShapeCore,
}

impl Cone {
    /// Builds a cone wired to the conventional `Cone-*` shader ids.
    pub fn new(
        ctx: &RenderCtx<'_>,
        settings: &RenderSettings,
        library: &ShaderLibrary,
        segments: u32,
    ) -> Result<Self> {
        let (vertex_id, fragment_id) = conventional_ids("Cone");
        Self::with_shader_ids(ctx, settings, library, segments, &vertex_id, &fragment_id)
    }

    /// Builds a cone from an explicit shader id pair.
    pub fn with_shader_ids(
        ctx: &RenderCtx<'_>,
        settings: &RenderSettings,
        library: &ShaderLibrary,
        segments: u32,
        vertex_id: &str,
        fragment_id: &str,
    ) -> Result<Self> {
        let mesh = mesh::cone(segments);
        let core = ShapeCore::build(
            ctx,
            settings,
            library,
            "prism cone",
            vertex_id,
            fragment_id,
            &mesh,
        )
        .with_context(|| {
            format!(
                "cone shader pipeline failed to build \
                 (vertex shader id: {vertex_id}, fragment shader id: {fragment_id})"
            )
        })?;

        Ok(Self { core })
    }

    /// Draws the base and flank halves in one pass; leaves nothing bound.
    pub fn render(&self, target: &mut RenderTarget<'_>) {
        self.core.draw(target);
    }
}
