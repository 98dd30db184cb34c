//! Shared GPU plumbing used by both shape renderers.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{bail, Result};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::mesh::ShapeMesh;
use crate::render::{RenderCtx, RenderSettings, RenderTarget};
use crate::shader::ShaderLibrary;

// ── vertex layout ─────────────────────────────────────────────────────────

/// Object-space position attribute, matching `@location(0) vec3f`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct PositionVertex {
    pub position: [f32; 3],
}

impl PositionVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PositionVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── shared shape core ─────────────────────────────────────────────────────

/// GPU footprint shared by the fixed shapes: one strip pipeline, one vertex
/// buffer, one index buffer, and the two index ranges drawn per frame.
pub(super) struct ShapeCore {
    label: &'static str,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    halves: [Range<u32>; 2],
    depth: bool,

    /// One-time guard for draws against a target missing a depth attachment.
    warned_missing_depth: AtomicBool,
}

impl ShapeCore {
    /// Compiles the shader pair, builds the strip pipeline, and uploads the
    /// mesh. Any lookup or validation failure surfaces as an error; no
    /// partial shape is produced.
    pub(super) fn build(
        ctx: &RenderCtx<'_>,
        settings: &RenderSettings,
        library: &ShaderLibrary,
        label: &'static str,
        vertex_id: &str,
        fragment_id: &str,
        mesh: &ShapeMesh,
    ) -> Result<Self> {
        let (vs_source, fs_source) = library.resolve_pair(vertex_id, fragment_id)?;

        let vs_module = compile_module(ctx.device, vertex_id, vs_source)?;
        let fs_module = compile_module(ctx.device, fragment_id, fs_source)?;

        let layout_label = format!("{label} pipeline layout");
        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(&layout_label),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        // The guard keeps the scope open across the fallible call; dropping
        // it unpopped would discard any captured error.
        let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let pipeline_label = format!("{label} pipeline");
        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(&pipeline_label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &vs_module,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[PositionVertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &fs_module,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleStrip,
                    strip_index_format: Some(wgpu::IndexFormat::Uint16),
                    front_face: settings.front_face,
                    cull_mode: settings.cull_mode(),
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: settings.depth_stencil(),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        if let Some(err) = pollster::block_on(scope.pop()) {
            bail!("render pipeline rejected by the device: {err}");
        }

        let vertices: Vec<PositionVertex> = mesh
            .positions()
            .iter()
            .map(|&position| PositionVertex { position })
            .collect();

        let vbo_label = format!("{label} vbo");
        let vertex_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&vbo_label),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let ibo_label = format!("{label} ibo");
        let index_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&ibo_label),
                contents: bytemuck::cast_slice(mesh.indices()),
                usage: wgpu::BufferUsages::INDEX,
            });

        Ok(Self {
            label,
            pipeline,
            vertex_buffer,
            index_buffer,
            halves: mesh.halves(),
            depth: settings.depth_test,
            warned_missing_depth: AtomicBool::new(false),
        })
    }

    /// Draws both index halves in one self-contained pass.
    ///
    /// Bindings live on the pass and are released when it ends; the shape
    /// itself is untouched.
    pub(super) fn draw(&self, target: &mut RenderTarget<'_>) {
        let depth_stencil_attachment = if self.depth {
            let Some(view) = target.depth_view else {
                if !self.warned_missing_depth.swap(true, Ordering::Relaxed) {
                    log::warn!(
                        "{}: frame target has no depth attachment; skipping draw",
                        self.label
                    );
                }
                return;
            };
            Some(wgpu::RenderPassDepthStencilAttachment {
                view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            })
        } else {
            None
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(self.label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

        // One ranged draw per half; the second starts at the half offset.
        for half in self.halves.clone() {
            rpass.draw_indexed(half, 0, 0..1);
        }
    }
}

/// Compiles one WGSL module inside a validation error scope; a broken source
/// surfaces as an error naming the shader id.
fn compile_module(device: &wgpu::Device, id: &str, source: &str) -> Result<wgpu::ShaderModule> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(id),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    if let Some(err) = pollster::block_on(scope.pop()) {
        bail!("shader {id:?} failed to compile: {err}");
    }

    Ok(module)
}
