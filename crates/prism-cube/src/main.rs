//! Cube viewer: depth-tested, back-culled cube redrawn every frame.

use anyhow::Result;

use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::GpuInit;
use prism_engine::logging::{LoggingConfig, init_logging};
use prism_engine::render::{Cube, RenderSettings};
use prism_engine::shader::ShaderLibrary;
use prism_engine::window::{RedrawMode, Runtime, RuntimeConfig};

use winit::dpi::LogicalSize;

/// Log a throughput sample every this many frames.
const FPS_LOG_INTERVAL: u64 = 600;

struct CubeViewer {
    settings: RenderSettings,
    library: ShaderLibrary,
    cube: Option<Cube>,
}

impl CubeViewer {
    fn new() -> Self {
        Self {
            settings: RenderSettings {
                clear_color: wgpu::Color::WHITE,
                clear_depth: 1.0,
                depth_test: true,
                cull_backfaces: true,
                // Corner rings wind clockwise on screen.
                front_face: wgpu::FrontFace::Cw,
            },
            library: ShaderLibrary::builtin(),
            cube: None,
        }
    }
}

impl App for CubeViewer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let time = ctx.time;
        if time.frame_index > 0 && time.frame_index % FPS_LOG_INTERVAL == 0 {
            log::debug!("frame {}: {:.1} fps", time.frame_index, time.fps());
        }

        let settings = &self.settings;
        let library = &self.library;
        let cube = &mut self.cube;
        let mut build_failed = false;

        let control = ctx.render(settings, |rctx, target| {
            if cube.is_none() {
                match Cube::new(rctx, settings, library) {
                    Ok(shape) => *cube = Some(shape),
                    Err(err) => {
                        log::error!("{err:#}");
                        build_failed = true;
                        return;
                    }
                }
            }

            if let Some(shape) = cube.as_ref() {
                shape.render(target);
            }
        });

        if build_failed {
            return AppControl::Exit;
        }

        control
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(
        RuntimeConfig {
            title: "Cube".to_string(),
            initial_size: LogicalSize::new(512.0, 512.0),
            redraw: RedrawMode::Continuous,
        },
        GpuInit {
            depth_buffer: true,
            ..GpuInit::default()
        },
        CubeViewer::new(),
    )
}
