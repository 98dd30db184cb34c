//! Cone viewer: draws the stock 350-segment cone once into a fixed window.

use anyhow::Result;

use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::GpuInit;
use prism_engine::logging::{LoggingConfig, init_logging};
use prism_engine::render::{Cone, RenderSettings};
use prism_engine::shader::ShaderLibrary;
use prism_engine::window::{RedrawMode, Runtime, RuntimeConfig};

use winit::dpi::LogicalSize;

const CONE_SEGMENTS: u32 = 350;

struct ConeViewer {
    settings: RenderSettings,
    library: ShaderLibrary,
    cone: Option<Cone>,
}

impl ConeViewer {
    fn new() -> Self {
        Self {
            settings: RenderSettings {
                clear_color: wgpu::Color {
                    r: 0.0,
                    g: 0.23,
                    b: 0.44,
                    a: 1.0,
                },
                ..RenderSettings::default()
            },
            library: ShaderLibrary::builtin(),
            cone: None,
        }
    }
}

impl App for ConeViewer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let settings = &self.settings;
        let library = &self.library;
        let cone = &mut self.cone;
        let mut build_failed = false;

        let control = ctx.render(settings, |rctx, target| {
            if cone.is_none() {
                match Cone::new(rctx, settings, library, CONE_SEGMENTS) {
                    Ok(shape) => *cone = Some(shape),
                    Err(err) => {
                        log::error!("{err:#}");
                        build_failed = true;
                        return;
                    }
                }
            }

            if let Some(shape) = cone.as_ref() {
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
            title: "Cone".to_string(),
            initial_size: LogicalSize::new(512.0, 512.0),
            redraw: RedrawMode::Once,
        },
        GpuInit::default(),
        ConeViewer::new(),
    )
}
