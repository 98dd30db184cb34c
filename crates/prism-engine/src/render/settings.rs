use crate::device::DEPTH_FORMAT;

/// Fixed-function choices a viewer makes once at startup.
///
/// Each viewer builds its own value and threads it to the clear pass and to
/// every shape pipeline; nothing here is shared between programs.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Color the surface is cleared to before shapes draw.
    pub clear_color: wgpu::Color,

    /// Value the depth buffer is cleared to, when one exists.
    pub clear_depth: f32,

    /// Depth-test fragments (`Less`, write-enabled) against the depth buffer.
    pub depth_test: bool,

    /// Cull primitives facing away from the viewer.
    pub cull_backfaces: bool,

    /// Winding order regarded as front-facing.
    pub front_face: wgpu::FrontFace,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_color: wgpu::Color::BLACK,
            clear_depth: 1.0,
            depth_test: false,
            cull_backfaces: false,
            front_face: wgpu::FrontFace::Ccw,
        }
    }
}

impl RenderSettings {
    /// Cull mode for shape pipelines.
    pub(crate) fn cull_mode(&self) -> Option<wgpu::Face> {
        self.cull_backfaces.then_some(wgpu::Face::Back)
    }

    /// Depth/stencil state for shape pipelines, when depth testing is on.
    pub(crate) fn depth_stencil(&self) -> Option<wgpu::DepthStencilState> {
        self.depth_test.then(|| wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_bare_context() {
        let s = RenderSettings::default();
        assert!(!s.depth_test);
        assert!(!s.cull_backfaces);
        assert_eq!(s.front_face, wgpu::FrontFace::Ccw);
        assert_eq!(s.clear_depth, 1.0);
    }

    #[test]
    fn cull_mode_follows_the_flag() {
        let mut s = RenderSettings::default();
        assert_eq!(s.cull_mode(), None);
        s.cull_backfaces = true;
        assert_eq!(s.cull_mode(), Some(wgpu::Face::Back));
    }

    #[test]
    fn depth_stencil_uses_less_with_write() {
        let s = RenderSettings {
            depth_test: true,
            ..RenderSettings::default()
        };
        let ds = s.depth_stencil().unwrap();
        assert_eq!(ds.format, DEPTH_FORMAT);
        assert!(ds.depth_write_enabled);
        assert_eq!(ds.depth_compare, wgpu::CompareFunction::Less);
    }

    #[test]
    fn depth_stencil_is_absent_without_depth_testing() {
        assert!(RenderSettings::default().depth_stencil().is_none());
    }
}
