use super::api::{PipelineDescriptor, RenderDevice};
use super::error::SetupError;
use super::geometry::{Vertex, TOPOLOGY};
use super::library::{ShaderLibrary, FRAGMENT_ENTRY, VERTEX_ENTRY};

/// Color attachment format the triangle pipeline targets by default.
pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8Unorm;

/// Builds the triangle pipeline from a shader library.
///
/// Entry points are resolved before the device is touched, so a bad library
/// never reaches `make_render_pipeline`.
#[derive(Debug, Clone)]
pub struct PipelineBuilder<'a> {
    library: &'a ShaderLibrary,
    color_format: wgpu::TextureFormat,
    label: &'a str,
}

impl<'a> PipelineBuilder<'a> {
    pub fn new(library: &'a ShaderLibrary) -> Self {
        Self {
            library,
            color_format: COLOR_FORMAT,
            label: "trigon triangle pipeline",
        }
    }

    pub fn color_format(mut self, format: wgpu::TextureFormat) -> Self {
        self.color_format = format;
        self
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn build<D: RenderDevice>(&self, device: &D) -> Result<D::Pipeline, SetupError> {
        let vertex = self
            .library
            .function_for_stage(VERTEX_ENTRY, naga::ShaderStage::Vertex)?;
        let fragment = self
            .library
            .function_for_stage(FRAGMENT_ENTRY, naga::ShaderStage::Fragment)?;

        let desc = PipelineDescriptor {
            label: Some(self.label),
            library: self.library,
            vertex,
            fragment,
            vertex_layout: Vertex::layout(),
            color_format: self.color_format,
            topology: TOPOLOGY,
        };

        let pipeline = device.make_render_pipeline(&desc)?;
        log::info!(
            "built pipeline `{}` ({} -> {}, {:?})",
            self.label,
            vertex.name(),
            fragment.name(),
            self.color_format
        );
        Ok(pipeline)
    }
}

/// Shorthand for `PipelineBuilder::new(library).color_format(format).build(device)`.
pub fn build_pipeline<D: RenderDevice>(
    device: &D,
    library: &ShaderLibrary,
    color_format: wgpu::TextureFormat,
) -> Result<D::Pipeline, SetupError> {
    PipelineBuilder::new(library).color_format(color_format).build(device)
}
