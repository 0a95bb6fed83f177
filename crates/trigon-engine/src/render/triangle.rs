use winit::dpi::PhysicalSize;

use super::api::RenderDevice;
use super::error::SetupError;
use super::frame::{render_frame, FrameOutcome};
use super::library::ShaderLibrary;
use super::pipeline::PipelineBuilder;

/// Draws the static triangle once per frame.
///
/// The pipeline is built on construction and reused for every frame; nothing
/// else carries over between frames.
#[derive(Debug)]
pub struct TriangleRenderer<P> {
    pipeline: P,
}

impl<P> TriangleRenderer<P> {
    /// Builds the pipeline for `color_format` from `library`.
    pub fn new<D>(
        device: &D,
        library: &ShaderLibrary,
        color_format: wgpu::TextureFormat,
    ) -> Result<Self, SetupError>
    where
        D: RenderDevice<Pipeline = P>,
    {
        let pipeline = PipelineBuilder::new(library)
            .color_format(color_format)
            .build(device)?;

        Ok(Self { pipeline })
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Renders one frame. Missing frame resources skip it silently.
    pub fn render<D>(
        &self,
        device: &D,
        drawable: Option<D::Drawable>,
        pass: Option<&D::PassDescriptor>,
    ) -> FrameOutcome
    where
        D: RenderDevice<Pipeline = P>,
    {
        let outcome = render_frame(device, &self.pipeline, drawable, pass);
        if let FrameOutcome::Skipped(reason) = outcome {
            log::debug!("frame skipped: {reason:?}");
        }
        outcome
    }

    /// The geometry is in NDC, so a new drawable size changes nothing here.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        log::trace!("drawable size now {}x{}", size.width, size.height);
    }
}
