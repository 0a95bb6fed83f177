//! Seam between the triangle renderer and the GPU API.
//!
//! The traits mirror the object model of a modern GPU API: a device hands out
//! pipelines and command buffers; a command buffer hands out one render encoder
//! per pass and is committed as a whole. `device::GpuDevice` implements them on top of
//! wgpu.

use std::ops::Range;

use super::error::SetupError;
use super::library::{ShaderFunction, ShaderLibrary};

/// Everything a device needs to compile the triangle pipeline.
#[derive(Debug, Clone)]
pub struct PipelineDescriptor<'a> {
    pub label: Option<&'a str>,
    pub library: &'a ShaderLibrary,
    pub vertex: &'a ShaderFunction,
    pub fragment: &'a ShaderFunction,
    pub vertex_layout: wgpu::VertexBufferLayout<'static>,
    pub color_format: wgpu::TextureFormat,
    pub topology: wgpu::PrimitiveTopology,
}

/// GPU device capability.
pub trait RenderDevice {
    /// Immutable compiled pipeline state.
    type Pipeline;
    /// Presentable surface for one frame.
    type Drawable;
    /// Render target configuration for one frame.
    type PassDescriptor;
    /// Command recording context.
    type CommandBuffer<'a>: CommandBuffer<
            Pipeline = Self::Pipeline,
            Drawable = Self::Drawable,
            PassDescriptor = Self::PassDescriptor,
        >
    where
        Self: 'a;

    fn make_render_pipeline(
        &self,
        desc: &PipelineDescriptor<'_>,
    ) -> Result<Self::Pipeline, SetupError>;

    /// Returns `None` when no command buffer can be created this frame.
    fn make_command_buffer(&self) -> Option<Self::CommandBuffer<'_>>;
}

/// Records one frame of commands. Dropping it without `commit` discards them.
pub trait CommandBuffer {
    type Pipeline;
    type Drawable;
    type PassDescriptor;
    type Encoder<'a>: RenderEncoder<Pipeline = Self::Pipeline>
    where
        Self: 'a;

    /// Begins a render pass. Returns `None` when the pass cannot be recorded.
    fn make_render_encoder<'a>(
        &'a mut self,
        pass: &'a Self::PassDescriptor,
    ) -> Option<Self::Encoder<'a>>;

    /// Schedules presentation of `drawable` once the commands complete.
    fn present(&mut self, drawable: Self::Drawable);

    /// Submits the recorded commands. Fire-and-forget.
    fn commit(self);
}

/// Records commands for a single render pass.
pub trait RenderEncoder {
    type Pipeline;

    fn set_pipeline(&mut self, pipeline: &Self::Pipeline);

    /// Uploads `bytes` and binds them as the vertex buffer at `slot`.
    fn set_vertex_bytes(&mut self, slot: u32, bytes: &[u8]);

    fn draw_primitives(&mut self, topology: wgpu::PrimitiveTopology, vertices: Range<u32>);

    /// Ends the pass.
    fn end_encoding(self);
}
