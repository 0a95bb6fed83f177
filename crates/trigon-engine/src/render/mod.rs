//! Triangle rendering.
//!
//! Setup resolves the two shader entry points and builds one pipeline; each frame
//! then binds it, uploads three vertices and issues one draw call.
//!
//! Renderer logic talks to the GPU through the traits in [`api`]; `device::GpuDevice`
//! implements them on top of wgpu.

pub mod api;
mod error;
mod frame;
mod geometry;
mod gpu;
mod library;
mod pipeline;
mod triangle;

#[cfg(test)]
pub(crate) mod mock;

pub use api::{CommandBuffer, PipelineDescriptor, RenderDevice, RenderEncoder};
pub use error::SetupError;
pub use frame::{render_frame, FrameOutcome, SkipReason};
pub use geometry::{triangle_bytes, Vertex, TOPOLOGY, TRIANGLE_VERTICES, VERTEX_BUFFER_SLOT};
pub use gpu::{GpuCommandBuffer, GpuPipeline, GpuRenderEncoder};
pub use library::{ShaderFunction, ShaderLibrary, FRAGMENT_ENTRY, VERTEX_ENTRY};
pub use pipeline::{build_pipeline, PipelineBuilder, COLOR_FORMAT};
pub use triangle::TriangleRenderer;
