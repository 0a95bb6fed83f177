//! The fixed triangle geometry.

use bytemuck::{Pod, Zeroable};

/// Vertex buffer binding slot the triangle is uploaded to.
pub const VERTEX_BUFFER_SLOT: u32 = 0;

/// Primitive topology of the single draw call.
pub const TOPOLOGY: wgpu::PrimitiveTopology = wgpu::PrimitiveTopology::TriangleList;

/// One vertex: a clip-space position.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Upper-center triangle in NDC, counter-clockwise.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex { position: [0.0, 0.5, 0.0] },
    Vertex { position: [-0.5, -0.5, 0.0] },
    Vertex { position: [0.5, -0.5, 0.0] },
];

/// Raw bytes of [`TRIANGLE_VERTICES`], as uploaded every frame.
pub fn triangle_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&TRIANGLE_VERTICES)
}
