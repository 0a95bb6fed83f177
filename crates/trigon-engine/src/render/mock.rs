//! Recording `RenderDevice` used by unit tests.

use std::cell::{Cell, RefCell};
use std::ops::Range;

use super::api::{CommandBuffer, PipelineDescriptor, RenderDevice, RenderEncoder};
use super::error::SetupError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    MakePipeline {
        vertex: String,
        fragment: String,
        format: wgpu::TextureFormat,
        topology: wgpu::PrimitiveTopology,
    },
    MakeCommandBuffer,
    BeginPass { target: u32 },
    SetPipeline { id: u32 },
    SetVertexBytes { slot: u32, bytes: Vec<u8> },
    Draw {
        topology: wgpu::PrimitiveTopology,
        vertices: Range<u32>,
    },
    EndEncoding,
    Present { drawable: u32 },
    Commit,
}

#[derive(Debug)]
pub(crate) struct MockPipeline {
    pub id: u32,
    pub color_format: wgpu::TextureFormat,
}

#[derive(Debug)]
pub(crate) struct MockDrawable(pub u32);

#[derive(Debug)]
pub(crate) struct MockPass(pub u32);

#[derive(Debug, Default)]
pub(crate) struct MockDevice {
    pub reject_pipelines: bool,
    pub no_command_buffers: bool,
    pub no_encoders: bool,
    pub calls: RefCell<Vec<Call>>,
    pub next_pipeline: Cell<u32>,
}

impl MockDevice {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl RenderDevice for MockDevice {
    type Pipeline = MockPipeline;
    type Drawable = MockDrawable;
    type PassDescriptor = MockPass;
    type CommandBuffer<'a>
        = MockCommandBuffer<'a>
    where
        Self: 'a;

    fn make_render_pipeline(
        &self,
        desc: &PipelineDescriptor<'_>,
    ) -> Result<MockPipeline, SetupError> {
        self.record(Call::MakePipeline {
            vertex: desc.vertex.name().to_string(),
            fragment: desc.fragment.name().to_string(),
            format: desc.color_format,
            topology: desc.topology,
        });

        if self.reject_pipelines {
            return Err(SetupError::rejected("mock device rejects all pipelines"));
        }

        let id = self.next_pipeline.get();
        self.next_pipeline.set(id + 1);
        Ok(MockPipeline {
            id,
            color_format: desc.color_format,
        })
    }

    fn make_command_buffer(&self) -> Option<MockCommandBuffer<'_>> {
        if self.no_command_buffers {
            return None;
        }
        self.record(Call::MakeCommandBuffer);
        Some(MockCommandBuffer { device: self })
    }
}

pub(crate) struct MockCommandBuffer<'d> {
    device: &'d MockDevice,
}

impl<'d> CommandBuffer for MockCommandBuffer<'d> {
    type Pipeline = MockPipeline;
    type Drawable = MockDrawable;
    type PassDescriptor = MockPass;
    type Encoder<'a>
        = MockEncoder<'a>
    where
        Self: 'a;

    fn make_render_encoder<'a>(&'a mut self, pass: &'a MockPass) -> Option<MockEncoder<'a>> {
        if self.device.no_encoders {
            return None;
        }
        self.device.record(Call::BeginPass { target: pass.0 });
        Some(MockEncoder { device: self.device })
    }

    fn present(&mut self, drawable: MockDrawable) {
        self.device.record(Call::Present { drawable: drawable.0 });
    }

    fn commit(self) {
        self.device.record(Call::Commit);
    }
}

pub(crate) struct MockEncoder<'a> {
    device: &'a MockDevice,
}

impl RenderEncoder for MockEncoder<'_> {
    type Pipeline = MockPipeline;

    fn set_pipeline(&mut self, pipeline: &MockPipeline) {
        self.device.record(Call::SetPipeline { id: pipeline.id });
    }

    fn set_vertex_bytes(&mut self, slot: u32, bytes: &[u8]) {
        self.device.record(Call::SetVertexBytes {
            slot,
            bytes: bytes.to_vec(),
        });
    }

    fn draw_primitives(&mut self, topology: wgpu::PrimitiveTopology, vertices: Range<u32>) {
        self.device.record(Call::Draw { topology, vertices });
    }

    fn end_encoding(self) {
        self.device.record(Call::EndEncoding);
    }
}
