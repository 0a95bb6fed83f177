//! wgpu implementation of the render seam.

use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::device::{Drawable, GpuDevice, PassDescriptor};

use super::api::{CommandBuffer, PipelineDescriptor, RenderDevice, RenderEncoder};
use super::error::SetupError;

/// Compiled wgpu pipeline plus the topology it was built for.
#[derive(Debug)]
pub struct GpuPipeline {
    pipeline: wgpu::RenderPipeline,
    topology: wgpu::PrimitiveTopology,
}

impl RenderDevice for GpuDevice {
    type Pipeline = GpuPipeline;
    type Drawable = Drawable;
    type PassDescriptor = PassDescriptor;
    type CommandBuffer<'a>
        = GpuCommandBuffer<'a>
    where
        Self: 'a;

    /// Anything wgpu refuses while creating the module, layout or pipeline is
    /// captured in a validation scope and returned as `PipelineRejected`.
    fn make_render_pipeline(
        &self,
        desc: &PipelineDescriptor<'_>,
    ) -> Result<GpuPipeline, SetupError> {
        let device = self.device();

        let renderable = desc
            .color_format
            .guaranteed_format_features(device.features())
            .allowed_usages
            .contains(wgpu::TextureUsages::RENDER_ATTACHMENT);
        if !renderable {
            return Err(SetupError::rejected(format!(
                "{:?} cannot be used as a color attachment",
                desc.color_format
            )));
        }

        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(desc.library.label()),
            source: wgpu::ShaderSource::Wgsl(desc.library.source().into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("trigon triangle pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: desc.label,
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(desc.vertex.name()),
                compilation_options: Default::default(),
                buffers: std::slice::from_ref(&desc.vertex_layout),
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(desc.fragment.name()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: desc.color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: desc.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(scope.pop()) {
            return Err(SetupError::rejected(err.to_string()));
        }

        Ok(GpuPipeline {
            pipeline,
            topology: desc.topology,
        })
    }

    fn make_command_buffer(&self) -> Option<GpuCommandBuffer<'_>> {
        let encoder = self
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("trigon frame encoder"),
            });

        Some(GpuCommandBuffer {
            device: self.device(),
            queue: self.queue(),
            encoder,
            drawable: None,
        })
    }
}

/// One frame's command encoder plus the drawable it will present.
pub struct GpuCommandBuffer<'g> {
    device: &'g wgpu::Device,
    queue: &'g wgpu::Queue,
    encoder: wgpu::CommandEncoder,
    drawable: Option<Drawable>,
}

impl<'g> CommandBuffer for GpuCommandBuffer<'g> {
    type Pipeline = GpuPipeline;
    type Drawable = Drawable;
    type PassDescriptor = PassDescriptor;
    type Encoder<'a>
        = GpuRenderEncoder<'a>
    where
        Self: 'a;

    fn make_render_encoder<'a>(
        &'a mut self,
        pass: &'a PassDescriptor,
    ) -> Option<GpuRenderEncoder<'a>> {
        let device = self.device;
        let rpass = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &pass.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(pass.clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        Some(GpuRenderEncoder {
            device,
            rpass,
            topology: None,
        })
    }

    fn present(&mut self, drawable: Drawable) {
        self.drawable = Some(drawable);
    }

    /// Presentation happens after submission; wgpu has no "present on completion".
    fn commit(self) {
        self.queue.submit(std::iter::once(self.encoder.finish()));
        if let Some(drawable) = self.drawable {
            drawable.present();
        }
    }
}

pub struct GpuRenderEncoder<'a> {
    device: &'a wgpu::Device,
    rpass: wgpu::RenderPass<'a>,
    topology: Option<wgpu::PrimitiveTopology>,
}

impl RenderEncoder for GpuRenderEncoder<'_> {
    type Pipeline = GpuPipeline;

    fn set_pipeline(&mut self, pipeline: &GpuPipeline) {
        self.rpass.set_pipeline(&pipeline.pipeline);
        self.topology = Some(pipeline.topology);
    }

    fn set_vertex_bytes(&mut self, slot: u32, bytes: &[u8]) {
        let buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("trigon vertex bytes"),
                contents: bytes,
                usage: wgpu::BufferUsages::VERTEX,
            });
        self.rpass.set_vertex_buffer(slot, buffer.slice(..));
    }

    fn draw_primitives(&mut self, topology: wgpu::PrimitiveTopology, vertices: Range<u32>) {
        // Topology is baked into the pipeline under wgpu.
        debug_assert_eq!(self.topology, Some(topology), "draw topology differs from pipeline");
        self.rpass.draw(vertices, 0..1);
    }

    fn end_encoding(self) {
        drop(self.rpass);
    }
}
