use super::api::{CommandBuffer, RenderDevice, RenderEncoder};
use super::geometry::{triangle_bytes, TOPOLOGY, TRIANGLE_VERTICES, VERTEX_BUFFER_SLOT};

/// Why a frame produced no output.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SkipReason {
    NoDrawable,
    NoPassDescriptor,
    NoCommandBuffer,
    NoRenderEncoder,
}

/// Result of one frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// Commands were committed and the drawable scheduled for presentation.
    Presented,
    /// Nothing was submitted.
    Skipped(SkipReason),
}

/// Records and submits one triangle frame.
///
/// A missing drawable or pass descriptor skips the frame before any GPU call.
/// If recording cannot start, the command buffer is dropped uncommitted.
pub fn render_frame<D: RenderDevice>(
    device: &D,
    pipeline: &D::Pipeline,
    drawable: Option<D::Drawable>,
    pass: Option<&D::PassDescriptor>,
) -> FrameOutcome {
    let Some(drawable) = drawable else {
        return FrameOutcome::Skipped(SkipReason::NoDrawable);
    };
    let Some(pass) = pass else {
        return FrameOutcome::Skipped(SkipReason::NoPassDescriptor);
    };
    let Some(mut commands) = device.make_command_buffer() else {
        return FrameOutcome::Skipped(SkipReason::NoCommandBuffer);
    };

    {
        let Some(mut encoder) = commands.make_render_encoder(pass) else {
            return FrameOutcome::Skipped(SkipReason::NoRenderEncoder);
        };

        encoder.set_pipeline(pipeline);
        encoder.set_vertex_bytes(VERTEX_BUFFER_SLOT, triangle_bytes());
        encoder.draw_primitives(TOPOLOGY, 0..TRIANGLE_VERTICES.len() as u32);
        encoder.end_encoding();
    }

    commands.present(drawable);
    commands.commit();

    FrameOutcome::Presented
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::mock::{Call, MockDevice, MockDrawable, MockPass, MockPipeline};

    fn pipeline() -> MockPipeline {
        MockPipeline {
            id: 7,
            color_format: wgpu::TextureFormat::Bgra8Unorm,
        }
    }

    #[test]
    fn records_the_full_sequence_in_order() {
        let device = MockDevice::default();

        let out = render_frame(&device, &pipeline(), Some(MockDrawable(1)), Some(&MockPass(1)));

        assert_eq!(out, FrameOutcome::Presented);
        assert_eq!(
            device.calls(),
            vec![
                Call::MakeCommandBuffer,
                Call::BeginPass { target: 1 },
                Call::SetPipeline { id: 7 },
                Call::SetVertexBytes {
                    slot: 0,
                    bytes: triangle_bytes().to_vec()
                },
                Call::Draw {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    vertices: 0..3
                },
                Call::EndEncoding,
                Call::Present { drawable: 1 },
                Call::Commit,
            ]
        );
    }

    #[test]
    fn missing_drawable_has_no_side_effects() {
        let device = MockDevice::default();

        let out = render_frame(&device, &pipeline(), None, Some(&MockPass(1)));

        assert_eq!(out, FrameOutcome::Skipped(SkipReason::NoDrawable));
        assert!(device.calls().is_empty());
    }

    #[test]
    fn missing_pass_descriptor_has_no_side_effects() {
        let device = MockDevice::default();

        let out = render_frame(&device, &pipeline(), Some(MockDrawable(1)), None);

        assert_eq!(out, FrameOutcome::Skipped(SkipReason::NoPassDescriptor));
        assert!(device.calls().is_empty());
    }

    #[test]
    fn no_command_buffer_skips_frame() {
        let device = MockDevice {
            no_command_buffers: true,
            ..MockDevice::default()
        };

        let out = render_frame(&device, &pipeline(), Some(MockDrawable(1)), Some(&MockPass(1)));

        assert_eq!(out, FrameOutcome::Skipped(SkipReason::NoCommandBuffer));
        assert!(device.calls().is_empty());
    }

    #[test]
    fn no_encoder_drops_commands_without_submission() {
        let device = MockDevice {
            no_encoders: true,
            ..MockDevice::default()
        };

        let out = render_frame(&device, &pipeline(), Some(MockDrawable(1)), Some(&MockPass(1)));

        assert_eq!(out, FrameOutcome::Skipped(SkipReason::NoRenderEncoder));
        assert_eq!(device.calls(), vec![Call::MakeCommandBuffer]);
        assert_eq!(device.count(|c| matches!(c, Call::Commit | Call::Present { .. })), 0);
    }
}
