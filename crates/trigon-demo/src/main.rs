use anyhow::Result;
use winit::dpi::{LogicalSize, PhysicalSize};

use trigon_engine::core::{AppControl, DrawCtx, ViewDelegate};
use trigon_engine::device::{Drawable, Gpu, GpuInit, PassDescriptor, SurfaceFrame};
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::render::{GpuPipeline, ShaderLibrary, TriangleRenderer};
use trigon_engine::window::{Runtime, RuntimeConfig};

/// View delegate drawing the triangle every redraw.
struct TriangleView {
    renderer: TriangleRenderer<GpuPipeline>,
}

impl TriangleView {
    fn new(gpu: &Gpu<'_>) -> Result<Self> {
        let library = ShaderLibrary::default_library()?;
        let renderer =
            TriangleRenderer::new(gpu.render_device(), &library, gpu.surface_format())?;
        Ok(Self { renderer })
    }
}

impl ViewDelegate for TriangleView {
    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        self.renderer.resize(size);
    }

    fn on_draw(&mut self, ctx: &mut DrawCtx<'_, '_>) -> AppControl {
        let frame = ctx.current_drawable();
        let Some((drawable, pass)) = frame_parts(frame, || ctx.pre_present_notify()) else {
            return AppControl::Exit;
        };

        self.renderer
            .render(ctx.gpu().render_device(), drawable, pass.as_ref());
        AppControl::Continue
    }
}

/// Splits an acquired frame into the renderer's optional inputs.
///
/// `notify` runs only when there is a drawable to present. `None` means the
/// surface is gone for good.
fn frame_parts(
    frame: SurfaceFrame,
    notify: impl FnOnce(),
) -> Option<(Option<Drawable>, Option<PassDescriptor>)> {
    match frame {
        SurfaceFrame::Ready(drawable, pass) => {
            notify();
            Some((Some(drawable), Some(pass)))
        }
        SurfaceFrame::Unavailable => Some((None, None)),
        SurfaceFrame::Fatal => None,
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "trigon".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    Runtime::run(config, GpuInit::default(), TriangleView::new)?;

    log::info!("exiting");
    Ok(())
}
