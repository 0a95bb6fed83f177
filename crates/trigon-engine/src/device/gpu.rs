use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface;
use super::{Drawable, GpuDevice, GpuInit, PassDescriptor, SurfaceErrorAction, SurfaceFrame};

/// Owns wgpu core objects and the surface configuration.
///
/// This is the device handle of the application:
/// - creates and stores Instance/Adapter/Device/Queue
/// - creates and configures the Surface (swapchain)
/// - hands out the drawable and pass descriptor of each frame
///
/// Rendering itself only goes through [`Gpu::render_device`].
pub struct Gpu<'w> {
    /// Kept alive for the surface.
    _instance: wgpu::Instance,

    /// Surface bound to the window.
    surface: wgpu::Surface<'w>,

    /// Device and queue.
    render: GpuDevice,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,

    clear_color: wgpu::Color,
}

impl<'w> Gpu<'w> {
    /// Creates a GPU context bound to a window.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let GpuInit {
            preferred_format,
            present_mode,
            alpha_mode,
            required_features,
            required_limits,
            desired_maximum_frame_latency,
            clear_color,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("using adapter `{}` ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("trigon device"),
                required_features,
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps.formats, preferred_format)
            .context("no supported surface formats")?;
        if preferred_format.is_some_and(|p| p != format) {
            log::warn!("preferred surface format {preferred_format:?} unavailable, using {format:?}");
        }

        let alpha_mode = surface::choose_alpha_mode(&caps.alpha_modes, alpha_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);
        log::debug!("surface configured: {format:?} {}x{}", size.width, size.height);

        Ok(Self {
            _instance: instance,
            surface,
            render: GpuDevice::new(device, queue),
            config,
            size,
            clear_color,
        })
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Device and queue the renderer records and submits with.
    pub fn render_device(&self) -> &GpuDevice {
        &self.render
    }

    /// Reconfigures the surface after a resize.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if surface::apply_resize(&mut self.config, &mut self.size, new_size) {
            self.surface.configure(self.render.device(), &self.config);
        }
    }

    /// Acquires this frame's drawable and a pass descriptor targeting it.
    ///
    /// Surface errors are resolved here: recoverable ones reconfigure or skip
    /// the frame, out-of-memory is reported as fatal.
    pub fn current_drawable(&mut self) -> SurfaceFrame {
        if self.size.width == 0 || self.size.height == 0 {
            return SurfaceFrame::Unavailable;
        }

        let texture = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(err) => {
                return match self.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => SurfaceFrame::Fatal,
                    _ => SurfaceFrame::Unavailable,
                };
            }
        };

        let pass = PassDescriptor::for_texture(&texture.texture, self.clear_color);
        SurfaceFrame::Ready(Drawable::Surface(texture), pass)
    }

    /// Converts a `SurfaceError` into a higher-level action.
    fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        let action = SurfaceErrorAction::classify(&err);
        match action {
            SurfaceErrorAction::Reconfigured => {
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(self.render.device(), &self.config);
                }
                log::debug!("surface {err}; reconfigured");
            }
            SurfaceErrorAction::SkipFrame => log::debug!("surface {err}; skipping frame"),
            SurfaceErrorAction::Fatal => log::error!("surface {err}"),
        }
        action
    }
}
