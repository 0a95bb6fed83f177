use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{AppControl, DrawCtx, ViewDelegate};
use crate::device::{Gpu, GpuInit};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `D` until the window closes.
    ///
    /// `setup` runs exactly once, after the device exists and before the first
    /// redraw. An error from it (or from device creation) stops the loop before
    /// any frame is drawn and is returned from here.
    pub fn run<D, F>(config: RuntimeConfig, gpu_init: GpuInit, setup: F) -> Result<()>
    where
        D: ViewDelegate + 'static,
        F: FnOnce(&Gpu<'_>) -> Result<D> + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, setup);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct ViewEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<D, F> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    setup: Option<F>,

    view: Option<ViewEntry>,
    delegate: Option<D>,

    failure: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<D, F> AppState<D, F>
where
    D: ViewDelegate + 'static,
    F: FnOnce(&Gpu<'_>) -> Result<D> + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, setup: F) -> Self {
        Self {
            config,
            gpu_init,
            setup: Some(setup),
            view: None,
            delegate: None,
            failure: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_view(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let view = ViewEntry::try_new(window, |w| pollster::block_on(Gpu::new(w, gpu_init)))
            .context("GPU initialization failed")?;

        let setup = self.setup.take().context("view setup already ran")?;
        let delegate = setup(view.borrow_gpu()).context("view setup failed")?;

        view.with_window(|w| w.request_redraw());
        self.view = Some(view);
        self.delegate = Some(delegate);
        Ok(())
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let (Some(view), Some(delegate)) = (self.view.as_mut(), self.delegate.as_mut()) else {
            return;
        };

        view.with_gpu_mut(|gpu| gpu.resize(new_size));
        delegate.on_resize(new_size);
        view.with_window(|w| w.request_redraw());
    }

    fn draw(&mut self) -> AppControl {
        let (Some(view), Some(delegate)) = (self.view.as_mut(), self.delegate.as_mut()) else {
            return AppControl::Continue;
        };

        view.with_mut(|fields| {
            let mut ctx = DrawCtx {
                window: fields.window,
                gpu: fields.gpu,
            };
            delegate.on_draw(&mut ctx)
        })
    }
}

impl<D, F> ApplicationHandler for AppState<D, F>
where
    D: ViewDelegate + 'static,
    F: FnOnce(&Gpu<'_>) -> Result<D> + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.view.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.create_view(event_loop) {
            log::error!("{e:#}");
            self.failure = Some(e);
            self.request_exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; FIFO presentation paces it to the display refresh.
        if let Some(view) = self.view.as_ref() {
            view.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.view = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self
                    .view
                    .as_ref()
                    .map(|v| v.with_window(|w| w.inner_size()))
                {
                    self.resize(size);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.draw() == AppControl::Exit {
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }
}
