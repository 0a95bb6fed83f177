use winit::window::Window;

use crate::device::{Gpu, SurfaceFrame};

/// Per-frame context passed to `core::ViewDelegate::on_draw`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct DrawCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
}

impl<'a, 'w> DrawCtx<'a, 'w> {
    /// Acquires the drawable of this frame together with its pass descriptor.
    pub fn current_drawable(&mut self) -> SurfaceFrame {
        self.gpu.current_drawable()
    }

    /// Tells the windowing system a frame is about to be presented.
    pub fn pre_present_notify(&self) {
        self.window.pre_present_notify();
    }

    pub fn gpu(&self) -> &Gpu<'w> {
        &*self.gpu
    }
}
