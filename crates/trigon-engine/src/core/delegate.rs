use winit::dpi::PhysicalSize;

use super::ctx::DrawCtx;

/// Control directive returned by delegate callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Per-frame callbacks of a view.
///
/// The runtime calls `on_resize` after the surface has been reconfigured and
/// `on_draw` once per redraw. Calls never overlap.
pub trait ViewDelegate {
    /// Called when the drawable size changes.
    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        let _ = size;
    }

    /// Called once per redraw.
    fn on_draw(&mut self, ctx: &mut DrawCtx<'_, '_>) -> AppControl;
}
