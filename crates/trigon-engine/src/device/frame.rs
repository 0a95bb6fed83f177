/// Render target configuration for one frame.
///
/// Borrowed by the frame renderer for the duration of a single pass.
#[derive(Debug)]
pub struct PassDescriptor {
    pub view: wgpu::TextureView,
    pub clear: wgpu::Color,
}

impl PassDescriptor {
    /// Targets the whole of `texture`.
    pub fn for_texture(texture: &wgpu::Texture, clear: wgpu::Color) -> Self {
        Self {
            view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
            clear,
        }
    }
}

/// What one frame renders into.
///
/// Held by the command buffer until the frame is committed.
#[derive(Debug)]
pub enum Drawable {
    /// Swapchain image; presented after submission.
    Surface(wgpu::SurfaceTexture),
    /// Offscreen texture. There is nothing to present; the pixels stay in it.
    Texture(wgpu::Texture),
}

impl Drawable {
    pub(crate) fn present(self) {
        match self {
            Drawable::Surface(texture) => texture.present(),
            Drawable::Texture(_) => {}
        }
    }
}

/// Result of asking the surface for this frame's drawable.
pub enum SurfaceFrame {
    /// Drawable and its pass descriptor are ready.
    Ready(Drawable, PassDescriptor),
    /// Nothing to draw into this refresh; try again next frame.
    Unavailable,
    /// The surface cannot recover.
    Fatal,
}
