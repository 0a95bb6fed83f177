use winit::dpi::PhysicalSize;

/// Picks the surface format.
///
/// Order: the preferred format, then the first non-sRGB format (the triangle
/// color is authored as raw unorm), then whatever comes first.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    preferred: Option<wgpu::TextureFormat>,
) -> Option<wgpu::TextureFormat> {
    if let Some(p) = preferred.filter(|p| formats.contains(p)) {
        return Some(p);
    }

    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}

pub(crate) fn choose_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| modes.contains(m))
        .or_else(|| modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Applies a new drawable size to the surface configuration.
///
/// wgpu cannot configure a 0x0 surface; the size is recorded and configuration
/// deferred until the window has area again. Returns whether `configure` must run.
pub(crate) fn apply_resize(
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    #[test]
    fn preferred_format_wins_when_supported() {
        let formats = [F::Rgba8UnormSrgb, F::Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats, Some(F::Bgra8Unorm)), Some(F::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_linear_format() {
        let formats = [F::Bgra8UnormSrgb, F::Rgba8Unorm, F::Rgba16Float];
        assert_eq!(choose_surface_format(&formats, Some(F::Bgra8Unorm)), Some(F::Rgba8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        let formats = [F::Bgra8UnormSrgb, F::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, None), Some(F::Bgra8UnormSrgb));
    }

    #[test]
    fn no_formats_means_none() {
        assert_eq!(choose_surface_format(&[], Some(F::Bgra8Unorm)), None);
    }

    #[test]
    fn unsupported_alpha_mode_is_replaced() {
        let modes = [wgpu::CompositeAlphaMode::Opaque];
        assert_eq!(
            choose_alpha_mode(&modes, Some(wgpu::CompositeAlphaMode::PreMultiplied)),
            wgpu::CompositeAlphaMode::Opaque
        );
        assert_eq!(choose_alpha_mode(&[], None), wgpu::CompositeAlphaMode::Auto);
    }

    fn config() -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: F::Bgra8Unorm,
            width: 100,
            height: 100,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    #[test]
    fn resize_updates_config() {
        let mut cfg = config();
        let mut size = PhysicalSize::new(100, 100);

        assert!(apply_resize(&mut cfg, &mut size, PhysicalSize::new(640, 480)));
        assert_eq!((cfg.width, cfg.height), (640, 480));
        assert_eq!(size, PhysicalSize::new(640, 480));
    }

    #[test]
    fn zero_resize_defers_configuration() {
        let mut cfg = config();
        let mut size = PhysicalSize::new(100, 100);

        assert!(!apply_resize(&mut cfg, &mut size, PhysicalSize::new(0, 480)));
        assert_eq!((cfg.width, cfg.height), (100, 100));
        assert_eq!(size, PhysicalSize::new(0, 480));
    }
}
