/// Logical device plus its command queue.
///
/// This is the surface-free half of [`super::Gpu`]: everything the renderer
/// needs to build pipelines and submit frames. It can be created on any
/// adapter, headless ones included.
#[derive(Debug)]
pub struct GpuDevice {
    device: wgpu::Device,

    /// Command queue, created once with the device.
    queue: wgpu::Queue,
}

impl GpuDevice {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self { device, queue }
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}
