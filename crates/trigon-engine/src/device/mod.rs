//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - producing the drawable and pass descriptor of each frame

mod context;
mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use context::GpuDevice;
pub use error::SurfaceErrorAction;
pub use frame::{Drawable, PassDescriptor, SurfaceFrame};
pub use gpu::Gpu;
pub use init::GpuInit;
