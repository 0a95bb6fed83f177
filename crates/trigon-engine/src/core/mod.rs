//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the view code
//! that draws into it.

mod ctx;
mod delegate;

pub use ctx::DrawCtx;
pub use delegate::{AppControl, ViewDelegate};
