//! Trigon engine crate.
//!
//! Draws a single static triangle: a window runtime and GPU device on one side,
//! the pipeline builder and frame renderer on the other.

pub mod core;
pub mod device;
pub mod window;

pub mod logging;
pub mod render;
