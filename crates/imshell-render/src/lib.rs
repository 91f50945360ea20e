//! GPU backend for imshell.
//!
//! This crate wraps the wgpu setup an immediate-mode GUI shell needs:
//! - Instance/adapter/device acquisition against a window surface
//! - Swapchain (surface) configuration and resize handling
//! - Per-frame swapchain texture acquisition and the GPU idle barrier

pub mod context;
pub mod error;

pub use context::GpuContext;
pub use error::{RenderError, RenderResult};
