//! GPU setup error types.

use thiserror::Error;

/// Errors that can occur while bringing up the GPU context.
///
/// These are all fatal: the shell reports the failing operation and exits.
/// There is no recoverable-error category once the context is running.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No adapter was compatible with the surface.
    #[error("failed to create graphics adapter")]
    AdapterCreationFailed,

    /// Failed to create the wgpu device.
    #[error("failed to create graphics device: {0}")]
    DeviceCreationFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create the window surface.
    #[error("failed to create surface: {0}")]
    SurfaceCreationFailed(#[from] wgpu::CreateSurfaceError),
}

/// A specialized Result type for GPU context operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
