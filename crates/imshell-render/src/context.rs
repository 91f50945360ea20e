//! The GPU context: device, queue and window surface.

use std::sync::Arc;

use crate::error::{RenderError, RenderResult};

/// Long-lived GPU state bound to one window for the lifetime of the run.
///
/// Created once during startup and dropped once during shutdown; everything
/// per-frame (encoders, swapchain textures, render passes) is acquired and
/// released within a single iteration of the main loop.
pub struct GpuContext {
    // Fields drop in declaration order: the surface must release its swapchain
    // images before the device that allocated them is destroyed.
    /// The render surface bound to the window.
    pub surface: wgpu::Surface<'static>,
    /// Surface (swapchain) configuration.
    pub surface_config: wgpu::SurfaceConfiguration,
    /// The wgpu device.
    pub device: wgpu::Device,
    /// The wgpu queue.
    pub queue: wgpu::Queue,
    /// The wgpu adapter.
    pub adapter: wgpu::Adapter,
    /// The wgpu instance.
    pub instance: wgpu::Instance,
    /// Current surface width in physical pixels.
    pub width: u32,
    /// Current surface height in physical pixels.
    pub height: u32,
}

impl GpuContext {
    /// Creates a GPU context bound to the given window.
    ///
    /// Backend selection mirrors the shader formats the shell ships for:
    /// SPIR-V (Vulkan), DXIL (DX12) and platform-native bytecode (Metal).
    /// Validation layers are requested so collaborator misuse surfaces early.
    ///
    /// # Errors
    ///
    /// Returns an error if surface creation, adapter selection or device
    /// creation fails. Nothing acquired by earlier steps is released on the
    /// failure path; the caller is expected to terminate the process.
    pub async fn new(window: Arc<winit::window::Window>) -> RenderResult<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::VULKAN | wgpu::Backends::DX12 | wgpu::Backends::METAL,
            flags: wgpu::InstanceFlags::debugging(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| RenderError::AdapterCreationFailed)?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("imshell device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await?;

        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let surface_caps = surface.get_capabilities(&adapter);

        // Standard dynamic range: take the first sRGB format the surface offers.
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        // Low-latency triple buffering where the platform supports it; FIFO is
        // the only mode wgpu guarantees everywhere.
        let present_mode = if surface_caps
            .present_modes
            .contains(&wgpu::PresentMode::Mailbox)
        {
            wgpu::PresentMode::Mailbox
        } else {
            wgpu::PresentMode::Fifo
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        log::info!(
            "gpu context ready: {} ({surface_format:?}, {present_mode:?})",
            adapter.get_info().name
        );

        Ok(Self {
            surface,
            surface_config,
            device,
            queue,
            adapter,
            instance,
            width,
            height,
        })
    }

    /// Reconfigures the surface after a window resize.
    ///
    /// Zero-area sizes are ignored; the frame loop independently skips
    /// rendering while the framebuffer has no area.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.width = width;
        self.height = height;
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// The negotiated swapchain color format.
    #[must_use]
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }

    /// Attempts to acquire the next swapchain texture.
    ///
    /// A failed acquire is a normal skip-this-frame condition, not an error:
    /// the caller still submits its (empty) command buffer and tries again on
    /// the next iteration.
    #[must_use]
    pub fn acquire_frame(&self) -> Option<wgpu::SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Some(frame),
            Err(err) => {
                log::debug!("swapchain acquire failed, skipping frame: {err}");
                None
            }
        }
    }

    /// Blocks until all submitted GPU work has completed.
    ///
    /// Must run before any long-lived resource is destroyed during shutdown.
    pub fn wait_idle(&self) {
        let _ = self.device.poll(wgpu::PollType::Wait);
    }
}
