//! Application window and frame loop.

use std::sync::Arc;

use egui_wgpu::ScreenDescriptor;
use glam::Vec4;
use pollster::FutureExt;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use imshell_render::GpuContext;
use imshell_ui::{demo, DemoWindowState, UiIntegration};

use crate::lifecycle::{frame_disposition, FrameDisposition, Lifecycle, Signal};

/// Default frame clear color.
const CLEAR_COLOR: Vec4 = Vec4::new(0.45, 0.55, 0.60, 1.00);

/// The application state: the lifecycle machine plus the four long-lived
/// resources it owns (window, GPU context, UI integration) and the per-run
/// UI state (demo-window visibility, clear color).
pub struct App {
    lifecycle: Lifecycle,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    ui: Option<UiIntegration>,
    show_demo_window: bool,
    clear_color: Vec4,
    demo_state: DemoWindowState,
}

impl App {
    /// Creates the application in its uninitialized state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            window: None,
            gpu: None,
            ui: None,
            show_demo_window: true,
            clear_color: CLEAR_COLOR,
            demo_state: DemoWindowState::default(),
        }
    }

    /// Produces one frame: UI pass, swapchain acquire, render, submit.
    fn redraw(&mut self) {
        if !self.lifecycle.is_running() {
            return;
        }
        let (Some(window), Some(gpu), Some(ui)) = (&self.window, &mut self.gpu, &mut self.ui)
        else {
            return;
        };

        // Minimized: produce nothing this iteration, not even an encoder. The
        // redraw chain is not re-armed, so the event loop parks on the
        // platform queue until the next event; the events `rearms_redraw`
        // names restart it.
        let minimized = window.is_minimized().unwrap_or(false);
        if frame_disposition(minimized, false, 0, 0) == FrameDisposition::Skip {
            return;
        }

        ui.begin_frame(window);

        if self.show_demo_window {
            let mut rgba = self.clear_color.to_array();
            demo::show_demo_window(
                &ui.context,
                &mut self.show_demo_window,
                &mut rgba,
                &mut self.demo_state,
            );
            self.clear_color = Vec4::from_array(rgba);
        }

        let output = ui.end_frame(window);

        // The encoder is created unconditionally: the frame's command buffer
        // is submitted even when no render pass is recorded into it.
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });

        let frame = gpu.acquire_frame();

        let size = window.inner_size();
        let disposition = frame_disposition(minimized, frame.is_some(), size.width, size.height);
        if disposition == FrameDisposition::Render {
            let frame_ref = frame.as_ref().expect("texture checked above");
            let view = frame_ref
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());

            let screen_descriptor = ScreenDescriptor {
                size_in_pixels: [gpu.width, gpu.height],
                pixels_per_point: window.scale_factor() as f32,
            };

            let [r, g, b, a] = self.clear_color.to_array();
            ui.render(
                &gpu.device,
                &gpu.queue,
                &mut encoder,
                &view,
                &screen_descriptor,
                output,
                wgpu::Color {
                    r: f64::from(r),
                    g: f64::from(g),
                    b: f64::from(b),
                    a: f64::from(a),
                },
            );
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));

        if let Some(frame) = frame {
            frame.present();
        }

        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("imshell demo")
            .with_inner_size(LogicalSize::new(1280, 720));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .expect("failed to create window"),
        );

        let gpu = GpuContext::new(window.clone())
            .block_on()
            .expect("failed to create gpu context");

        let ui = UiIntegration::new(&gpu.device, gpu.surface_format(), &window);

        self.lifecycle.start(window.id().into());
        log::info!("imshell initialized");

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.ui = Some(ui);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        // The UI input bridge sees every event first so it can consume it.
        if let (Some(ui), Some(window)) = (&mut self.ui, &self.window) {
            let _ = ui.handle_event(window, &event);
        }

        let signal = match &event {
            WindowEvent::CloseRequested => Signal::CloseRequested(window_id.into()),
            WindowEvent::KeyboardInput { event: key, .. }
                if key.state == ElementState::Pressed
                    && key.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                Signal::Quit
            }
            _ => Signal::Other,
        };

        // No frame work happens after the terminating signal.
        if self.lifecycle.observe(signal) {
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }

        if rearms_redraw(&event) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.lifecycle.finish() {
            return;
        }

        // All in-flight GPU work must retire before anything it still
        // references is destroyed.
        if let Some(gpu) = &self.gpu {
            gpu.wait_idle();
        }

        // Reverse acquisition order: bridges and UI context first, then the
        // GPU context (surface before device), then the window.
        self.ui = None;
        self.gpu = None;
        self.window = None;

        log::info!("imshell shut down");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Events that restart the redraw chain after an idle spell. A restore from
/// the minimized state can arrive as any one of these, so all of them re-arm
/// the chain; redundant requests coalesce into a single redraw.
fn rearms_redraw(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::Resized(_) | WindowEvent::Focused(true) | WindowEvent::Occluded(false)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_restore_events_rearm_the_redraw_chain() {
        assert!(rearms_redraw(&WindowEvent::Resized(PhysicalSize::new(800, 600))));
        assert!(rearms_redraw(&WindowEvent::Focused(true)));
        assert!(rearms_redraw(&WindowEvent::Occluded(false)));
    }

    #[test]
    fn test_other_events_leave_the_loop_parked() {
        assert!(!rearms_redraw(&WindowEvent::Focused(false)));
        assert!(!rearms_redraw(&WindowEvent::Occluded(true)));
        assert!(!rearms_redraw(&WindowEvent::CloseRequested));
    }
}
