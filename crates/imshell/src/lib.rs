//! imshell: a minimal immediate-mode GUI shell.
//!
//! Demonstrates bringing up a GPU-accelerated immediate-mode UI (egui) on top
//! of a windowing layer (winit) and a hardware-agnostic GPU API (wgpu), then
//! running a single demo window inside a frame loop:
//!
//! - one-time window / device / UI-context / bridge setup,
//! - per frame: new frame → build UI → render → submit,
//! - teardown in reverse order of acquisition.
//!
//! # Quick Start
//!
//! ```no_run
//! fn main() {
//!     imshell::run();
//! }
//! ```
//!
//! The demo window can be closed with its own close button (the shell keeps
//! running with an empty scene); Escape or closing the window quits.

mod app;
pub mod lifecycle;

pub use app::App;
pub use lifecycle::{FrameDisposition, Lifecycle, Phase, Signal};

use winit::event_loop::EventLoop;

/// Opens the shell window and runs the main loop until it is closed.
///
/// This function blocks for the whole run. Fatal setup failures (window,
/// adapter, device, surface) terminate the process with a diagnostic naming
/// the failing operation.
pub fn run() {
    let _ = env_logger::try_init();

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = App::new();

    event_loop.run_app(&mut app).expect("event loop error");
}
